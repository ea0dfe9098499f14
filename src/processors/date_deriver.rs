use crate::models::{ActivityTable, DateFeatures, DerivedRecord, DerivedTable};
use tracing::debug;

/// Adds calendar columns to every row of a loaded table.
pub struct DateFeatureDeriver;

impl DateFeatureDeriver {
    pub fn new() -> Self {
        Self
    }

    /// Consume the loaded table and return it with date features attached.
    /// Rows without a usable `ActivityDate` get no features.
    pub fn derive(&self, table: ActivityTable) -> DerivedTable {
        let rows: Vec<DerivedRecord> = table
            .records
            .into_iter()
            .map(|record| DerivedRecord {
                features: record.activity_date.and_then(DateFeatures::from_date),
                record,
            })
            .collect();

        debug!(
            "Derived date features for {} rows ({} without ActivityDate)",
            rows.len(),
            rows.iter().filter(|r| r.features.is_none()).count()
        );

        DerivedTable {
            columns: table.columns,
            rows,
        }
    }
}

impl Default for DateFeatureDeriver {
    fn default() -> Self {
        Self::new()
    }
}
