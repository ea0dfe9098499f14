use chrono::NaiveDate;

use crate::error::{ProcessingError, Result};
use crate::models::DateFeatures;
use crate::utils::constants::{
    CATEGORY_PROGRAMMED_ACTIVITIES, CATEGORY_SERVICE_REFERRALS, COL_ACTIVITY_DATE,
    COL_CATEGORY_NAME, COL_HUB_ACTIVITY_ID, COL_HUB_RANDOM_ID, COL_PROGRAMME_NAME, COUNT_COLUMNS,
    DERIVED_COLUMNS, OUTPUT_DATE_FORMAT,
};

/// Positions of the columns the pipeline reads, resolved once per file.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    pub headers: Vec<String>,
    pub hub_random_id: usize,
    pub hub_activity_id: usize,
    pub category_name: usize,
    pub programme_name: usize,
    pub activity_date: usize,
    /// Positions of [`COUNT_COLUMNS`], in that order
    pub counts: [usize; 7],
}

impl ColumnIndex {
    pub fn from_headers<I, S>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let headers: Vec<String> = headers
            .into_iter()
            .map(|h| h.as_ref().to_string())
            .collect();

        let position = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ProcessingError::MissingColumn(name.to_string()))
        };

        let mut counts = [0usize; 7];
        for (slot, name) in counts.iter_mut().zip(COUNT_COLUMNS) {
            *slot = position(name)?;
        }

        Ok(Self {
            hub_random_id: position(COL_HUB_RANDOM_ID)?,
            hub_activity_id: position(COL_HUB_ACTIVITY_ID)?,
            category_name: position(COL_CATEGORY_NAME)?,
            programme_name: position(COL_PROGRAMME_NAME)?,
            activity_date: position(COL_ACTIVITY_DATE)?,
            counts,
            headers,
        })
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Source headers followed by the derived column names.
    pub fn derived_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .cloned()
            .chain(DERIVED_COLUMNS.iter().map(|c| c.to_string()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ServiceReferrals,
    ProgrammedActivities,
    Other,
}

impl Category {
    pub fn from_name(name: &str) -> Self {
        match name {
            CATEGORY_SERVICE_REFERRALS => Category::ServiceReferrals,
            CATEGORY_PROGRAMMED_ACTIVITIES => Category::ProgrammedActivities,
            _ => Category::Other,
        }
    }
}

/// Participation and volunteer counts. `None` means the cell was empty or not a count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParticipationCounts {
    pub child_participants: Option<u32>,
    pub adult_participants: Option<u32>,
    pub referral_participants: Option<u32>,
    pub engaged_count: Option<u32>,
    pub external_volunteers: Option<u32>,
    pub hub_volunteers: Option<u32>,
    pub school_volunteers: Option<u32>,
}

impl ParticipationCounts {
    /// Build from values in [`COUNT_COLUMNS`] order.
    pub fn from_array(values: [Option<u32>; 7]) -> Self {
        let [child, adult, referral, engaged, external, hub, school] = values;
        Self {
            child_participants: child,
            adult_participants: adult,
            referral_participants: referral,
            engaged_count: engaged,
            external_volunteers: external,
            hub_volunteers: hub,
            school_volunteers: school,
        }
    }

    /// Missing counts never count as participation.
    pub fn has_participants(&self) -> bool {
        self.child_participants.unwrap_or(0) > 0 || self.adult_participants.unwrap_or(0) > 0
    }
}

/// One row of the source table.
#[derive(Debug, Clone)]
pub struct ActivityRecord {
    /// Line number in the source file
    pub line: u64,
    pub hub_random_id: String,
    pub hub_activity_id: String,
    pub category_name: String,
    pub programme_name: String,
    pub activity_date: Option<NaiveDate>,
    pub counts: ParticipationCounts,
    /// Every source cell, in header order
    pub fields: Vec<String>,
}

impl ActivityRecord {
    pub fn category(&self) -> Category {
        Category::from_name(&self.category_name)
    }

    /// Source cells with `ActivityDate` rewritten in ISO format.
    pub fn output_fields(&self, columns: &ColumnIndex) -> Vec<String> {
        let mut fields = self.fields.clone();
        if let Some(cell) = fields.get_mut(columns.activity_date) {
            *cell = self
                .activity_date
                .map(|d| d.format(OUTPUT_DATE_FORMAT).to_string())
                .unwrap_or_default();
        }
        fields
    }
}

/// The loaded source table.
#[derive(Debug, Clone)]
pub struct ActivityTable {
    pub columns: ColumnIndex,
    pub records: Vec<ActivityRecord>,
}

impl ActivityTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A source row together with its calendar fields.
#[derive(Debug, Clone)]
pub struct DerivedRecord {
    pub record: ActivityRecord,
    /// `None` when the row has no `ActivityDate`
    pub features: Option<DateFeatures>,
}

impl DerivedRecord {
    /// Source cells followed by the six derived cells.
    pub fn output_fields(&self, columns: &ColumnIndex) -> Vec<String> {
        let mut fields = self.record.output_fields(columns);
        fields.extend(DateFeatures::to_fields(self.features.as_ref()));
        fields
    }
}

/// The canonical table after date features have been added.
#[derive(Debug, Clone)]
pub struct DerivedTable {
    pub columns: ColumnIndex,
    pub rows: Vec<DerivedRecord>,
}

impl DerivedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
