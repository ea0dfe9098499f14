use crate::models::{Category, CleanedActivityRecord, DerivedTable};

#[derive(Debug, Clone, Default)]
pub struct CleanedActivities {
    pub records: Vec<CleanedActivityRecord>,
    /// Programme rows dropped because nobody attended
    pub without_participants: usize,
}

/// Keeps programmed activities that actually ran and projects them to the
/// published column set.
pub struct ActivityCleaner;

impl ActivityCleaner {
    pub fn new() -> Self {
        Self
    }

    pub fn clean(&self, table: &DerivedTable) -> CleanedActivities {
        let mut cleaned = CleanedActivities::default();

        for row in table
            .rows
            .iter()
            .filter(|row| row.record.category() == Category::ProgrammedActivities)
        {
            // Zero attendance usually means the session did not run.
            if row.record.counts.has_participants() {
                cleaned.records.push(CleanedActivityRecord::from(row));
            } else {
                cleaned.without_participants += 1;
            }
        }

        cleaned
    }
}

impl Default for ActivityCleaner {
    fn default() -> Self {
        Self::new()
    }
}
