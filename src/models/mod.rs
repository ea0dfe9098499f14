pub mod activity;
pub mod cleaned;
pub mod date_features;
pub mod summary;

pub use activity::{
    ActivityRecord, ActivityTable, Category, ColumnIndex, DerivedRecord, DerivedTable,
    ParticipationCounts,
};
pub use cleaned::CleanedActivityRecord;
pub use date_features::{week_start, DateFeatures};
pub use summary::RunSummary;
