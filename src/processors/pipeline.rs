use crate::error::Result;
use crate::models::{Category, RunSummary};
use crate::processors::{ActivityCleaner, DateFeatureDeriver, ReferralExtractor};
use crate::readers::ActivityReader;
use crate::utils::constants::{ACTIVITIES_FILE, INPUT_FILE, REFERRALS_FILE};
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvTableWriter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Runs load, derive, extract and clean against one working directory.
pub struct Pipeline {
    work_dir: PathBuf,
}

impl Pipeline {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.work_dir.join(INPUT_FILE)
    }

    pub fn referrals_path(&self) -> PathBuf {
        self.work_dir.join(REFERRALS_FILE)
    }

    pub fn activities_path(&self) -> PathBuf {
        self.work_dir.join(ACTIVITIES_FILE)
    }

    pub fn run(&self, progress: Option<&ProgressReporter>) -> Result<RunSummary> {
        self.run_on(&self.input_path(), progress)
    }

    /// Same as [`Pipeline::run`] but reading from an explicit input file.
    pub fn run_on(&self, input: &Path, progress: Option<&ProgressReporter>) -> Result<RunSummary> {
        let mut summary = RunSummary {
            referrals_path: self.referrals_path(),
            activities_path: self.activities_path(),
            ..RunSummary::default()
        };

        if let Some(p) = progress {
            p.set_message("Loading activity log...");
        }
        let table = ActivityReader::new().read_activities(input)?;
        summary.rows_loaded = table.len();
        info!("Loaded {} rows from {}", table.len(), input.display());

        if let Some(p) = progress {
            p.set_message("Deriving date features...");
        }
        let derived = DateFeatureDeriver::new().derive(table);
        summary.rows_missing_date = derived.rows.iter().filter(|r| r.features.is_none()).count();
        if summary.rows_missing_date > 0 {
            warn!(
                "{} rows have no ActivityDate; their calendar fields are left empty",
                summary.rows_missing_date
            );
        }
        summary.other_category_rows = derived
            .rows
            .iter()
            .filter(|r| r.record.category() == Category::Other)
            .count();

        if let Some(p) = progress {
            p.set_message("Extracting referrals...");
        }
        let writer = CsvTableWriter::new();
        let referrals = ReferralExtractor::new().extract(&derived);
        writer.write_referrals(&derived.columns, &referrals.rows, &summary.referrals_path)?;
        summary.referrals_written = referrals.rows.len();
        summary.referrals_head_count_excluded = referrals.head_count_excluded;
        info!(
            "Wrote {} referrals to {} ({} head-count rows excluded)",
            summary.referrals_written,
            summary.referrals_path.display(),
            summary.referrals_head_count_excluded
        );

        if let Some(p) = progress {
            p.set_message("Cleaning programme activities...");
        }
        let cleaned = ActivityCleaner::new().clean(&derived);
        writer.write_activities(&cleaned.records, &summary.activities_path)?;
        summary.activities_written = cleaned.records.len();
        summary.activities_without_participants = cleaned.without_participants;
        info!(
            "Wrote {} activities to {} ({} without participants dropped)",
            summary.activities_written,
            summary.activities_path.display(),
            summary.activities_without_participants
        );

        if let Some(p) = progress {
            p.finish_with_message("Cleaning complete");
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_are_in_work_dir() {
        let pipeline = Pipeline::new("/data/run");
        assert_eq!(
            pipeline.input_path(),
            PathBuf::from("/data/run/Datathon - CHA activities 2016-2020.csv")
        );
        assert_eq!(
            pipeline.referrals_path(),
            PathBuf::from("/data/run/referrals.csv")
        );
        assert_eq!(
            pipeline.activities_path(),
            PathBuf::from("/data/run/activities.csv")
        );
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let pipeline = Pipeline::new(temp_dir.path());

        let err = pipeline.run(None).unwrap_err();
        assert!(err.is_load_error());
        assert!(!pipeline.referrals_path().exists());
        assert!(!pipeline.activities_path().exists());
    }
}
