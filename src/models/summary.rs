use std::path::PathBuf;

/// Row counts gathered over one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub rows_missing_date: usize,
    pub referrals_written: usize,
    pub referrals_head_count_excluded: usize,
    pub activities_written: usize,
    pub activities_without_participants: usize,
    pub other_category_rows: usize,
    pub referrals_path: PathBuf,
    pub activities_path: PathBuf,
}

impl RunSummary {
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Activity Cleaning Report ===\n");
        summary.push_str(&format!("Rows Loaded: {}\n", self.rows_loaded));
        summary.push_str(&format!(
            "Rows Without ActivityDate: {}\n",
            self.rows_missing_date
        ));
        summary.push_str(&format!(
            "Other Category Rows Dropped: {}\n",
            self.other_category_rows
        ));
        summary.push_str(&format!(
            "\nReferrals Written: {} ({} head-count rows excluded)\n",
            self.referrals_written, self.referrals_head_count_excluded
        ));
        summary.push_str(&format!("  -> {}\n", self.referrals_path.display()));
        summary.push_str(&format!(
            "Activities Written: {} ({} without participants dropped)\n",
            self.activities_written, self.activities_without_participants
        ));
        summary.push_str(&format!("  -> {}\n", self.activities_path.display()));

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_mentions_counts_and_paths() {
        let summary = RunSummary {
            rows_loaded: 10,
            rows_missing_date: 1,
            referrals_written: 3,
            referrals_head_count_excluded: 2,
            activities_written: 4,
            activities_without_participants: 1,
            other_category_rows: 0,
            referrals_path: PathBuf::from("out/referrals.csv"),
            activities_path: PathBuf::from("out/activities.csv"),
        };
        let text = summary.summary();

        assert!(text.contains("Rows Loaded: 10"));
        assert!(text.contains("Referrals Written: 3 (2 head-count rows excluded)"));
        assert!(text.contains("Activities Written: 4 (1 without participants dropped)"));
        assert!(text.contains("out/activities.csv"));
    }
}
