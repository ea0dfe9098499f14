use crate::models::{Category, DerivedRecord, DerivedTable};
use crate::utils::constants::HEAD_COUNT_PROGRAMMES;
use std::collections::HashSet;

/// Referral rows selected from a derived table.
#[derive(Debug)]
pub struct ReferralExtraction<'a> {
    pub rows: Vec<&'a DerivedRecord>,
    /// Referral rows dropped because their programme only records head counts
    pub head_count_excluded: usize,
}

/// Selects service referrals, leaving out the head-count programmes.
pub struct ReferralExtractor {
    excluded_programmes: HashSet<&'static str>,
}

impl ReferralExtractor {
    pub fn new() -> Self {
        Self {
            excluded_programmes: HEAD_COUNT_PROGRAMMES.into_iter().collect(),
        }
    }

    pub fn is_excluded_programme(&self, programme_name: &str) -> bool {
        self.excluded_programmes.contains(programme_name)
    }

    pub fn extract<'a>(&self, table: &'a DerivedTable) -> ReferralExtraction<'a> {
        let referrals = table
            .rows
            .iter()
            .filter(|row| row.record.category() == Category::ServiceReferrals);

        let mut rows = Vec::new();
        let mut head_count_excluded = 0;
        for row in referrals {
            if self.is_excluded_programme(&row.record.programme_name) {
                head_count_excluded += 1;
            } else {
                rows.push(row);
            }
        }

        ReferralExtraction {
            rows,
            head_count_excluded,
        }
    }
}

impl Default for ReferralExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::DateFeatureDeriver;
    use crate::readers::ActivityReader;
    use std::path::Path;

    const CSV: &str = "HubRandomID,Hub_ActivityID,CategoryName,ProgrammeName,ActivityDate,\
ChildParticipants,AdultParticipants,ReferralParticipants,EngagedCount,ExternalVolunteers,\
HubVolunteers,SchoolVolunteers
H1,A1,Service Referrals,Adults,2019-11-08,,,3,,,,
H1,A2,Service Referrals,Job Counseling,2019-11-08,,,2,,,,
H2,A3,Service Referrals,Children,2019-11-09,,,1,,,,
H2,A4,Programmed Activities,Job Counseling,2019-11-09,5,,,,,,
H2,A5,Service Referrals,Number of families participating in the Hub,2019-11-10,,,,,,,
H3,A6,Service Referrals,Participants who gained employment,2019-11-10,,,,,,,
H3,A7,Service Referrals,Housing Support,,,,1,,,,
H3,A8,Service referrals,Legal Aid,2019-11-11,,,1,,,,
";

    fn derived() -> DerivedTable {
        let table = ActivityReader::new()
            .parse_activities(CSV, Path::new("inline.csv"))
            .unwrap();
        DateFeatureDeriver::new().derive(table)
    }

    #[test]
    fn test_extract_referrals() {
        let table = derived();
        let extraction = ReferralExtractor::new().extract(&table);

        let ids: Vec<&str> = extraction
            .rows
            .iter()
            .map(|r| r.record.hub_activity_id.as_str())
            .collect();
        assert_eq!(ids, vec!["A2", "A7"]);
        assert_eq!(extraction.head_count_excluded, 4);
    }

    #[test]
    fn test_extracted_rows_satisfy_filters() {
        let table = derived();
        let extractor = ReferralExtractor::new();
        let extraction = extractor.extract(&table);

        for row in extraction.rows {
            assert_eq!(row.record.category_name, "Service Referrals");
            assert!(!extractor.is_excluded_programme(&row.record.programme_name));
        }
    }

    #[test]
    fn test_exclusion_is_exact_match() {
        let extractor = ReferralExtractor::new();
        assert!(extractor.is_excluded_programme("Adults"));
        assert!(!extractor.is_excluded_programme("adults"));
        assert!(!extractor.is_excluded_programme("Adults "));
        assert!(!extractor.is_excluded_programme("Job Counseling"));
    }
}
