use chrono::NaiveDate;
use serde::Serialize;

use crate::models::DerivedRecord;

/// A programme activity row projected to the published column set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanedActivityRecord {
    #[serde(rename = "HubRandomID")]
    pub hub_random_id: String,
    #[serde(rename = "Hub_ActivityID")]
    pub hub_activity_id: String,
    #[serde(rename = "ActivityDate")]
    pub activity_date: Option<NaiveDate>,
    pub year: Option<i32>,
    pub quarter: Option<u32>,
    pub month: Option<u32>,
    pub year_quarter: Option<String>,
    pub year_month: Option<String>,
    pub week_start: Option<NaiveDate>,
    #[serde(rename = "ProgrammeName")]
    pub programme_name: String,
    #[serde(rename = "ReferralParticipants")]
    pub referral_participants: Option<u32>,
    #[serde(rename = "EngagedCount")]
    pub engaged_count: Option<u32>,
    #[serde(rename = "ExternalVolunteers")]
    pub external_volunteers: Option<u32>,
    #[serde(rename = "HubVolunteers")]
    pub hub_volunteers: Option<u32>,
    #[serde(rename = "SchoolVolunteers")]
    pub school_volunteers: Option<u32>,
}

impl CleanedActivityRecord {
    /// Output header, in serialization order.
    pub const COLUMNS: [&'static str; 15] = [
        "HubRandomID",
        "Hub_ActivityID",
        "ActivityDate",
        "year",
        "quarter",
        "month",
        "year_quarter",
        "year_month",
        "week_start",
        "ProgrammeName",
        "ReferralParticipants",
        "EngagedCount",
        "ExternalVolunteers",
        "HubVolunteers",
        "SchoolVolunteers",
    ];
}

impl From<&DerivedRecord> for CleanedActivityRecord {
    fn from(row: &DerivedRecord) -> Self {
        let record = &row.record;
        let features = row.features.as_ref();

        Self {
            hub_random_id: record.hub_random_id.clone(),
            hub_activity_id: record.hub_activity_id.clone(),
            activity_date: record.activity_date,
            year: features.map(|f| f.year),
            quarter: features.map(|f| f.quarter),
            month: features.map(|f| f.month),
            year_quarter: features.map(|f| f.year_quarter.clone()),
            year_month: features.map(|f| f.year_month.clone()),
            week_start: features.map(|f| f.week_start),
            programme_name: record.programme_name.clone(),
            referral_participants: record.counts.referral_participants,
            engaged_count: record.counts.engaged_count,
            external_volunteers: record.counts.external_volunteers,
            hub_volunteers: record.counts.hub_volunteers,
            school_volunteers: record.counts.school_volunteers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityRecord, DateFeatures, ParticipationCounts};
    use pretty_assertions::assert_eq;

    fn derived(date: Option<NaiveDate>) -> DerivedRecord {
        DerivedRecord {
            record: ActivityRecord {
                line: 2,
                hub_random_id: "H17".to_string(),
                hub_activity_id: "A900".to_string(),
                category_name: "Programmed Activities".to_string(),
                programme_name: "Playgroup".to_string(),
                activity_date: date,
                counts: ParticipationCounts::from_array([
                    Some(4),
                    Some(3),
                    None,
                    Some(7),
                    Some(1),
                    Some(0),
                    None,
                ]),
                fields: Vec::new(),
            },
            features: date.and_then(DateFeatures::from_date),
        }
    }

    fn to_csv(record: &CleanedActivityRecord) -> String {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(record).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_serialized_header_matches_columns() {
        let record = CleanedActivityRecord::from(&derived(NaiveDate::from_ymd_opt(2019, 11, 8)));
        let csv = to_csv(&record);
        let header = csv.lines().next().unwrap();

        assert_eq!(header, CleanedActivityRecord::COLUMNS.join(","));
    }

    #[test]
    fn test_serialized_row() {
        let record = CleanedActivityRecord::from(&derived(NaiveDate::from_ymd_opt(2019, 11, 8)));
        let csv = to_csv(&record);
        let row = csv.lines().nth(1).unwrap();

        assert_eq!(
            row,
            "H17,A900,2019-11-08,2019,4,11,2019-4,2019-11,2019-11-03,Playgroup,,7,1,0,"
        );
    }

    #[test]
    fn test_missing_date_projects_empty_calendar_fields() {
        let record = CleanedActivityRecord::from(&derived(None));
        let csv = to_csv(&record);
        let row = csv.lines().nth(1).unwrap();

        assert_eq!(row, "H17,A900,,,,,,,,Playgroup,,7,1,0,");
    }
}
