use chrono::{Datelike, Days, NaiveDate};

use crate::utils::constants::OUTPUT_DATE_FORMAT;

/// Calendar fields derived from an activity date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFeatures {
    pub year: i32,
    pub quarter: u32,
    pub month: u32,
    pub year_quarter: String,
    pub year_month: String,
    pub week_start: NaiveDate,
}

impl DateFeatures {
    /// `None` only when the week start falls before the earliest representable date.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        let year = date.year();
        let month = date.month();
        let quarter = (month - 1) / 3 + 1;

        Some(Self {
            year,
            quarter,
            month,
            year_quarter: format!("{}-{}", year, quarter),
            year_month: format!("{}-{}", year, month),
            week_start: week_start(date)?,
        })
    }

    /// Cells in derived column order. A missing date yields six empty cells.
    pub fn to_fields(features: Option<&DateFeatures>) -> [String; 6] {
        match features {
            Some(f) => [
                f.year.to_string(),
                f.quarter.to_string(),
                f.month.to_string(),
                f.year_quarter.clone(),
                f.year_month.clone(),
                f.week_start.format(OUTPUT_DATE_FORMAT).to_string(),
            ],
            None => Default::default(),
        }
    }
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    // Monday = 0, so Sunday (6) steps back 0 days and Monday steps back 1.
    let back = (date.weekday().num_days_from_monday() + 1) % 7;
    date.checked_sub_days(Days::new(back as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_friday_features() {
        let features = DateFeatures::from_date(ymd(2019, 11, 8)).unwrap();

        assert_eq!(features.year, 2019);
        assert_eq!(features.quarter, 4);
        assert_eq!(features.month, 11);
        assert_eq!(features.year_quarter, "2019-4");
        assert_eq!(features.year_month, "2019-11");
        assert_eq!(features.week_start, ymd(2019, 11, 3));
    }

    #[test]
    fn test_month_is_not_zero_padded() {
        let features = DateFeatures::from_date(ymd(2017, 1, 31)).unwrap();

        assert_eq!(features.quarter, 1);
        assert_eq!(features.year_month, "2017-1");
        assert_eq!(features.year_quarter, "2017-1");
    }

    #[test]
    fn test_week_start_on_sunday_is_same_day() {
        let sunday = ymd(2019, 11, 3);
        assert_eq!(week_start(sunday), Some(sunday));
        assert_eq!(week_start(ymd(2019, 11, 9)), Some(sunday));
        assert_eq!(week_start(ymd(2019, 11, 4)), Some(sunday));
    }

    #[test]
    fn test_week_start_crosses_year_boundary() {
        assert_eq!(week_start(ymd(2020, 1, 1)), Some(ymd(2019, 12, 29)));
    }

    #[test]
    fn test_week_start_near_earliest_date_does_not_panic() {
        let mut date = NaiveDate::MIN;
        for _ in 0..7 {
            match DateFeatures::from_date(date) {
                Some(features) => {
                    assert!(features.week_start >= NaiveDate::MIN);
                    assert_eq!(features.week_start.weekday(), Weekday::Sun);
                }
                None => assert_ne!(date.weekday(), Weekday::Sun),
            }
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_week_start_properties_over_a_year() {
        let mut date = ymd(2016, 1, 1);
        let end = ymd(2017, 1, 1);

        while date < end {
            let features = DateFeatures::from_date(date).unwrap();
            let start = features.week_start;
            assert!(start <= date);
            assert!((date - start).num_days() <= 6);
            assert_eq!(start.weekday(), Weekday::Sun);
            assert_eq!(
                features.year_quarter,
                format!("{}-{}", features.year, features.quarter)
            );
            assert_eq!(
                features.year_month,
                format!("{}-{}", features.year, features.month)
            );
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_fields_for_missing_date_are_empty() {
        let fields = DateFeatures::to_fields(None);
        assert!(fields.iter().all(|f| f.is_empty()));

        let features = DateFeatures::from_date(ymd(2019, 11, 8)).unwrap();
        assert_eq!(
            DateFeatures::to_fields(Some(&features)),
            ["2019", "4", "11", "2019-4", "2019-11", "2019-11-03"].map(String::from)
        );
    }
}
