use chrono::{NaiveDate, NaiveDateTime};

use crate::readers::activity_reader::is_null_cell;
use crate::utils::constants::{DATE_FORMATS, TIME_SUFFIXES};

/// A date layout, optionally followed by a time of day that is dropped on parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    pub date: &'static str,
    pub time: Option<&'static str>,
}

impl DateFormat {
    pub fn new(date: &'static str) -> Self {
        Self { date, time: None }
    }

    pub fn with_time(date: &'static str, time: &'static str) -> Self {
        Self {
            date,
            time: Some(time),
        }
    }

    pub fn parse(&self, value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        match self.time {
            None => NaiveDate::parse_from_str(value, self.date).ok(),
            Some(time) => {
                let pattern = format!("{}{}", self.date, time);
                NaiveDateTime::parse_from_str(value, &pattern)
                    .ok()
                    .map(|dt| dt.date())
            }
        }
    }

    /// Every supported layout, in inference order.
    pub fn candidates() -> Vec<DateFormat> {
        let mut formats = Vec::with_capacity(DATE_FORMATS.len() * (TIME_SUFFIXES.len() + 1));
        for date in DATE_FORMATS {
            formats.push(DateFormat::new(date));
            for time in TIME_SUFFIXES {
                formats.push(DateFormat::with_time(date, time));
            }
        }
        formats
    }
}

impl std::fmt::Display for DateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.date, self.time.unwrap_or(""))
    }
}

/// Pick the first layout that parses every non-missing value.
///
/// When no layout fits the whole column, falls back to the first layout
/// that fits the first value so the caller can report the offending row.
/// Returns `None` if even the first value matches nothing.
pub fn infer_date_format<'a, I>(values: I) -> Option<DateFormat>
where
    I: IntoIterator<Item = &'a str>,
{
    let values: Vec<&str> = values
        .into_iter()
        .map(str::trim)
        .filter(|v| !is_null_cell(v))
        .collect();
    let first = values.first()?;

    let candidates: Vec<DateFormat> = DateFormat::candidates()
        .into_iter()
        .filter(|f| f.parse(first).is_some())
        .collect();

    candidates
        .iter()
        .find(|f| values.iter().all(|v| f.parse(v).is_some()))
        .or_else(|| candidates.first())
        .copied()
}
