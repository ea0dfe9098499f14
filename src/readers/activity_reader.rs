use crate::error::{ProcessingError, Result};
use crate::models::{ActivityRecord, ActivityTable, ColumnIndex, ParticipationCounts};
use crate::readers::date_format::{infer_date_format, DateFormat};
use crate::utils::constants::{COUNT_COLUMNS, NULL_TOKENS};
use csv::StringRecord;
use encoding_rs::UTF_8;
use std::path::Path;
use tracing::{debug, warn};

pub struct ActivityReader;

impl ActivityReader {
    pub fn new() -> Self {
        Self
    }

    /// Load the activity table from a CSV file with a header row
    pub fn read_activities(&self, path: &Path) -> Result<ActivityTable> {
        let bytes = std::fs::read(path).map_err(|e| ProcessingError::load(path, e))?;

        let (text, had_errors) = UTF_8.decode_with_bom_removal(&bytes);
        if had_errors {
            return Err(ProcessingError::load(path, "file is not valid UTF-8"));
        }

        self.parse_activities(&text, path)
    }

    /// Parse CSV text already in memory. `source` is only used in error messages.
    pub fn parse_activities(&self, text: &str, source: &Path) -> Result<ActivityTable> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| ProcessingError::load(source, e))?
            .clone();
        let columns = ColumnIndex::from_headers(headers.iter())?;

        let mut rows = Vec::new();
        for result in reader.records() {
            let row = result.map_err(|e| ProcessingError::load(source, e))?;
            rows.push(row);
        }
        debug!("Read {} rows from {}", rows.len(), source.display());

        let date_format =
            infer_date_format(rows.iter().filter_map(|r| r.get(columns.activity_date)));
        if let Some(format) = date_format {
            debug!("Parsing ActivityDate as '{}'", format);
        }

        let records = rows
            .iter()
            .map(|row| self.parse_record(row, &columns, date_format))
            .collect::<Result<Vec<_>>>()?;

        Ok(ActivityTable { columns, records })
    }

    fn parse_record(
        &self,
        row: &StringRecord,
        columns: &ColumnIndex,
        date_format: Option<DateFormat>,
    ) -> Result<ActivityRecord> {
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let cell = |index: usize| row.get(index).unwrap_or("");

        let date_str = cell(columns.activity_date).trim();
        let activity_date = if is_null_cell(date_str) {
            None
        } else {
            let parsed = date_format.and_then(|f| f.parse(date_str));
            Some(parsed.ok_or_else(|| ProcessingError::InvalidDate {
                row: line as usize,
                value: date_str.to_string(),
            })?)
        };

        let mut counts = [None; 7];
        for ((slot, &index), name) in counts.iter_mut().zip(&columns.counts).zip(COUNT_COLUMNS) {
            let value = cell(index);
            *slot = parse_count(value);
            if slot.is_none() && !is_null_cell(value.trim()) {
                warn!(
                    "Row {}: {} value '{}' is not a count, treating as missing",
                    line, name, value
                );
            }
        }

        Ok(ActivityRecord {
            line,
            hub_random_id: cell(columns.hub_random_id).to_string(),
            hub_activity_id: cell(columns.hub_activity_id).to_string(),
            category_name: cell(columns.category_name).to_string(),
            programme_name: cell(columns.programme_name).to_string(),
            activity_date,
            counts: ParticipationCounts::from_array(counts),
            fields: row.iter().map(str::to_string).collect(),
        })
    }
}

impl Default for ActivityReader {
    fn default() -> Self {
        Self::new()
    }
}

/// True for an empty cell or one of the missing-value markers in `NULL_TOKENS`.
pub fn is_null_cell(value: &str) -> bool {
    NULL_TOKENS.contains(&value)
}

/// Parse a participation count.
///
/// Whole non-negative numbers are counts (spreadsheet exports write `3.0`).
/// Anything else, missing-value markers included, is `None`.
pub fn parse_count(value: &str) -> Option<u32> {
    let value = value.trim();
    if is_null_cell(value) {
        return None;
    }

    if let Ok(n) = value.parse::<u32>() {
        return Some(n);
    }

    let n = value.parse::<f64>().ok()?;
    if n.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&n) {
        Some(n as u32)
    } else {
        None
    }
}
