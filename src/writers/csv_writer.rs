use crate::error::{ProcessingError, Result};
use crate::models::{CleanedActivityRecord, ColumnIndex, DerivedRecord};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the cleaned tables as comma-separated files with a header row and
/// no index column.
pub struct CsvTableWriter;

impl CsvTableWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write referral rows: every source column followed by the derived ones.
    pub fn write_referrals(
        &self,
        columns: &ColumnIndex,
        rows: &[&DerivedRecord],
        path: &Path,
    ) -> Result<()> {
        let file = File::create(path).map_err(|e| ProcessingError::write(path, e))?;
        self.write_referrals_to(BufWriter::new(file), columns, rows)
            .map_err(|e| ProcessingError::write(path, e))
    }

    pub fn write_referrals_to<W: Write>(
        &self,
        out: W,
        columns: &ColumnIndex,
        rows: &[&DerivedRecord],
    ) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(out);

        writer.write_record(columns.derived_headers())?;
        for row in rows {
            writer.write_record(row.output_fields(columns))?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Write the projected activity records.
    pub fn write_activities(&self, records: &[CleanedActivityRecord], path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| ProcessingError::write(path, e))?;
        self.write_activities_to(BufWriter::new(file), records)
            .map_err(|e| ProcessingError::write(path, e))
    }

    pub fn write_activities_to<W: Write>(
        &self,
        out: W,
        records: &[CleanedActivityRecord],
    ) -> Result<()> {
        // Header goes out explicitly so an empty table still gets one.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(out);

        writer.write_record(CleanedActivityRecord::COLUMNS)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(())
    }
}

impl Default for CsvTableWriter {
    fn default() -> Self {
        Self::new()
    }
}
