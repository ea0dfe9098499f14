use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to load {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid ActivityDate '{value}' in row {row}")]
    InvalidDate { row: usize, value: String },

    #[error("Failed to write {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },
}

impl ProcessingError {
    pub fn load(path: &Path, err: impl std::fmt::Display) -> Self {
        ProcessingError::Load {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn write(path: &Path, err: impl std::fmt::Display) -> Self {
        ProcessingError::Write {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// True for every failure that happens while reading the source table.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            ProcessingError::Load { .. }
                | ProcessingError::MissingColumn(_)
                | ProcessingError::InvalidDate { .. }
        )
    }

    pub fn is_write_error(&self) -> bool {
        matches!(self, ProcessingError::Write { .. })
    }
}
