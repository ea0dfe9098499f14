pub mod activity_reader;
pub mod date_format;

pub use activity_reader::{is_null_cell, parse_count, ActivityReader};
pub use date_format::{infer_date_format, DateFormat};
