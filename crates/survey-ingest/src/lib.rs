//! Survey data ingestion.
//!
//! Reads an uploaded survey file (delimited text or spreadsheet) into a
//! Polars frame and validates it once into a
//! [`SurveyTable`](survey_model::SurveyTable).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use survey_ingest::read_survey;
//!
//! let table = read_survey(Path::new("responses.xlsx"))?;
//! println!("{} rows", table.height());
//! ```

mod csv;
mod error;
mod format;
mod markers;
mod reader;
mod spreadsheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === Format Detection ===
pub use format::SourceFormat;

// === Missing Values ===
pub use markers::{NULL_MARKERS, is_null_marker};

// === Reading ===
pub use csv::read_csv_frame;
pub use reader::{
    MAX_SOURCE_FILE_SIZE, check_file_size, check_file_size_with_limit, read_survey,
    read_survey_bytes, validate_frame_shape,
};
pub use spreadsheet::read_spreadsheet_frame;
