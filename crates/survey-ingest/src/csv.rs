//! Delimited-text reading via Polars.

use std::io::Cursor;

use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, NullValues, SerReader};

use crate::error::{IngestError, Result};
use crate::markers::NULL_MARKERS;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Rejects UTF-16 input, which the CSV reader cannot decode.
pub(crate) fn validate_encoding(bytes: &[u8]) -> Result<()> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            encoding: "UTF-16 BE",
        });
    }
    Ok(())
}

/// Parses delimited text with a single header row into a frame.
///
/// Column types are inferred from the whole file so a stray value late in a
/// numeric column surfaces as a schema error instead of a parse failure.
/// Empty fields and [`NULL_MARKERS`] read as null.
pub fn read_csv_frame(mut bytes: Vec<u8>) -> Result<DataFrame> {
    validate_encoding(&bytes)?;
    if bytes.starts_with(&UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyInput);
    }

    let markers = NULL_MARKERS.iter().map(|marker| (*marker).into()).collect();
    let parse_options = CsvParseOptions::default()
        .with_null_values(Some(NullValues::AllColumns(markers)));
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(parse_options)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            message: e.to_string(),
        })
}
