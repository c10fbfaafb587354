//! Shared utilities for the survey EDA crates.

mod values;

pub use values::{
    NumericCell, any_to_number, any_to_text, display_value, format_numeric, parse_number,
};
