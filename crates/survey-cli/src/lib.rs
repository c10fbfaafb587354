//! Library side of the survey EDA command-line tool.

pub mod logging;
pub mod pipeline;
pub mod types;
