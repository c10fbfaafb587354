//! Survey report generation.
//!
//! Turns aggregation results into report sections with chart
//! specifications, weights open-ended answers into word-frequency models,
//! renders the report for a terminal or as JSON, and exports the ingested
//! table as an xlsx workbook.

mod chart;
mod error;
mod export;
mod findings;
mod render;
mod report;
mod wordfreq;

pub use chart::{ChartKind, ChartSpec};
pub use error::{ExportError, Result};
pub use export::{
    EXPORT_FILE_NAME, EXPORT_MIME_TYPE, ExportArtifact, ensure_parent_dir, export_workbook,
    workbook_bytes, write_json_report,
};
pub use findings::{KEY_FINDINGS, KEY_FINDINGS_TITLE};
pub use render::{render_findings, render_report, render_section, render_word_cloud};
pub use report::{
    Report, Section, SectionBody, WordCloudSection, build_report, build_sections,
    build_word_clouds,
};
pub use wordfreq::{STOPWORDS, tokenize, word_frequencies};
