use std::path::PathBuf;

use survey_model::AnalysisOptions;
use survey_report::{ExportArtifact, Report};

/// One run of the report pipeline.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub input: PathBuf,
    /// Defaults to `<input dir>/output`.
    pub output_dir: Option<PathBuf>,
    pub options: AnalysisOptions,
    pub json: Option<PathBuf>,
    pub export: bool,
}

impl ReportRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
            options: AnalysisOptions::default(),
            json: None,
            export: true,
        }
    }
}

#[derive(Debug)]
pub struct ReportOutcome {
    pub input: PathBuf,
    pub report: Report,
    pub export: Option<ExportArtifact>,
    pub json: Option<PathBuf>,
}
