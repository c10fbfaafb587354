//! Report pipeline: ingest, analyze, render, export.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use survey_ingest::read_survey;
use survey_report::{build_report, export_workbook, write_json_report};

use crate::types::{ReportOutcome, ReportRequest};

/// `<input dir>/output`, or `./output` for a bare file name.
pub fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("output"), |parent| parent.join("output"))
}

/// Runs every stage for one input file.
///
/// Metrics that cannot be computed are recorded in the report; only
/// ingestion and file output fail the run.
pub fn run_report(request: &ReportRequest) -> Result<ReportOutcome> {
    let span = info_span!("report", input = %request.input.display());
    let _guard = span.enter();
    let started = Instant::now();

    let table = read_survey(&request.input)
        .with_context(|| format!("load {}", request.input.display()))?;
    let report = build_report(&table, &request.options);

    let json = match &request.json {
        Some(path) => {
            write_json_report(&report, path)
                .with_context(|| format!("write {}", path.display()))?;
            Some(path.clone())
        }
        None => None,
    };

    let export = if request.export {
        let output_dir = request
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&request.input));
        let artifact = export_workbook(&table, &output_dir)
            .with_context(|| format!("export to {}", output_dir.display()))?;
        Some(artifact)
    } else {
        None
    };

    info!(
        rows = report.rows,
        sections = report.sections.len(),
        unavailable = report.unavailable_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "pipeline finished"
    );
    Ok(ReportOutcome {
        input: request.input.clone(),
        report,
        export,
        json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_dir_next_to_input() {
        assert_eq!(
            default_output_dir(Path::new("/data/survey.csv")),
            PathBuf::from("/data/output")
        );
    }

    #[test]
    fn test_default_output_dir_bare_file_name() {
        assert_eq!(
            default_output_dir(Path::new("survey.csv")),
            PathBuf::from("output")
        );
    }
}
