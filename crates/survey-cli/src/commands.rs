use anyhow::Result;
use comfy_table::Table;

use survey_cli::pipeline::run_report as run_pipeline;
use survey_cli::types::{ReportOutcome, ReportRequest};
use survey_model::{AnalysisOptions, SurveyColumn};

use crate::cli::ReportArgs;
use crate::summary::apply_table_style;

pub fn run_schema() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Type", "Required", "Label"]);
    apply_table_style(&mut table);
    for column in SurveyColumn::ALL {
        table.add_row(vec![
            column.name().to_string(),
            column.kind().to_string(),
            if column.is_optional() { "no" } else { "yes" }.to_string(),
            column.label().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_report(args: &ReportArgs) -> Result<ReportOutcome> {
    run_pipeline(&report_request(args))
}

fn report_request(args: &ReportArgs) -> ReportRequest {
    let options = AnalysisOptions::new()
        .with_histogram_bins(args.bins)
        .with_positive_label(args.positive_label.clone())
        .with_max_words(args.max_words)
        .with_preview_rows(args.preview_rows);
    ReportRequest {
        input: args.file.clone(),
        output_dir: args.output_dir.clone(),
        options,
        json: args.json.clone(),
        export: !args.no_export,
    }
}
