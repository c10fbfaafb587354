//! Terminal rendering of a report.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use survey_common::format_numeric;
use survey_model::{AggregationResult, TablePreview};

use crate::findings::KEY_FINDINGS_TITLE;
use crate::report::{Report, Section, SectionBody, WordCloudSection};

/// Words listed per word cloud in terminal output.
const WORD_CLOUD_PREVIEW: usize = 15;

/// Renders the whole report for a terminal.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Rows: {}  Columns: {}\n",
        report.rows, report.columns
    ));
    if !report.missing_columns.is_empty() {
        out.push_str(&format!(
            "Missing columns: {}\n",
            report.missing_columns.join(", ")
        ));
    }

    out.push_str(&heading("Sample Data"));
    out.push_str(&format!("{}\n", preview_table(&report.preview)));

    out.push_str(&heading("Exploratory Data Analysis"));
    for section in &report.sections {
        out.push_str(&render_section(section));
    }

    out.push_str(&heading("Open-Ended Response Analysis"));
    for cloud in &report.word_clouds {
        out.push_str(&render_word_cloud(cloud));
    }

    out.push_str(&heading("Insights Summary"));
    out.push_str(&render_findings(&report.findings));
    out
}

fn heading(title: &str) -> String {
    format!("\n{title}\n{}\n", "=".repeat(title.chars().count()))
}

fn subheading(title: &str) -> String {
    format!("\n{title}\n{}\n", "-".repeat(title.chars().count()))
}

/// Renders one analysis section: its table, or the reason it is missing.
pub fn render_section(section: &Section) -> String {
    let mut out = subheading(section.title);
    match &section.body {
        SectionBody::Ready(result) => {
            if let Some(chart) = &section.chart {
                out.push_str(&format!("Chart: {}\n", chart.kind.as_str()));
            }
            out.push_str(&render_result(result));
            if result.excluded() > 0 {
                out.push_str(&format!(
                    "({} rows excluded for missing values)\n",
                    result.excluded()
                ));
            }
        }
        SectionBody::Skipped { reason } => out.push_str(&format!("Skipped: {reason}\n")),
        SectionBody::NoData { column } => {
            out.push_str(&format!("No data available for {column}.\n"));
        }
        SectionBody::NotAvailable { reason } => out.push_str(&format!("{reason}\n")),
    }
    out
}

fn render_result(result: &AggregationResult) -> String {
    match result {
        AggregationResult::Distribution(r) => {
            let mut table = styled_table(vec![r.column, "Count"]);
            for entry in &r.counts {
                table.add_row(vec![Cell::new(&entry.label), Cell::new(entry.count)]);
            }
            align_column(&mut table, 1, CellAlignment::Right);
            format!("{table}\n")
        }
        AggregationResult::Histogram(r) => {
            let mut table = styled_table(vec!["Range", "Count"]);
            for bin in &r.bins {
                table.add_row(vec![
                    Cell::new(format!("{:.2} - {:.2}", bin.lower, bin.upper)),
                    Cell::new(bin.count),
                ]);
            }
            align_column(&mut table, 1, CellAlignment::Right);
            format!(
                "{table}\nCount: {}  Mean: {:.2}  Min: {}  Max: {}\n",
                r.observations,
                r.mean,
                format_numeric(r.min),
                format_numeric(r.max)
            )
        }
        AggregationResult::Correlation(r) => {
            format!("Correlation: {:.2} (n = {})\n", r.coefficient, r.observations)
        }
        AggregationResult::GroupedMean(r) => {
            let mut header = vec![r.group_column];
            header.extend(r.value_columns.iter().copied());
            let mut table = styled_table(header);
            for group in &r.groups {
                let mut row = vec![Cell::new(&group.group)];
                row.extend(group.cells.iter().map(|cell| optional_cell(cell.mean)));
                table.add_row(row);
            }
            format!("{table}\n")
        }
        AggregationResult::CrossTab(r) => {
            let mut header = vec![format!("{} / {}", r.row_column, r.col_column)];
            header.extend(r.col_labels.iter().cloned());
            let mut table = styled_table(header);
            for (label, counts) in r.row_labels.iter().zip(&r.counts) {
                let mut row = vec![Cell::new(label)];
                row.extend(counts.iter().map(Cell::new));
                table.add_row(row);
            }
            format!("{table}\n")
        }
        AggregationResult::Proportions(r) => {
            let mut header = vec![r.group_column];
            header.extend(r.value_columns.iter().copied());
            let mut table = styled_table(header);
            for group in &r.groups {
                let mut row = vec![Cell::new(&group.group)];
                row.extend(group.cells.iter().map(|cell| optional_cell(cell.proportion)));
                table.add_row(row);
            }
            format!("{table}\nShare of '{}' answers.\n", r.positive_label)
        }
        AggregationResult::BoxPlot(r) => {
            let mut table =
                styled_table(vec![r.group_column, "N", "Min", "Q1", "Median", "Q3", "Max"]);
            for stats in &r.groups {
                table.add_row(vec![
                    Cell::new(&stats.group),
                    Cell::new(stats.observations),
                    Cell::new(format_numeric(stats.min)),
                    Cell::new(format!("{:.2}", stats.q1)),
                    Cell::new(format!("{:.2}", stats.median)),
                    Cell::new(format!("{:.2}", stats.q3)),
                    Cell::new(format_numeric(stats.max)),
                ]);
            }
            format!("{table}\nValues: {}\n", r.value_column)
        }
        AggregationResult::PivotMean(r) => {
            let mut header = vec![format!("{} / {}", r.row_column, r.col_column)];
            header.extend(r.col_labels.iter().cloned());
            let mut table = styled_table(header);
            for (label, means) in r.row_labels.iter().zip(&r.cells) {
                let mut row = vec![Cell::new(label)];
                row.extend(means.iter().map(|mean| optional_cell(*mean)));
                table.add_row(row);
            }
            format!("{table}\nMean of {}\n", r.value_column)
        }
        AggregationResult::Scatter(r) => {
            let mut out = format!(
                "{} points of {} vs. {}\n",
                r.points.len(),
                r.x_column,
                r.y_column
            );
            if let Some(hue) = r.hue_column {
                out.push_str(&format!("Colored by {hue}\n"));
            }
            if let Some(size) = r.size_column {
                out.push_str(&format!("Sized by {size}\n"));
            }
            match r.correlation {
                Some(coefficient) => out.push_str(&format!("Correlation: {coefficient:.2}\n")),
                None => out.push_str("No correlation available\n"),
            }
            out
        }
    }
}

/// Renders the word-cloud view of one question as its heaviest words.
pub fn render_word_cloud(cloud: &WordCloudSection) -> String {
    let mut out = subheading(&format!("WordCloud - {}", cloud.title));
    let Some(model) = &cloud.model else {
        out.push_str("No text data available for this question.\n");
        return out;
    };
    if model.is_empty() {
        out.push_str("No words left after filtering.\n");
        return out;
    }
    let mut table = styled_table(vec!["Word", "Count", "Weight"]);
    for word in model.words.iter().take(WORD_CLOUD_PREVIEW) {
        table.add_row(vec![
            Cell::new(&word.word),
            Cell::new(word.count),
            Cell::new(format!("{:.2}", word.weight)),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    out.push_str(&format!(
        "{table}\n{} responses, {} distinct words\n",
        cloud.responses,
        model.len()
    ));
    out
}

/// Renders the fixed narrative findings as a bullet list.
pub fn render_findings(findings: &[&str]) -> String {
    let mut out = format!("{KEY_FINDINGS_TITLE}\n");
    for finding in findings {
        out.push_str(&format!("- {finding}\n"));
    }
    out
}

fn preview_table(preview: &TablePreview) -> Table {
    let mut table = styled_table(preview.columns.clone());
    for row in &preview.rows {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }
    table
}

fn styled_table<S: ToString>(header: Vec<S>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.into_iter().map(|label| header_cell(&label.to_string())));
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.2}")),
        None => Cell::new("n/a").fg(Color::DarkGrey),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::findings::KEY_FINDINGS;

    #[test]
    fn test_findings_cover_every_bullet() {
        let text = render_findings(KEY_FINDINGS);

        assert!(text.starts_with("Key Findings\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with("- ")).count(), 15);
    }

    #[test]
    fn test_skipped_section_names_column() {
        let section = Section {
            id: "education_income",
            title: "Education vs. Income",
            chart: None,
            body: SectionBody::Skipped {
                reason: "required column 'Q6_IncomeLevel' not found".to_string(),
            },
        };

        let text = render_section(&section);

        assert!(text.contains("Education vs. Income"));
        assert!(text.contains("Skipped: required column 'Q6_IncomeLevel' not found"));
    }
}
