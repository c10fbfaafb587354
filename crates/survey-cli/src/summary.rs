use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use survey_cli::types::ReportOutcome;

pub fn print_summary(outcome: &ReportOutcome) {
    println!("Survey: {}", outcome.input.display());
    print!("{}", survey_report::render_report(&outcome.report));

    let mut table = Table::new();
    table.set_header(vec![header_cell("Output"), header_cell("Location")]);
    apply_table_style(&mut table);
    match &outcome.export {
        Some(artifact) => {
            table.add_row(vec![
                Cell::new(artifact.file_name),
                Cell::new(artifact.path.display()),
            ]);
        }
        None => {
            table.add_row(vec![Cell::new("Export workbook"), dim_cell("skipped")]);
        }
    }
    if let Some(path) = &outcome.json {
        table.add_row(vec![Cell::new("JSON report"), Cell::new(path.display())]);
    }
    println!();
    println!("{table}");

    let unavailable = outcome.report.unavailable_count();
    if unavailable > 0 {
        eprintln!(
            "{unavailable} of {} sections could not be computed",
            outcome.report.sections.len()
        );
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
