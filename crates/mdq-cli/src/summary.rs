use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mdq_report::ErrorFrequency;

use crate::types::RunResult;

/// Prints the key metrics and, when anything was rejected, the top error table.
pub fn print_summary(result: &RunResult) {
    println!("{}", kpi_block(result));
    if let Some(table) = error_table(&result.top_errors) {
        println!();
        println!("{table}");
    }
}

/// The key-metric block, starting with an empty line.
pub fn kpi_block(result: &RunResult) -> String {
    let mut lines = vec![
        String::new(),
        "KPI:".to_string(),
        format!("- gültig: {}", result.valid_count),
        format!("- ungültig: {}", result.invalid_count),
        format!("- Tabelle: {} in {}", result.table, result.database),
        format!("- Report: {}", result.report_path.display()),
    ];
    if result.dry_run {
        lines.push("- Probelauf: keine Dateien geschrieben".to_string());
    }
    lines.join("\n")
}

/// Renders the ranked error rules, `None` when there are none.
pub fn error_table(top_errors: &[ErrorFrequency]) -> Option<Table> {
    if top_errors.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Regel"), header_cell("Anzahl")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for entry in top_errors {
        table.add_row(vec![
            Cell::new(entry.rule),
            Cell::new(entry.count)
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
        ]);
    }
    Some(table)
}

fn apply_table_style(table: &mut Table) {
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
