//! Result table rendering using comfy-table

use crate::models::{Indicator, ScanReport};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, ContentArrangement, Table};

/// Print the result table for one scan: one row per check, in display order
pub fn print_result_table(report: &ScanReport) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    // Constrain table width to terminal width minus indent
    if let Ok((cols, _)) = crossterm::terminal::size() {
        table.set_width(cols.saturating_sub(4));
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = ["Target", "Check", "Outcome", "Indicator"]
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for row in &report.rows {
        table.add_row(vec![
            Cell::new(&row.target),
            Cell::new(row.kind.label()),
            Cell::new(&row.outcome),
            indicator_cell(row.indicator),
        ]);
    }

    // Indent the table
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

fn indicator_cell(indicator: Indicator) -> Cell {
    let cell = Cell::new(format!("{} {}", indicator.icon(), indicator.label()));
    match indicator {
        Indicator::Safe => cell.fg(Color::Green),
        Indicator::Warning => cell.fg(Color::Yellow),
        Indicator::Danger => cell.fg(Color::Red),
        Indicator::Unknown => cell.fg(Color::Grey),
    }
}
