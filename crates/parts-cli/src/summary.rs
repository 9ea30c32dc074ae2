use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use parts_cli::types::ConversionSummary;

pub fn print_summary(summary: &ConversionSummary) {
    println!("Input: {}", summary.input.display());
    match &summary.output_path {
        Some(path) => println!("Output: {}", path.display()),
        None if summary.dry_run => println!("Output: (dry run, nothing written)"),
        None => {}
    }
    if let Some(path) = &summary.canonical_path {
        println!("Canonical table: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows processed"), Cell::new(summary.rows_processed)]);
    table.add_row(vec![Cell::new("Rows output"), Cell::new(summary.rows_output)]);
    table.add_row(vec![
        Cell::new("Blank rows dropped"),
        count_cell(summary.blank_rows_dropped, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Fitment columns"),
        Cell::new(if summary.has_fitment { "yes" } else { "no" }),
    ]);
    println!("{table}");

    let mut columns = Table::new();
    columns.set_header(vec![header_cell("Mapped fields"), header_cell("Unmapped columns")]);
    apply_table_style(&mut columns);
    let height = summary
        .mapped_fields
        .len()
        .max(summary.unmapped_columns.len());
    for index in 0..height {
        let mapped = summary
            .mapped_fields
            .get(index)
            .map_or_else(|| Cell::new(""), |field| Cell::new(field).fg(Color::Green));
        let unmapped = summary
            .unmapped_columns
            .get(index)
            .map_or_else(|| Cell::new(""), dim_cell);
        columns.add_row(vec![mapped, unmapped]);
    }
    if height > 0 {
        println!("{columns}");
    }
}

/// Prints the summary as pretty JSON on stdout.
pub fn print_json(summary: &ConversionSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("serialize summary")?;
    println!("{json}");
    Ok(())
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
