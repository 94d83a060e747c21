//! Terminal rendering of run results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use invrec_model::OutputRole;

use crate::types::{OutputSummary, RunResult};

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input_folder.display());
    if result.dry_run {
        println!("Output: {} (dry run, nothing written)", result.output_dir.display());
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    if let Some(path) = &result.summary_json {
        println!("Run summary: {}", path.display());
    }
    println!("{}", summary_table(result));
    if !result.skipped_rows.is_empty() {
        println!("Skipped rows: {}", result.skipped_rows.len());
        println!("{}", skipped_table(result));
    }
}

fn summary_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Description"),
        header_cell("Rows"),
        header_cell("Written"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for output in &result.outputs {
        table.add_row(vec![
            file_cell(output),
            Cell::new(output.role.description()),
            count_cell(output.role, output.rows),
            written_cell(output.written),
        ]);
    }
    table
}

fn skipped_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Row"),
        header_cell("SKU"),
        header_cell("Sizes"),
        header_cell("Quantities"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for skipped in &result.skipped_rows {
        table.add_row(vec![
            Cell::new(skipped.role),
            Cell::new(skipped.row),
            Cell::new(&skipped.sku),
            dim_cell(&skipped.sizes),
            dim_cell(&skipped.quantities),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
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

fn file_cell(output: &OutputSummary) -> Cell {
    Cell::new(&output.file)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

/// Non-empty mismatch and zero-inventory reports need attention.
fn count_cell(role: OutputRole, rows: usize) -> Cell {
    let flagged = matches!(
        role,
        OutputRole::ZeroInventory | OutputRole::QtyMismatches | OutputRole::CostMismatches
    );
    match rows {
        0 => dim_cell(0),
        count if flagged => Cell::new(count).fg(Color::Yellow),
        count => Cell::new(count),
    }
}

fn written_cell(written: bool) -> Cell {
    if written {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
