//! Table and JSON rendering helpers shared by the listing commands.

use comfy_table::{Cell, ContentArrangement, Table, presets};
use miette::IntoDiagnostic;
use serde::Serialize;

/// Prints a UTF-8 table with the given header row.
pub fn print_table(headers: &[&str], rows: impl IntoIterator<Item = Vec<String>>) {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(Cell::new).collect::<Vec<_>>());
    for row in rows {
        table.add_row(row);
    }
    println!("{table}");
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> miette::Result<()> {
    let rendered = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{rendered}");
    Ok(())
}
