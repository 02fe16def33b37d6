//! Human-readable rendering of a table.

use crate::table::Table;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table as TextTable};

/// Render a table as text: one header row of column names, then one row per
/// record. Display the result with `{}`.
pub fn render_table(table: &Table) -> TextTable {
    let mut out = TextTable::new();
    out.load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(table.column_names().collect::<Vec<_>>());

    for row in 0..table.num_rows() {
        out.add_row(
            table
                .columns()
                .iter()
                .map(|c| c.values.format_value(row).unwrap_or_default())
                .collect::<Vec<_>>(),
        );
    }
    out
}
