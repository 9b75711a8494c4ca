//! Output rendering for mapped records.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use lightmap_model::{Record, Value};

pub fn render_json(record: &Record) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

pub fn render_table(record: &Record) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Property", "Value"]);
    apply_table_style(&mut table);
    for (name, value) in record.iter() {
        table.add_row(vec![name.to_string(), display_value(value)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
