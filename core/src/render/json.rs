use crate::tables::Table;
use serde::Serialize;
use serde_json::Value;

/// JSON view of a table: the C length constant's name and value alongside
/// the data, so host tooling can cross-check generated headers.
#[derive(Serialize)]
struct JsonTable<'a> {
    length_constant: &'static str,
    length: usize,
    #[serde(flatten)]
    table: &'a Table,
}

pub fn to_value(table: &Table) -> serde_json::Result<Value> {
    let (length_constant, length) = match table {
        Table::Sine(sine) => ("N_SAMPLES", sine.samples.len()),
        Table::Periods(periods) => ("N_PERIODS", periods.entries.len()),
    };
    serde_json::to_value(JsonTable {
        length_constant,
        length,
        table,
    })
}

pub fn render(table: &Table) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(&to_value(table)?)?;
    text.push('\n');
    Ok(text)
}
