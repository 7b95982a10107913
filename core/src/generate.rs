//! Top-level entry points: pick a table, build it, render it.

use crate::prelude::{GeneratorError, GeneratorResult, TableBuilder, TableConfig, TableKind};
use crate::render::{self, OutputFormat};
use crate::tables::{PeriodTable, SineTable, Table};
use crate::telemetry::log::LogManager;

fn build_logged<T: TableBuilder>(config: &TableConfig) -> GeneratorResult<T> {
    let table = T::build(config)?;
    LogManager::new(T::KIND).record(&format!("computed {} entries", table.len()));
    Ok(table)
}

/// Computes the table for `kind` without rendering it.
pub fn build_table(kind: TableKind, config: &TableConfig) -> GeneratorResult<Table> {
    Ok(match kind {
        TableKind::Sine => Table::Sine(build_logged::<SineTable>(config)?),
        TableKind::Periods => Table::Periods(build_logged::<PeriodTable>(config)?),
    })
}

/// Renders an already computed table.
pub fn render_table(table: &Table, format: OutputFormat) -> GeneratorResult<String> {
    match format {
        OutputFormat::C => Ok(render::c::render(table)),
        OutputFormat::Json => render::json::render(table)
            .map_err(|err| GeneratorError::Render(err.to_string())),
    }
}

/// Produces the C source text for `kind`.
pub fn generate(kind: TableKind, config: &TableConfig) -> GeneratorResult<String> {
    render_table(&build_table(kind, config)?, OutputFormat::C)
}

/// Like [`generate`], selecting the table by its name (`"sine"` or `"periods"`).
pub fn generate_named(name: &str, config: &TableConfig) -> GeneratorResult<String> {
    generate(name.parse()?, config)
}
