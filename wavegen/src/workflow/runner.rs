use crate::workflow::config::WavegenConfig;
use anyhow::Context;
use log::info;
use wavecore::analysis::analyze;
use wavecore::generate::{build_table, render_table};
use wavecore::render::OutputFormat;
use wavecore::TableKind;

#[derive(Clone)]
pub struct Runner {
    config: WavegenConfig,
    summary: bool,
}

impl Runner {
    pub fn new(config: WavegenConfig) -> Self {
        Self {
            config,
            summary: false,
        }
    }

    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    /// Builds and renders one table; the caller decides where the text goes.
    pub fn execute(&self, kind: TableKind, format: OutputFormat) -> anyhow::Result<String> {
        let table_config = self.config.to_table_config();
        let table = build_table(kind, &table_config)
            .with_context(|| format!("building {} table", kind))?;

        if self.summary {
            if let Some(report) = analyze(&table) {
                info!("{} summary: {}", kind, report);
            }
        }

        render_table(&table, format).with_context(|| format!("rendering {} table", kind))
    }
}
