use crate::prelude::{GeneratorResult, TableBuilder, TableConfig, TableKind};
use crate::telemetry::log::LogManager;
use serde::Serialize;
use std::f64::consts::PI;

/// One full sine cycle offset into `[0, max_sample]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SineTable {
    pub max_sample: u8,
    pub samples: Vec<u8>,
}

impl SineTable {
    /// Exact sample value before integer conversion.
    pub fn sample_value(index: usize, config: &TableConfig) -> f64 {
        let phase = (PI * 2.0 * index as f64) / config.n_samples as f64;
        (config.max_sample as f64 * (phase.sin() + 1.0)) / 2.0
    }

    /// Sample at `index` as stored. Values are truncated, so the zero
    /// crossing of a 31-step table lands on 15 rather than 16.
    pub fn sample(index: usize, config: &TableConfig) -> u8 {
        Self::sample_value(index, config).trunc() as u8
    }
}

impl TableBuilder for SineTable {
    const KIND: TableKind = TableKind::Sine;

    fn build(config: &TableConfig) -> GeneratorResult<Self> {
        config.validate()?;
        let logger = LogManager::new(Self::KIND);
        let samples: Vec<u8> = (0..config.n_samples)
            .map(|i| Self::sample(i, config))
            .collect();
        logger.detail(&format!(
            "{} samples, peak {}",
            samples.len(),
            config.max_sample
        ));
        Ok(Self {
            max_sample: config.max_sample,
            samples,
        })
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}
