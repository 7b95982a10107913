use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wavecore::TableConfig;

/// Constant overrides read from YAML. Missing keys keep the firmware values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WavegenConfig {
    pub n_samples: usize,
    pub max_sample: u8,
    pub n_periods: usize,
    pub start_note_frequency_hz: f64,
    pub octave_index_range: f64,
    pub ticks_per_second: f64,
}

impl Default for WavegenConfig {
    fn default() -> Self {
        Self::from_table_config(&TableConfig::default())
    }
}

impl WavegenConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading table config {}", path_ref.display()))?;
        let config: WavegenConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing table config {}", path_ref.display()))?;
        config
            .to_table_config()
            .validate()
            .with_context(|| format!("validating table config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_table_config(config: &TableConfig) -> Self {
        Self {
            n_samples: config.n_samples,
            max_sample: config.max_sample,
            n_periods: config.n_periods,
            start_note_frequency_hz: config.start_note_frequency_hz,
            octave_index_range: config.octave_index_range,
            ticks_per_second: config.ticks_per_second,
        }
    }

    pub fn to_table_config(&self) -> TableConfig {
        TableConfig {
            n_samples: self.n_samples,
            max_sample: self.max_sample,
            n_periods: self.n_periods,
            start_note_frequency_hz: self.start_note_frequency_hz,
            octave_index_range: self.octave_index_range,
            ticks_per_second: self.ticks_per_second,
        }
    }
}
