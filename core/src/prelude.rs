use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Constants shared by every table builder.
///
/// The defaults are the values the firmware is built against: a 64-entry
/// sine table with 5-bit samples, and 512 note periods spanning roughly six
/// octaves upward from A0 at 84 steps per octave on a 16 MHz timer clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub n_samples: usize,
    pub max_sample: u8,
    pub n_periods: usize,
    pub start_note_frequency_hz: f64,
    pub octave_index_range: f64,
    pub ticks_per_second: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            n_samples: 64,
            max_sample: 31,
            n_periods: 512,
            start_note_frequency_hz: 27.5,
            octave_index_range: 84.0,
            ticks_per_second: 16_000_000.0,
        }
    }
}

/// Largest table the firmware can index with a 16-bit counter.
pub const MAX_TABLE_LEN: usize = u16::MAX as usize + 1;

impl TableConfig {
    /// Rejects constants that would make a formula degenerate.
    pub fn validate(&self) -> GeneratorResult<()> {
        let lengths = [("n_samples", self.n_samples), ("n_periods", self.n_periods)];
        for (name, value) in lengths {
            if value == 0 || value > MAX_TABLE_LEN {
                return Err(GeneratorError::InvalidConfig(format!(
                    "{} must be between 1 and {}, got {}",
                    name, MAX_TABLE_LEN, value
                )));
            }
        }
        let positive = [
            ("start_note_frequency_hz", self.start_note_frequency_hz),
            ("octave_index_range", self.octave_index_range),
            ("ticks_per_second", self.ticks_per_second),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(GeneratorError::InvalidConfig(format!(
                    "{} must be a positive finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Which table to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Sine,
    Periods,
}

impl TableKind {
    pub const ALL: [TableKind; 2] = [TableKind::Sine, TableKind::Periods];

    pub fn name(self) -> &'static str {
        match self {
            TableKind::Sine => "sine",
            TableKind::Periods => "periods",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GeneratorError::InvalidSelection(s.to_string()))
    }
}

/// Common error type for table generation.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GeneratorError {
    #[error("invalid selection: {0:?} (expected one of: sine, periods)")]
    InvalidSelection(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("period at index {index} is {ticks} ticks, outside the 16-bit timer range 1..=65535")]
    PeriodOutOfRange { index: usize, ticks: f64 },
    #[error("render failure: {0}")]
    Render(String),
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// A table builder: checks the constants it depends on, then computes.
pub trait TableBuilder: Sized {
    const KIND: TableKind;

    fn build(config: &TableConfig) -> GeneratorResult<Self>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
