//! Sanity figures for a computed table, reported by `wavegen --summary`.

use crate::math::{FftHelper, StatsHelper};
use crate::tables::Table;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct TableReport {
    pub entries: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub rms: f64,
    /// Sine only: amplitude of the fundamental and the strongest harmonic.
    pub spectrum: Option<SpectrumReport>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumReport {
    pub dc: f32,
    pub fundamental: f32,
    pub worst_harmonic: f32,
}

impl SpectrumReport {
    fn from_samples(samples: &[f32]) -> Self {
        let mags = FftHelper::new(samples.len()).magnitudes(samples);
        let dc = mags.first().copied().unwrap_or(0.0);
        let fundamental = mags.get(1).copied().unwrap_or(0.0);
        let worst_harmonic = mags.iter().skip(2).copied().fold(0.0, f32::max);
        Self {
            dc,
            fundamental,
            worst_harmonic,
        }
    }
}

pub fn analyze(table: &Table) -> Option<TableReport> {
    let values: Vec<f64> = match table {
        Table::Sine(sine) => sine.samples.iter().map(|&v| v as f64).collect(),
        Table::Periods(periods) => periods.ticks().map(|v| v as f64).collect(),
    };
    let summary = StatsHelper::summarize(&values)?;
    let spectrum = match table {
        Table::Sine(sine) => {
            let samples: Vec<f32> = sine.samples.iter().map(|&v| v as f32).collect();
            Some(SpectrumReport::from_samples(&samples))
        }
        Table::Periods(_) => None,
    };
    Some(TableReport {
        entries: values.len(),
        min: summary.min,
        max: summary.max,
        mean: summary.mean,
        rms: StatsHelper::rms(&values),
        spectrum,
    })
}

impl fmt::Display for TableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries, min {}, max {}, mean {:.3}, rms {:.3}",
            self.entries, self.min, self.max, self.mean, self.rms
        )?;
        if let Some(spectrum) = self.spectrum {
            write!(
                f,
                ", dc {:.3}, fundamental {:.3}, worst harmonic {:.3}",
                spectrum.dc, spectrum.fundamental, spectrum.worst_harmonic
            )?;
        }
        Ok(())
    }
}
