use crate::math::pitch::{index_to_frequency_hz, period_ticks, round_ticks};
use crate::prelude::{GeneratorError, GeneratorResult, TableBuilder, TableConfig, TableKind};
use crate::telemetry::log::LogManager;
use serde::Serialize;

/// Timer compare value for one note, with the frequency it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodEntry {
    pub ticks: u16,
    pub frequency_hz: f64,
}

/// Ticks per sine sample for each note index, lowest note first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodTable {
    pub entries: Vec<PeriodEntry>,
}

impl PeriodTable {
    pub fn ticks(&self) -> impl Iterator<Item = u16> + '_ {
        self.entries.iter().map(|entry| entry.ticks)
    }
}

impl TableBuilder for PeriodTable {
    const KIND: TableKind = TableKind::Periods;

    fn build(config: &TableConfig) -> GeneratorResult<Self> {
        config.validate()?;
        let logger = LogManager::new(Self::KIND);

        let entries = (0..config.n_periods)
            .map(|index| {
                let frequency_hz = index_to_frequency_hz(index, config);
                let ticks = round_ticks(period_ticks(frequency_hz, config));
                // A zero compare value would stall the timer.
                if !(1.0..=u16::MAX as f64).contains(&ticks) {
                    return Err(GeneratorError::PeriodOutOfRange { index, ticks });
                }
                Ok(PeriodEntry {
                    ticks: ticks as u16,
                    frequency_hz,
                })
            })
            .collect::<GeneratorResult<Vec<_>>>()?;

        if let (Some(first), Some(last)) = (entries.first(), entries.last()) {
            logger.detail(&format!(
                "{} periods, {:.6} Hz -> {:.6} Hz, {} -> {} ticks",
                entries.len(),
                first.frequency_hz,
                last.frequency_hz,
                first.ticks,
                last.ticks
            ));
        }
        Ok(Self { entries })
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PeriodTable {
        PeriodTable::build(&TableConfig::default()).unwrap()
    }

    #[test]
    fn periods_cover_every_note_index() {
        assert_eq!(table().len(), 512);
    }

    #[test]
    fn first_entry_is_a0() {
        let first = table().entries[0];
        assert!((first.frequency_hz - 27.5).abs() < 1e-9);
        assert_eq!(first.ticks, 9091);
    }

    #[test]
    fn every_entry_matches_formula() {
        for (i, entry) in table().entries.iter().enumerate() {
            let frequency = 27.5 * 2f64.powf(i as f64 / 84.0);
            let expected = (16_000_000.0 / (frequency * 64.0)).round() as u16;
            assert_eq!(entry.ticks, expected, "index {}", i);
        }
    }

    #[test]
    fn periods_strictly_decrease() {
        let ticks: Vec<u16> = table().ticks().collect();
        for pair in ticks.windows(2) {
            assert!(pair[0] > pair[1], "{} !> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn fast_clock_overflow_is_reported() {
        let config = TableConfig {
            ticks_per_second: 1.0e9,
            ..Default::default()
        };
        assert!(matches!(
            PeriodTable::build(&config),
            Err(GeneratorError::PeriodOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn zero_tick_periods_are_rejected() {
        let long_table = TableConfig {
            n_periods: 2000,
            ..Default::default()
        };
        assert!(matches!(
            PeriodTable::build(&long_table),
            Err(GeneratorError::PeriodOutOfRange { index, ticks }) if index < 2000 && ticks < 1.0
        ));

        let steep_scale = TableConfig {
            octave_index_range: 1.0,
            n_periods: 40,
            ..Default::default()
        };
        assert!(matches!(
            PeriodTable::build(&steep_scale),
            Err(GeneratorError::PeriodOutOfRange { ticks, .. }) if ticks < 1.0
        ));
    }
}
