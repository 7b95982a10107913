//! Equal-tempered pitch arithmetic for the note-period table.
//!
//! Only the tick-clock formula is implemented: one period is the number of
//! timer ticks between successive sine samples, so the sample count divides
//! the tick rate. The older frame-clock variant (100 kHz frames, 64 steps per
//! octave, no sample divisor) is superseded by this one.

use crate::prelude::TableConfig;

/// Frequency of the note at `index`, counted in `octave_index_range` steps
/// per octave above `start_note_frequency_hz`.
pub fn index_to_frequency_hz(index: usize, config: &TableConfig) -> f64 {
    config.start_note_frequency_hz * 2f64.powf(index as f64 / config.octave_index_range)
}

/// Unrounded timer ticks per sine sample for a note at `frequency_hz`.
pub fn period_ticks(frequency_hz: f64, config: &TableConfig) -> f64 {
    config.ticks_per_second / (frequency_hz * config.n_samples as f64)
}

/// Rounds a tick count to the nearest integer, halfway cases away from zero.
pub fn round_ticks(ticks: f64) -> f64 {
    ticks.round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_index_is_start_frequency() {
        let config = TableConfig::default();
        assert!((index_to_frequency_hz(0, &config) - 27.5).abs() < 1e-9);
    }

    #[test]
    fn one_octave_doubles_frequency() {
        let config = TableConfig::default();
        assert!((index_to_frequency_hz(84, &config) - 55.0).abs() < 1e-9);
        assert!((index_to_frequency_hz(168, &config) - 110.0).abs() < 1e-9);
    }

    #[test]
    fn period_of_a0_on_16mhz_clock() {
        let config = TableConfig::default();
        let ticks = period_ticks(27.5, &config);
        assert!((ticks - 16_000_000.0 / 1760.0).abs() < 1e-9);
        assert_eq!(round_ticks(ticks), 9091.0);
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(round_ticks(2.5), 3.0);
        assert_eq!(round_ticks(3.5), 4.0);
        assert_eq!(round_ticks(2.4999), 2.0);
    }
}
