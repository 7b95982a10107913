pub mod periods;
pub mod sine;

pub use periods::{PeriodEntry, PeriodTable};
pub use sine::SineTable;

use serde::Serialize;

/// A computed table of either kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Table {
    Sine(SineTable),
    Periods(PeriodTable),
}
