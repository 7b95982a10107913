//! Text renderers for computed tables.

pub mod c;
pub mod json;

use serde::{Deserialize, Serialize};

/// Output syntax for a rendered table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Designated-initializer C array, ready to `#include`.
    #[default]
    C,
    Json,
}
