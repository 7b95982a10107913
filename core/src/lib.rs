//! Lookup-table generation for the AVR wavetable synthesizer.
//!
//! The firmware plays notes by stepping through a small sine table at a rate
//! set by a 16-bit timer compare value. Both tables are computed here on the
//! host and emitted as C source so the firmware never touches floating point.

pub mod analysis;
pub mod generate;
pub mod math;
pub mod prelude;
pub mod render;
pub mod tables;
pub mod telemetry;

pub use generate::{generate, generate_named};
pub use prelude::{GeneratorError, GeneratorResult, TableConfig, TableKind};
