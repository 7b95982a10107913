pub mod fft;
pub mod pitch;
pub mod stats;

pub use fft::FftHelper;
pub use stats::StatsHelper;
