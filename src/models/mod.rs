pub mod coffee;
pub mod point;
pub mod preset;
pub mod stats;
pub mod verdict;

pub use coffee::{CoffeeCount, OutOfRangePolicy, ValidationError};
pub use point::{clock, EnergyPoint, HourFormat};
pub use preset::Preset;
pub use stats::CurveStats;
pub use verdict::{Severity, Verdict};
