pub mod narrative;
pub mod scenario;
pub mod slider;
pub mod two_shot;

pub use scenario::{Scenario, Snapshot};
