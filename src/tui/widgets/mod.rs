pub mod chart;
pub mod coffees;
pub mod header;
pub mod metrics;
pub mod moments;
pub mod statusbar;
pub mod verdict;
