//! # Weight Gauge Component
//!
//! Semicircular gauge mapping a 0..=1 fraction to an angular sweep, with an
//! animated striped background track. Split into pure geometry
//! (`calculations`) and painting (`renderer`).

pub mod calculations;
pub mod renderer;

pub use calculations::GaugeGeometry;
pub use renderer::WeightGauge;
