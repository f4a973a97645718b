//! # Home Screen State
//!
//! The home screen has no interactive state of its own; it owns the weight
//! gauge component so the gauge's stripe animation starts when the screen is
//! created and stops when the app shuts down (the home screen is the
//! navigation root and stays mounted for the app's lifetime).

use crate::ui::components::gauge::WeightGauge;

pub struct HomeState {
    /// Weight gauge with its owned stripe animation
    pub gauge: WeightGauge,
}

impl HomeState {
    pub fn new() -> Self {
        Self {
            gauge: WeightGauge::new(),
        }
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}
