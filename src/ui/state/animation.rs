//! # Animation Phase Driver
//!
//! This module provides the sawtooth phase value that drives the decorative
//! stripe animations on the weight gauge and the score chart bars.
//!
//! ## Lifecycle:
//! Each animated component owns exactly one `SawtoothPhase`. The phase starts
//! when the component is constructed (screen mount) and stops when the
//! component is dropped (screen unmount) - there is no process-wide timer and
//! no listener to detach, ownership is the cancellation mechanism. Nothing
//! outside the owning component ever reads the phase.

use std::time::{Duration, Instant};

/// A scalar cycling linearly from 0 to `bound` over `period`, then wrapping
/// back to 0 and repeating indefinitely. Sawtooth, not ping-pong.
#[derive(Debug, Clone)]
pub struct SawtoothPhase {
    started_at: Instant,
    period: Duration,
    bound: f32,
}

impl SawtoothPhase {
    /// Start a new phase at 0, anchored to the current instant.
    pub fn new(period: Duration, bound: f32) -> Self {
        Self {
            started_at: Instant::now(),
            period,
            bound,
        }
    }

    /// Current phase value for the given wall-clock instant.
    pub fn value(&self, now: Instant) -> f32 {
        self.value_at(now.saturating_duration_since(self.started_at))
    }

    /// Phase value for an elapsed time since the phase started. Pure, so the
    /// wrap behavior is testable without sleeping.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        let period_us = self.period.as_micros();
        if period_us == 0 {
            return 0.0;
        }
        let in_cycle = elapsed.as_micros() % period_us;
        self.bound * in_cycle as f32 / period_us as f32
    }

    /// Upper bound of the cycle range (exclusive).
    #[allow(dead_code)]
    pub fn bound(&self) -> f32 {
        self.bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase() -> SawtoothPhase {
        SawtoothPhase::new(Duration::from_millis(1000), 24.0)
    }

    #[test]
    fn phase_starts_at_zero() {
        assert_eq!(phase().value_at(Duration::ZERO), 0.0);
    }

    #[test]
    fn phase_is_linear_within_a_cycle() {
        let p = phase();
        assert_eq!(p.value_at(Duration::from_millis(250)), 6.0);
        assert_eq!(p.value_at(Duration::from_millis(500)), 12.0);
        assert_eq!(p.value_at(Duration::from_millis(750)), 18.0);
    }

    #[test]
    fn phase_is_monotonic_within_a_cycle_and_below_bound() {
        let p = phase();
        let mut last = -1.0_f32;
        for ms in 0..1000 {
            let v = p.value_at(Duration::from_millis(ms));
            assert!(v > last, "not monotone at {} ms", ms);
            assert!(v < p.bound(), "reached bound at {} ms", ms);
            last = v;
        }
    }

    #[test]
    fn phase_wraps_to_zero_exactly_at_the_period() {
        let p = phase();
        assert_eq!(p.value_at(Duration::from_millis(1000)), 0.0);
        assert_eq!(p.value_at(Duration::from_millis(2000)), 0.0);
    }

    #[test]
    fn phase_sawtooths_rather_than_ping_pongs() {
        let p = phase();
        // Just after a wrap the value is small again, not descending from the bound.
        let after_wrap = p.value_at(Duration::from_millis(1010));
        let before_wrap = p.value_at(Duration::from_millis(990));
        assert!(after_wrap < 1.0);
        assert!(before_wrap > 23.0);
    }

    #[test]
    fn zero_period_is_inert() {
        let p = SawtoothPhase::new(Duration::ZERO, 20.0);
        assert_eq!(p.value_at(Duration::from_millis(123)), 0.0);
    }

    #[test]
    fn independent_instances_have_independent_ranges() {
        let gauge = SawtoothPhase::new(Duration::from_millis(1000), 24.0);
        let bars = SawtoothPhase::new(Duration::from_millis(800), 20.0);
        assert_eq!(gauge.value_at(Duration::from_millis(500)), 12.0);
        assert_eq!(bars.value_at(Duration::from_millis(400)), 10.0);
    }
}
