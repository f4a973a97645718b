//! # Diagonal Pattern Component
//!
//! Decorative texture of parallel 45° stripes drawn over a bar, drifting
//! horizontally with an animated phase. Layout math is kept pure so the
//! stripe count and anchors are testable.

use eframe::egui;
use std::time::{Duration, Instant};

use crate::ui::state::animation::SawtoothPhase;

/// Horizontal distance between neighboring stripes.
pub const STRIPE_SPACING: f32 = 10.0;

/// Stroke width of each stripe.
const STRIPE_WIDTH: f32 = 4.0;

/// How far the pattern extends above the bar so the stripes start at the
/// bar's top border rather than below it.
const TOP_OVERLAP: f32 = 4.0;

/// Number of stripes needed to cover a bar. Stripes run diagonally, so the
/// cover width is the bar width plus its height.
pub fn stripe_count(bar_width: f32, bar_height: f32) -> usize {
    ((bar_width + bar_height) / STRIPE_SPACING).ceil() as usize
}

/// Horizontal anchor (top edge intersection) of each stripe for the given
/// phase. Anchors start at the right edge and march left; the phase shifts
/// the whole family right as it cycles.
pub fn stripe_anchors(bar_width: f32, bar_height: f32, phase: f32) -> Vec<f32> {
    (0..stripe_count(bar_width, bar_height))
        .map(|i| bar_width - i as f32 * STRIPE_SPACING + phase)
        .collect()
}

/// Animated diagonal stripe overlay for one bar.
///
/// Each instance owns an independent sawtooth phase, started on construction
/// and dropped with the component.
pub struct DiagonalPattern {
    color: egui::Color32,
    phase: SawtoothPhase,
}

impl DiagonalPattern {
    pub fn new(color: egui::Color32) -> Self {
        Self {
            color,
            // 0 -> 20 over 800 ms, then restart
            phase: SawtoothPhase::new(Duration::from_millis(800), 20.0),
        }
    }

    /// Paint the stripes over `bar_rect`, clipped to the bar (plus the small
    /// top overlap that covers its border).
    pub fn paint(&self, painter: &egui::Painter, bar_rect: egui::Rect, now: Instant) {
        let pattern_rect = egui::Rect::from_min_size(
            egui::pos2(bar_rect.min.x, bar_rect.min.y - TOP_OVERLAP),
            egui::vec2(bar_rect.width(), bar_rect.height() + TOP_OVERLAP),
        );
        let painter = painter.with_clip_rect(pattern_rect);

        let phase = self.phase.value(now);
        // Fixed 25% opacity, like a translucent overlay
        let color = egui::Color32::from_rgba_unmultiplied(
            self.color.r(),
            self.color.g(),
            self.color.b(),
            64,
        );
        let stroke = egui::Stroke::new(STRIPE_WIDTH, color);

        for anchor in stripe_anchors(pattern_rect.width(), pattern_rect.height(), phase) {
            // Each stripe runs from its top-edge anchor down-left at 45°.
            let top = egui::pos2(pattern_rect.min.x + anchor, pattern_rect.min.y);
            let bottom = egui::pos2(
                pattern_rect.min.x + anchor - pattern_rect.height(),
                pattern_rect.max.y,
            );
            painter.line_segment([top, bottom], stroke);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripe_count_covers_width_plus_height() {
        assert_eq!(stripe_count(100.0, 90.0), 19);
        assert_eq!(stripe_count(100.0, 135.0), 24);
        assert_eq!(stripe_count(50.0, 50.0), 10);
    }

    #[test]
    fn anchors_start_at_the_right_edge_and_step_left() {
        let anchors = stripe_anchors(100.0, 90.0, 0.0);
        assert_eq!(anchors.len(), 19);
        assert_eq!(anchors[0], 100.0);
        assert_eq!(anchors[1], 90.0);
        assert_eq!(anchors[18], 100.0 - 18.0 * STRIPE_SPACING);
    }

    #[test]
    fn phase_shifts_every_anchor_by_the_same_amount() {
        let still = stripe_anchors(100.0, 90.0, 0.0);
        let moved = stripe_anchors(100.0, 90.0, 7.5);
        for (a, b) in still.iter().zip(moved.iter()) {
            assert_eq!(b - a, 7.5);
        }
    }

    #[test]
    fn phase_does_not_change_the_stripe_count() {
        assert_eq!(
            stripe_anchors(100.0, 90.0, 0.0).len(),
            stripe_anchors(100.0, 90.0, 19.9).len()
        );
    }
}
