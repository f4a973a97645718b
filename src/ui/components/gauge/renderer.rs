//! # Weight Gauge Renderer
//!
//! This module paints the semicircular weight gauge using egui's painting
//! primitives. egui has no native arc support, so both arcs are drawn as a
//! series of short line segments. The background track carries an animated
//! diagonal stripe texture driven by a sawtooth phase owned by the gauge.

use eframe::egui;
use std::time::{Duration, Instant};

use super::calculations::GaugeGeometry;
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::state::animation::SawtoothPhase;

/// Horizontal period of the stripe texture, matching the phase bound so the
/// animation loops seamlessly.
const STRIPE_TILE: f32 = 24.0;

/// Width of a stripe band measured along the x+y axis. The stripes are 8
/// units thick perpendicular to their 45° direction, which projects to
/// 8 * sqrt(2) here.
const STRIPE_BAND: f32 = 11.3;

/// Stripe texture membership test for a point in gauge-local coordinates.
/// The bands run at 45° and drift horizontally with the phase.
fn in_stripe(x: f32, y: f32, phase: f32) -> bool {
    ((x - phase) + y).rem_euclid(STRIPE_TILE) < STRIPE_BAND
}

/// Number of line segments for an arc of the given length, roughly 3 pixels
/// per segment within reasonable bounds.
fn arc_segment_count(arc_length: f32) -> i32 {
    ((arc_length / 3.0).ceil() as i32).clamp(8, 256)
}

/// Semicircular weight gauge with an animated striped track.
///
/// Owns its stripe phase: constructing the gauge starts the animation,
/// dropping it (when the home screen state is torn down) stops it.
pub struct WeightGauge {
    stripe_phase: SawtoothPhase,
}

impl WeightGauge {
    pub fn new() -> Self {
        Self {
            // 0 -> 24 over one second, then restart
            stripe_phase: SawtoothPhase::new(Duration::from_millis(1000), STRIPE_TILE),
        }
    }

    /// Render the gauge into the current layout position. `percentage` is the
    /// 0..=1 fill fraction and `weight_kg` the value shown in the center.
    pub fn render(&self, ui: &mut egui::Ui, percentage: f32, weight_kg: f64) {
        let gauge_width = ui.available_width() * 0.8;
        let geom = GaugeGeometry::from_width(gauge_width, percentage);

        // The canvas is a square, but only the top semicircle plus the stroke
        // is visible, so allocate just that.
        let canvas = egui::vec2(geom.size, geom.center + geom.stroke_width);
        let (rect, _response) = ui.allocate_exact_size(canvas, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let origin = rect.min.to_vec2();

        let phase = self.stripe_phase.value(Instant::now());

        self.paint_background_arc(&painter, &geom, origin, phase);
        self.paint_foreground_arc(&painter, &geom, origin);
        self.paint_separator(&painter, &geom, origin);
        self.paint_center_text(&painter, &geom, rect, gauge_width, weight_kg);
    }

    /// Background track: the full semicircle, textured with moving stripes.
    /// Each segment is colored by sampling the stripe function at its
    /// midpoint, which approximates the repeating pattern fill closely at
    /// ~3 px segment lengths.
    fn paint_background_arc(
        &self,
        painter: &egui::Painter,
        geom: &GaugeGeometry,
        origin: egui::Vec2,
        phase: f32,
    ) {
        let arc_length = std::f32::consts::PI * geom.radius;
        let segments = arc_segment_count(arc_length);
        let step = 180.0 / segments as f32;

        for i in 0..segments {
            let p1 = geom.point_at(step * i as f32);
            let p2 = geom.point_at(step * (i + 1) as f32);
            let mid = egui::pos2((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0);
            let color = if in_stripe(mid.x, mid.y, phase) {
                CURRENT_THEME.gauge.stripe
            } else {
                CURRENT_THEME.gauge.track_base
            };
            painter.line_segment(
                [p1 + origin, p2 + origin],
                egui::Stroke::new(geom.stroke_width, color),
            );
        }
    }

    /// Foreground arc: solid fill from the start of the track to the angle.
    fn paint_foreground_arc(
        &self,
        painter: &egui::Painter,
        geom: &GaugeGeometry,
        origin: egui::Vec2,
    ) {
        if geom.angle <= 0.0 {
            return;
        }
        let arc_length = geom.angle.to_radians() * geom.radius;
        let segments = arc_segment_count(arc_length);
        let step = geom.angle / segments as f32;

        for i in 0..segments {
            let p1 = geom.point_at(step * i as f32);
            let p2 = geom.point_at(step * (i + 1) as f32);
            painter.line_segment(
                [p1 + origin, p2 + origin],
                egui::Stroke::new(geom.stroke_width, CURRENT_THEME.gauge.foreground),
            );
        }
    }

    /// Straight separator mark at the filled/unfilled boundary.
    fn paint_separator(&self, painter: &egui::Painter, geom: &GaugeGeometry, origin: egui::Vec2) {
        let (start, end) = geom.separator();
        painter.line_segment(
            [start + origin, end + origin],
            egui::Stroke::new(3.0, CURRENT_THEME.gauge.separator),
        );
    }

    /// Weight readout in the gauge center: big integer part, smaller decimal,
    /// unit label underneath.
    fn paint_center_text(
        &self,
        painter: &egui::Painter,
        geom: &GaugeGeometry,
        rect: egui::Rect,
        gauge_width: f32,
        weight_kg: f64,
    ) {
        let anchor = egui::pos2(rect.min.x + geom.center, rect.min.y + geom.center * 0.92);

        let whole = format!("{}", weight_kg.trunc() as i64);
        let decimal = format!(".{}", ((weight_kg.fract() * 10.0).round() as i64).abs());

        let value_font = egui::FontId::proportional(gauge_width * 0.18);
        let decimal_font = egui::FontId::proportional(gauge_width * 0.10);
        let label_font = egui::FontId::proportional(gauge_width * 0.05);

        let whole_rect = painter.text(
            anchor,
            egui::Align2::CENTER_CENTER,
            whole,
            value_font,
            CURRENT_THEME.typography.primary,
        );
        painter.text(
            egui::pos2(whole_rect.max.x, whole_rect.max.y - gauge_width * 0.02),
            egui::Align2::LEFT_BOTTOM,
            decimal,
            decimal_font,
            CURRENT_THEME.typography.muted,
        );
        painter.text(
            egui::pos2(anchor.x, whole_rect.max.y + gauge_width * 0.01),
            egui::Align2::CENTER_TOP,
            "Kilogram",
            label_font,
            CURRENT_THEME.typography.primary,
        );
    }
}

impl Default for WeightGauge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripe_bands_repeat_with_the_tile_period() {
        for x in [0.0, 3.0, 7.5] {
            assert_eq!(
                in_stripe(x, 5.0, 0.0),
                in_stripe(x + STRIPE_TILE, 5.0, 0.0),
                "x = {}",
                x
            );
        }
    }

    #[test]
    fn stripe_bands_shift_with_the_phase() {
        // A point inside a band falls out of it once the phase moves the
        // texture past the band width.
        assert!(in_stripe(0.0, 0.0, 0.0));
        assert!(!in_stripe(0.0, 0.0, 12.0));
    }

    #[test]
    fn stripes_run_diagonally() {
        // Moving equally in x and -y stays on the same band.
        assert_eq!(in_stripe(2.0, 8.0, 0.0), in_stripe(6.0, 4.0, 0.0));
    }

    #[test]
    fn segment_count_is_bounded() {
        assert_eq!(arc_segment_count(0.0), 8);
        assert_eq!(arc_segment_count(30.0), 10);
        assert_eq!(arc_segment_count(10_000.0), 256);
    }
}
