//! # Weight Gauge Calculations
//!
//! This module handles the semicircular gauge geometry: sizing relative to
//! the container, the percentage-to-angle mapping, polar conversion for the
//! arc endpoint and the separator mark. Everything here is pure so the
//! geometric properties are testable without a UI.

use eframe::egui;
use std::f32::consts::PI;

/// Geometry of a semicircular gauge, derived from the container width and a
/// fill percentage.
#[derive(Debug, Clone)]
pub struct GaugeGeometry {
    /// Arc radius (to the stroke centerline)
    pub radius: f32,
    /// Stroke width of both arcs
    pub stroke_width: f32,
    /// Side length of the square canvas enclosing the full circle
    pub size: f32,
    /// Center coordinate (the center point is `(center, center)`)
    pub center: f32,
    /// Sweep of the foreground arc in degrees, measured clockwise from the
    /// leftmost point of the semicircle
    pub angle: f32,
}

impl GaugeGeometry {
    /// Derive gauge geometry from the available gauge width.
    ///
    /// `percentage` is nominally in `[0, 1]` but is deliberately not
    /// validated: out-of-range input produces degenerate geometry without
    /// crashing, and the large-arc flag below stays meaningful for it.
    pub fn from_width(gauge_width: f32, percentage: f32) -> Self {
        let radius = gauge_width / 2.0 * 0.7;
        let stroke_width = gauge_width / 2.0 * 0.6;
        let size = (radius + stroke_width) * 2.0;
        Self {
            radius,
            stroke_width,
            size,
            center: size / 2.0,
            angle: percentage * 180.0,
        }
    }

    /// Convert a gauge angle in degrees to a point on the arc centerline.
    /// 0° is the leftmost point of the semicircle, 180° the rightmost.
    pub fn point_at(&self, angle_deg: f32) -> egui::Pos2 {
        let a = (angle_deg - 180.0) * (PI / 180.0);
        egui::pos2(
            self.center + self.radius * a.cos(),
            self.center + self.radius * a.sin(),
        )
    }

    /// Start of both arcs (the leftmost point of the semicircle).
    #[allow(dead_code)]
    pub fn arc_start(&self) -> egui::Pos2 {
        self.point_at(0.0)
    }

    /// End of the foreground arc.
    #[allow(dead_code)]
    pub fn arc_end(&self) -> egui::Pos2 {
        self.point_at(self.angle)
    }

    /// SVG-style large-arc flag for the foreground arc. The angle is capped
    /// at 180° by construction so this is 0 in practice, but the conditional
    /// is kept for callers that pass uncapped percentages.
    #[allow(dead_code)]
    pub fn large_arc_flag(&self) -> u8 {
        if self.angle > 180.0 {
            1
        } else {
            0
        }
    }

    /// Endpoints of the separator mark between the filled and unfilled arc,
    /// spanning the stroke at the same angular position as the arc end.
    pub fn separator(&self) -> (egui::Pos2, egui::Pos2) {
        let a = (self.angle - 180.0) * (PI / 180.0);
        let inner = self.radius - self.stroke_width / 2.0;
        let outer = self.radius + self.stroke_width / 2.0;
        let start = egui::pos2(self.center + inner * a.cos(), self.center + inner * a.sin());
        let end = egui::pos2(self.center + outer * a.cos(), self.center + outer * a.sin());
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn geometry(percentage: f32) -> GaugeGeometry {
        GaugeGeometry::from_width(300.0, percentage)
    }

    #[test]
    fn sizing_follows_the_container_width() {
        let g = geometry(0.5);
        assert!((g.radius - 105.0).abs() < EPS); // 0.7 * 150
        assert!((g.stroke_width - 90.0).abs() < EPS); // 0.6 * 150
        assert!((g.size - 390.0).abs() < EPS); // 2 * (105 + 90)
        assert!((g.center - 195.0).abs() < EPS);
    }

    #[test]
    fn angle_is_percentage_times_180() {
        for p in [0.0, 0.1, 0.25, 0.56, 0.75, 1.0] {
            let g = geometry(p);
            assert!((g.angle - p * 180.0).abs() < EPS, "p = {}", p);
        }
    }

    #[test]
    fn arc_endpoint_lies_on_the_arc_centerline() {
        for p in [0.0, 0.2, 0.4, 0.56, 0.8, 1.0] {
            let g = geometry(p);
            let end = g.arc_end();
            let dist = ((end.x - g.center).powi(2) + (end.y - g.center).powi(2)).sqrt();
            assert!((dist - g.radius).abs() < EPS, "p = {}", p);
        }
    }

    #[test]
    fn zero_percent_collapses_the_foreground_arc() {
        let g = geometry(0.0);
        let start = g.arc_start();
        let end = g.arc_end();
        assert!((start.x - end.x).abs() < EPS);
        assert!((start.y - end.y).abs() < EPS);
        // The start sits at the leftmost point, a stroke width in from the edge.
        assert!((start.x - g.stroke_width).abs() < EPS);
        assert!((start.y - g.center).abs() < EPS);
    }

    #[test]
    fn full_percent_spans_the_whole_semicircle() {
        let g = geometry(1.0);
        let end = g.arc_end();
        assert!((end.x - (g.size - g.stroke_width)).abs() < EPS);
        assert!((end.y - g.center).abs() < EPS);
    }

    #[test]
    fn large_arc_flag_is_zero_for_the_nominal_range() {
        for p in [0.0, 0.5, 0.999, 1.0] {
            assert_eq!(geometry(p).large_arc_flag(), 0, "p = {}", p);
        }
    }

    #[test]
    fn large_arc_flag_flips_only_beyond_a_half_turn() {
        // Only an uncapped percentage above 1.0 can push the angle past 180.
        assert_eq!(geometry(1.2).large_arc_flag(), 1);
        assert_eq!(geometry(2.0).large_arc_flag(), 1);
    }

    #[test]
    fn separator_spans_the_stroke_at_the_arc_end() {
        let g = geometry(0.56);
        let (inner, outer) = g.separator();
        let inner_dist = ((inner.x - g.center).powi(2) + (inner.y - g.center).powi(2)).sqrt();
        let outer_dist = ((outer.x - g.center).powi(2) + (outer.y - g.center).powi(2)).sqrt();
        assert!((inner_dist - (g.radius - g.stroke_width / 2.0)).abs() < EPS);
        assert!((outer_dist - (g.radius + g.stroke_width / 2.0)).abs() < EPS);
        // Both endpoints share the arc end's angular position.
        let end = g.arc_end();
        let cross = (inner.x - g.center) * (end.y - g.center) - (inner.y - g.center) * (end.x - g.center);
        assert!(cross.abs() < 1e-1);
    }

    #[test]
    fn out_of_range_percentage_does_not_crash() {
        let g = geometry(-0.5);
        assert!(g.arc_end().x.is_finite());
        assert_eq!(g.large_arc_flag(), 0);
    }
}
