//! # Health Status Component
//!
//! Rounded status card on the Body Score screen: a healthy/unhealthy verdict
//! with a segmented scale bar underneath. The verdict and fill level are
//! fixed design values, no derivation logic.

use eframe::egui;

use crate::ui::components::theme::CURRENT_THEME;

/// Relative widths of the scale segments, left to right.
const SEGMENT_WEIGHTS: [f32; 4] = [2.0, 2.0, 1.0, 1.0];

/// How many segments (from the left) are filled.
const FILLED_SEGMENTS: usize = 3;

/// Gap between segments.
const SEGMENT_GAP: f32 = 4.0;

/// Widths of each scale segment for a given total bar width, honoring the
/// flex weights and the gaps between segments.
pub fn segment_widths(total_width: f32) -> [f32; 4] {
    let weight_sum: f32 = SEGMENT_WEIGHTS.iter().sum();
    let usable = total_width - SEGMENT_GAP * (SEGMENT_WEIGHTS.len() - 1) as f32;
    SEGMENT_WEIGHTS.map(|w| usable * w / weight_sum)
}

pub fn render_health_status(ui: &mut egui::Ui) {
    egui::Frame::none()
        .fill(CURRENT_THEME.health.card_background)
        .rounding(egui::Rounding::same(15.0))
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("❤")
                        .font(egui::FontId::proportional(24.0))
                        .color(CURRENT_THEME.health.healthy),
                );
                ui.label(
                    egui::RichText::new("You are healthy")
                        .font(egui::FontId::proportional(18.0))
                        .strong()
                        .color(CURRENT_THEME.health.healthy),
                );
            });
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new("Keep or increase your healthy score!")
                    .font(egui::FontId::proportional(15.0))
                    .color(CURRENT_THEME.typography.secondary),
            );
            ui.add_space(15.0);

            render_scale_bar(ui);

            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Unhealthy")
                        .font(egui::FontId::proportional(13.0))
                        .color(CURRENT_THEME.typography.secondary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("Very Healthy")
                            .font(egui::FontId::proportional(13.0))
                            .color(CURRENT_THEME.typography.secondary),
                    );
                });
            });
        });
}

fn render_scale_bar(ui: &mut egui::Ui) {
    let width = ui.available_width();
    let (rect, _response) = ui.allocate_exact_size(egui::vec2(width, 10.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let widths = segment_widths(width);
    let mut x = rect.min.x;
    for (i, w) in widths.iter().enumerate() {
        let seg = egui::Rect::from_min_size(egui::pos2(x, rect.min.y), egui::vec2(*w, 10.0));
        let color = if i < FILLED_SEGMENTS {
            CURRENT_THEME.health.segment_filled
        } else {
            CURRENT_THEME.health.segment_empty
        };
        painter.rect_filled(seg, egui::Rounding::same(5.0), color);
        x += w + SEGMENT_GAP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_honor_the_flex_weights() {
        let widths = segment_widths(112.0); // 100 usable after 3 gaps of 4
        let expected = [100.0 / 3.0, 100.0 / 3.0, 100.0 / 6.0, 100.0 / 6.0];
        for (got, want) in widths.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-3, "got {:?}", widths);
        }
    }

    #[test]
    fn segments_and_gaps_fill_the_bar_exactly() {
        let total = 250.0;
        let sum: f32 = segment_widths(total).iter().sum();
        assert!((sum + 3.0 * SEGMENT_GAP - total).abs() < 1e-3);
    }
}
