//! # Score Chart Component
//!
//! Three-bar history chart on the Body Score screen: last month's average,
//! last week, and the current week. The two historical bars carry the
//! animated diagonal stripe texture; the current week is highlighted solid
//! with a delta chip.

use eframe::egui;
use std::time::Instant;

use crate::ui::components::diagonal_pattern::DiagonalPattern;
use crate::ui::components::theme::CURRENT_THEME;

/// Height of the bar area (labels render above the bars inside it).
const CHART_HEIGHT: f32 = 200.0;

/// Height reserved under the bars for the value row.
const VALUE_ROW_HEIGHT: f32 = 28.0;

/// Thickness of the dark top border on every bar.
const TOP_BORDER: f32 = 4.0;

/// One column of the score chart.
struct ScoreBar {
    label: &'static str,
    value: u32,
    height: f32,
    /// Prefix the value with "Avg" in the bottom row
    avg: bool,
    /// Solid highlight fill with the week-over-week delta chip
    highlight: bool,
}

const BARS: [ScoreBar; 3] = [
    ScoreBar { label: "Last month", value: 50, height: 90.0, avg: true, highlight: false },
    ScoreBar { label: "Last week", value: 64, height: 135.0, avg: false, highlight: false },
    ScoreBar { label: "This week", value: 78, height: 180.0, avg: false, highlight: true },
];

/// Week-over-week change shown on the highlighted bar.
const DELTA_LABEL: &str = "+4%";

/// Bar chart with per-bar stripe animations.
///
/// Each striped bar owns its own phase instance; both start when the Body
/// Score screen state is constructed and stop when it is dropped.
pub struct ScoreChart {
    last_month_pattern: DiagonalPattern,
    last_week_pattern: DiagonalPattern,
}

impl ScoreChart {
    pub fn new() -> Self {
        Self {
            last_month_pattern: DiagonalPattern::new(CURRENT_THEME.chart.bar_stripe),
            last_week_pattern: DiagonalPattern::new(CURRENT_THEME.chart.bar_stripe),
        }
    }

    pub fn render(&self, ui: &mut egui::Ui, now: Instant) {
        let width = ui.available_width();
        let (rect, _response) = ui.allocate_exact_size(
            egui::vec2(width, CHART_HEIGHT + VALUE_ROW_HEIGHT),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(rect);

        let col_width = rect.width() / BARS.len() as f32;
        let baseline = rect.min.y + CHART_HEIGHT;

        for (i, bar) in BARS.iter().enumerate() {
            let col_left = rect.min.x + col_width * i as f32;
            let bar_width = col_width * 0.55;
            let bar_rect = egui::Rect::from_min_max(
                egui::pos2(col_left + (col_width - bar_width) / 2.0, baseline - bar.height),
                egui::pos2(col_left + (col_width + bar_width) / 2.0, baseline),
            );

            self.paint_bar(&painter, bar, bar_rect, i, now);
            self.paint_labels(&painter, bar, bar_rect);
        }
    }

    fn paint_bar(
        &self,
        painter: &egui::Painter,
        bar: &ScoreBar,
        bar_rect: egui::Rect,
        index: usize,
        now: Instant,
    ) {
        let fill = if bar.highlight {
            CURRENT_THEME.chart.bar_highlight
        } else {
            CURRENT_THEME.chart.bar_background
        };
        painter.rect_filled(bar_rect, egui::Rounding::same(8.0), fill);

        // Dark top border across the full bar width
        let border_rect = egui::Rect::from_min_size(
            bar_rect.min,
            egui::vec2(bar_rect.width(), TOP_BORDER),
        );
        painter.rect_filled(border_rect, egui::Rounding::ZERO, CURRENT_THEME.chart.bar_border);

        match index {
            0 => self.last_month_pattern.paint(painter, bar_rect, now),
            1 => self.last_week_pattern.paint(painter, bar_rect, now),
            _ => self.paint_delta_chip(painter, bar_rect),
        }
    }

    /// Small translucent chip in the top-right corner of the highlighted bar.
    fn paint_delta_chip(&self, painter: &egui::Painter, bar_rect: egui::Rect) {
        let chip = egui::Rect::from_min_size(
            egui::pos2(bar_rect.max.x - 41.0, bar_rect.min.y + TOP_BORDER + 5.0),
            egui::vec2(36.0, 18.0),
        );
        painter.rect_filled(
            chip,
            egui::Rounding::same(9.0),
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 204),
        );
        painter.text(
            chip.center(),
            egui::Align2::CENTER_CENTER,
            DELTA_LABEL,
            egui::FontId::proportional(12.0),
            CURRENT_THEME.chart.bar_highlight,
        );
    }

    fn paint_labels(&self, painter: &egui::Painter, bar: &ScoreBar, bar_rect: egui::Rect) {
        // Column label above the bar
        painter.text(
            egui::pos2(bar_rect.center().x, bar_rect.min.y - 10.0),
            egui::Align2::CENTER_BOTTOM,
            bar.label,
            egui::FontId::proportional(15.0),
            CURRENT_THEME.typography.secondary,
        );

        // Value row under the bar, right-aligned; the monthly bar carries an
        // "Avg" prefix on the left
        let row_y = bar_rect.max.y + 8.0;
        painter.text(
            egui::pos2(bar_rect.max.x, row_y),
            egui::Align2::RIGHT_TOP,
            bar.value.to_string(),
            egui::FontId::proportional(18.0),
            CURRENT_THEME.typography.primary,
        );
        if bar.avg {
            painter.text(
                egui::pos2(bar_rect.min.x, row_y + 2.0),
                egui::Align2::LEFT_TOP,
                "Avg",
                egui::FontId::proportional(14.0),
                CURRENT_THEME.typography.secondary,
            );
        }
    }
}

impl Default for ScoreChart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_shows_three_weeks_of_history() {
        assert_eq!(BARS.len(), 3);
        assert_eq!(BARS.map(|b| b.value), [50, 64, 78]);
    }

    #[test]
    fn only_the_current_week_is_highlighted() {
        assert!(BARS[2].highlight);
        assert!(!BARS[0].highlight && !BARS[1].highlight);
    }

    #[test]
    fn only_the_monthly_bar_shows_an_average() {
        assert!(BARS[0].avg);
        assert!(!BARS[1].avg && !BARS[2].avg);
    }
}
