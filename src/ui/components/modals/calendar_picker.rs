//! # Calendar Picker Modal
//!
//! The date-picker overlay on the Body Score screen.
//!
//! ## Responsibilities:
//! - Full-screen dimmed backdrop with click-outside dismissal
//! - Month grid with weekday headers, filler days, today and selected-day
//!   highlighting
//! - Month navigation with year rollover
//!
//! Dismissing through the backdrop leaves the selected date untouched;
//! picking a day commits it and closes the modal. A just-opened guard keeps
//! the opening click from being read as a backdrop click on the same frame.

use chrono::{Datelike, Duration, NaiveDate};
use eframe::egui;

use crate::ui::app_state::BodyScoreApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Cells in the calendar grid: 6 weeks of 7 days.
const GRID_CELLS: i64 = 42;

const WEEKDAY_HEADERS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// The 42 dates shown for a month, starting from the Sunday on or before
/// the 1st, including leading and trailing filler days.
pub fn month_grid(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let offset = first.weekday().num_days_from_sunday() as i64;
    let start = first - Duration::days(offset);
    (0..GRID_CELLS).map(|i| start + Duration::days(i)).collect()
}

impl BodyScoreApp {
    /// Render the calendar modal if the Body Score screen has it open.
    pub fn render_calendar_modal(&mut self, ctx: &egui::Context) {
        let Some(state) = self.body_score.as_mut() else {
            return;
        };
        if !state.show_calendar {
            return;
        }

        let mut card_rect = egui::Rect::NOTHING;

        egui::Area::new(egui::Id::new("calendar_modal"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.painter()
                    .rect_filled(screen_rect, egui::Rounding::ZERO, colors::MODAL_BACKDROP);

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        let response = egui::Frame::window(ui.style())
                            .fill(colors::BACKGROUND)
                            .rounding(egui::Rounding::same(10.0))
                            .inner_margin(egui::Margin::same(14.0))
                            .show(ui, |ui| {
                                ui.set_width(308.0);

                                render_month_navigation(ui, state);
                                ui.add_space(8.0);
                                render_weekday_headers(ui);
                                render_day_grid(ui, state);
                            });
                        card_rect = response.response.rect;
                    });
                });
            });

        if state.modal_just_opened {
            // The click that opened the modal must not also dismiss it
            state.modal_just_opened = false;
        } else if ctx.input(|i| i.pointer.any_click()) {
            if let Some(pos) = ctx.input(|i| i.pointer.interact_pos()) {
                if !card_rect.contains(pos) {
                    state.dismiss_calendar();
                }
            }
        }
    }
}

fn render_month_navigation(ui: &mut egui::Ui, state: &mut crate::ui::state::BodyScoreState) {
    ui.horizontal(|ui| {
        if ui
            .button(egui::RichText::new("⬅").color(colors::TEXT_ACCENT))
            .clicked()
        {
            state.navigate_to_previous_month();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(egui::RichText::new("➡").color(colors::TEXT_ACCENT))
                .clicked()
            {
                state.navigate_to_next_month();
            }
            ui.with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} {}",
                            state.calendar_month_name(),
                            state.calendar_year
                        ))
                        .font(egui::FontId::proportional(16.0))
                        .strong()
                        .color(CURRENT_THEME.typography.primary),
                    );
                },
            );
        });
    });
}

fn render_weekday_headers(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        for header in WEEKDAY_HEADERS {
            ui.add_sized(
                [40.0, 20.0],
                egui::Label::new(
                    egui::RichText::new(header)
                        .font(egui::FontId::proportional(12.0))
                        .color(CURRENT_THEME.typography.muted),
                ),
            );
        }
    });
}

fn render_day_grid(ui: &mut egui::Ui, state: &mut crate::ui::state::BodyScoreState) {
    let today = chrono::Local::now().date_naive();
    let grid = month_grid(state.calendar_year, state.calendar_month);

    let mut picked: Option<NaiveDate> = None;
    for week in grid.chunks(7) {
        ui.horizontal(|ui| {
            for &day in week {
                let in_month = day.month() == state.calendar_month;
                let selected = day == state.selected_date;

                let text_color = if selected {
                    colors::TEXT_WHITE
                } else if day == today {
                    colors::TEXT_ACCENT
                } else if in_month {
                    CURRENT_THEME.typography.primary
                } else {
                    CURRENT_THEME.typography.muted
                };
                let fill = if selected {
                    colors::TEXT_ACCENT
                } else {
                    colors::BACKGROUND
                };

                let button = egui::Button::new(
                    egui::RichText::new(day.day().to_string())
                        .font(egui::FontId::proportional(14.0))
                        .color(text_color),
                )
                .fill(fill)
                .rounding(egui::Rounding::same(16.0))
                .frame(selected);

                if ui.add_sized([40.0, 32.0], button).clicked() {
                    picked = Some(day);
                }
            }
        });
    }

    if let Some(day) = picked {
        state.select_day(day);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_always_holds_six_full_weeks() {
        assert_eq!(month_grid(2026, 8).len(), 42);
        assert_eq!(month_grid(2026, 2).len(), 42);
    }

    #[test]
    fn grid_starts_on_the_sunday_on_or_before_the_first() {
        // August 1st 2026 is a Saturday, so the grid opens on July 26th.
        let grid = month_grid(2026, 8);
        assert_eq!(grid[0], NaiveDate::from_ymd_opt(2026, 7, 26).unwrap());
        // February 1st 2026 is itself a Sunday.
        let grid = month_grid(2026, 2);
        assert_eq!(grid[0], NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    }

    #[test]
    fn grid_days_are_consecutive() {
        let grid = month_grid(2026, 8);
        for pair in grid.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        assert_eq!(grid[41], NaiveDate::from_ymd_opt(2026, 9, 5).unwrap());
    }

    #[test]
    fn grid_contains_every_day_of_the_month() {
        let grid = month_grid(2026, 8);
        for day in 1..=31 {
            let date = NaiveDate::from_ymd_opt(2026, 8, day).unwrap();
            assert!(grid.contains(&date), "missing {}", date);
        }
    }

    #[test]
    fn invalid_month_yields_an_empty_grid() {
        assert!(month_grid(2026, 13).is_empty());
    }
}
