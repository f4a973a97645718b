//! # Header Components
//!
//! Header rows for both screens plus the Body Score screen's date/share row.
//!
//! ## Responsibilities:
//! - Home header (menu and search affordances, avatar)
//! - Home user row (avatar, user name, refresh affordance)
//! - Body Score header (back navigation, title)
//! - Date row (date box opening the calendar modal, share button)

use eframe::egui;

use crate::ui::app_state::{BodyScoreApp, USER_NAME};
use crate::ui::components::theme::{colors, CURRENT_THEME};

impl BodyScoreApp {
    /// Home screen header: menu on the left, search and avatar on the right.
    /// These are static affordances, only the avatar is painted specially.
    pub fn render_home_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("☰").font(egui::FontId::proportional(24.0)));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                render_avatar(ui, 18.0);
                ui.add_space(10.0);
                ui.label(egui::RichText::new("🔍").font(egui::FontId::proportional(22.0)));
            });
        });
    }

    /// Home screen user row under the title.
    pub fn render_user_row(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            render_avatar(ui, 16.0);
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(USER_NAME)
                    .font(egui::FontId::proportional(16.0))
                    .strong()
                    .color(CURRENT_THEME.typography.secondary),
            );
            ui.label(
                egui::RichText::new("⌄")
                    .font(egui::FontId::proportional(16.0))
                    .color(CURRENT_THEME.typography.secondary),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new("⟳").font(egui::FontId::proportional(20.0)));
            });
        });
    }

    /// Body Score header: back arrow, centered title, overflow dots.
    pub fn render_body_score_header(&mut self, ui: &mut egui::Ui) {
        let mut go_back = false;
        ui.horizontal(|ui| {
            let back = ui.add(
                egui::Button::new(egui::RichText::new("←").font(egui::FontId::proportional(26.0)))
                    .frame(false),
            );
            if back.clicked() {
                go_back = true;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new("⋮").font(egui::FontId::proportional(22.0)));
                ui.with_layout(egui::Layout::centered_and_justified(egui::Direction::LeftToRight), |ui| {
                    ui.label(
                        egui::RichText::new("Body Score")
                            .font(egui::FontId::proportional(22.0))
                            .strong()
                            .color(CURRENT_THEME.typography.primary),
                    );
                });
            });
        });
        if go_back {
            self.navigate_back_home();
        }
    }

    /// Date box and share button row on the Body Score screen.
    pub fn render_date_row(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let Some(date_label) = self.body_score.as_ref().map(|s| s.formatted_date()) else {
            return;
        };

        let mut open_calendar = false;
        let mut share_requested = false;

        ui.horizontal(|ui| {
            let date_box = egui::Button::new(
                egui::RichText::new(format!("📅  {}  ⌄", date_label))
                    .font(egui::FontId::proportional(16.0))
                    .strong()
                    .color(colors::TEXT_ACCENT),
            )
            .fill(colors::ACCENT_BACKGROUND)
            .rounding(egui::Rounding::same(20.0));
            if ui.add(date_box).clicked() {
                open_calendar = true;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let share_button = egui::Button::new(
                    egui::RichText::new("📤")
                        .font(egui::FontId::proportional(16.0))
                        .color(colors::TEXT_ACCENT),
                )
                .fill(colors::ACCENT_BACKGROUND)
                .rounding(egui::Rounding::same(20.0));
                if ui.add(share_button).clicked() {
                    share_requested = true;
                }
            });
        });

        if open_calendar {
            if let Some(state) = self.body_score.as_mut() {
                state.open_calendar();
            }
        }
        if share_requested {
            self.share_score(ctx);
        }
    }
}

/// Placeholder avatar: a filled circle with the user's initials.
fn render_avatar(ui: &mut egui::Ui, radius: f32) {
    let (rect, _response) =
        ui.allocate_exact_size(egui::vec2(radius * 2.0, radius * 2.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.circle_filled(rect.center(), radius, colors::CHIP_BACKGROUND);
    let initials: String = USER_NAME
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(radius * 0.8),
        CURRENT_THEME.typography.secondary,
    );
}
