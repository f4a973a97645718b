//! # Alert Dialog
//!
//! Small blocking dialog surfacing a failed share action. The alert shows
//! the platform's failure reason and offers a single OK button; dismissing
//! it is the only way the message clears.

use eframe::egui;

use crate::ui::app_state::BodyScoreApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};

impl BodyScoreApp {
    pub fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.alert.clone() else {
            return;
        };

        let mut dismissed = false;

        egui::Area::new(egui::Id::new("share_alert"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.painter()
                    .rect_filled(screen_rect, egui::Rounding::ZERO, colors::MODAL_BACKDROP);

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(ui.style())
                            .fill(colors::BACKGROUND)
                            .rounding(egui::Rounding::same(12.0))
                            .inner_margin(egui::Margin::same(20.0))
                            .show(ui, |ui| {
                                ui.set_max_width(280.0);
                                ui.vertical_centered(|ui| {
                                    ui.label(
                                        egui::RichText::new(&alert.title)
                                            .font(egui::FontId::proportional(18.0))
                                            .strong()
                                            .color(CURRENT_THEME.typography.primary),
                                    );
                                    ui.add_space(8.0);
                                    ui.label(
                                        egui::RichText::new(&alert.body)
                                            .font(egui::FontId::proportional(14.0))
                                            .color(CURRENT_THEME.typography.secondary),
                                    );
                                    ui.add_space(14.0);
                                    if ui
                                        .button(
                                            egui::RichText::new("OK")
                                                .strong()
                                                .color(colors::TEXT_ACCENT),
                                        )
                                        .clicked()
                                    {
                                        dismissed = true;
                                    }
                                });
                            });
                    });
                });
            });

        if dismissed {
            self.clear_alert();
        }
    }
}
