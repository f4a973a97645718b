use eframe::egui;
use std::time::Instant;

use crate::ui::app_state::{BodyScoreApp, Screen, BODY_SCORE, WEIGHT_GOAL_KG, WEIGHT_KG};
use crate::ui::components::health_status::render_health_status;
use crate::ui::components::info_cards::{render_info_card, InfoCard};
use crate::ui::components::theme::{colors, CURRENT_THEME};

impl eframe::App for BodyScoreApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The stripe animations tick every frame while their screens are
        // mounted, so keep repainting continuously.
        ctx.request_repaint();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(colors::BACKGROUND)
                    .inner_margin(egui::Margin::same(15.0)),
            )
            .show(ctx, |ui| match self.screen {
                Screen::Home => self.render_home_screen(ui),
                Screen::BodyScore => self.render_body_score_screen(ui, ctx),
            });

        // Overlays above the active screen
        self.render_calendar_modal(ctx);
        self.render_alert(ctx);
    }
}

impl BodyScoreApp {
    /// Home screen: header, title, user row, weight gauge, CTA and the two
    /// metric cards.
    fn render_home_screen(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
            .show(ui, |ui| {
                self.render_home_header(ui);
                ui.add_space(10.0);

                ui.label(
                    egui::RichText::new("Start Calculate")
                        .font(egui::FontId::proportional(36.0))
                        .strong()
                        .color(CURRENT_THEME.typography.primary),
                );
                ui.label(
                    egui::RichText::new("Your Weight")
                        .font(egui::FontId::proportional(36.0))
                        .strong()
                        .color(CURRENT_THEME.typography.primary),
                );

                ui.add_space(20.0);
                self.render_user_row(ui);
                ui.add_space(15.0);

                ui.vertical_centered(|ui| {
                    let percentage = (WEIGHT_KG / WEIGHT_GOAL_KG) as f32;
                    self.home.gauge.render(ui, percentage, WEIGHT_KG);
                });

                ui.add_space(10.0);
                self.render_cta_button(ui);
                ui.add_space(15.0);

                render_info_card(ui, &InfoCard::body_fat());
                ui.add_space(12.0);
                render_info_card(ui, &InfoCard::muscle_mass());
            });
    }

    /// Call-to-action navigating to the Body Score screen.
    fn render_cta_button(&mut self, ui: &mut egui::Ui) {
        let cta = egui::Button::new(
            egui::RichText::new("Check Your Overall Body Score   →")
                .font(egui::FontId::proportional(16.0))
                .strong()
                .color(colors::TEXT_WHITE),
        )
        .fill(CURRENT_THEME.typography.primary)
        .rounding(egui::Rounding::same(28.0));

        if ui
            .add_sized([ui.available_width(), 56.0], cta)
            .clicked()
        {
            self.navigate_to_body_score();
        }
    }

    /// Body Score screen: header, date/share row, score readout, history
    /// chart and health status card.
    fn render_body_score_screen(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        self.render_body_score_header(ui);

        ui.add_space(8.0);
        let separator = egui::Rect::from_min_size(
            ui.cursor().min,
            egui::vec2(ui.available_width(), 1.0),
        );
        ui.painter().rect_filled(separator, egui::Rounding::ZERO, colors::SEPARATOR);
        ui.add_space(10.0);

        self.render_date_row(ui, ctx);
        ui.add_space(12.0);

        self.render_score_row(ui);
        ui.add_space(16.0);

        if let Some(state) = &self.body_score {
            state.chart.render(ui, Instant::now());
        }
        ui.add_space(16.0);

        render_health_status(ui);
    }

    /// Big score readout with the "Current Score" caption.
    fn render_score_row(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let score = egui::RichText::new(BODY_SCORE.to_string())
                    .font(egui::FontId::proportional(80.0))
                    .strong()
                    .color(CURRENT_THEME.typography.primary);
                let out_of = egui::RichText::new("/100")
                    .font(egui::FontId::proportional(28.0))
                    .strong()
                    .color(CURRENT_THEME.typography.muted);

                let total_width = 170.0;
                ui.add_space((ui.available_width() - total_width).max(0.0) / 2.0);
                ui.label(score);
                ui.label(out_of);
            });
            ui.horizontal(|ui| {
                let caption_width = 140.0;
                ui.add_space((ui.available_width() - caption_width).max(0.0) / 2.0);
                ui.label(
                    egui::RichText::new("Current Score")
                        .font(egui::FontId::proportional(18.0))
                        .color(CURRENT_THEME.typography.primary),
                );
                ui.label(
                    egui::RichText::new("🔥")
                        .font(egui::FontId::proportional(18.0))
                        .color(CURRENT_THEME.health.flame),
                );
            });
        });
    }
}
