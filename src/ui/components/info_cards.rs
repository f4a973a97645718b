//! # Info Cards Component
//!
//! The body fat and muscle mass cards on the home screen. Values are fixed
//! design literals; the cards are display-only apart from a decorative arrow.

use eframe::egui;

use crate::ui::components::theme::CURRENT_THEME;

/// Contents of one metric card.
pub struct InfoCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub sub_value: &'static str,
    pub status: &'static str,
    pub status_color: egui::Color32,
}

impl InfoCard {
    pub fn body_fat() -> Self {
        Self {
            icon: "👤",
            title: "Body Fat",
            value: "24,4 %",
            sub_value: "13.6 kg",
            status: "Normal",
            status_color: CURRENT_THEME.health.healthy,
        }
    }

    pub fn muscle_mass() -> Self {
        Self {
            icon: "⚡",
            title: "Muscle Mass",
            value: "70,2 %",
            sub_value: "41.2 kg",
            status: "Good",
            status_color: CURRENT_THEME.health.status_good,
        }
    }
}

pub fn render_info_card(ui: &mut egui::Ui, card: &InfoCard) {
    egui::Frame::none()
        .fill(CURRENT_THEME.layout.card_background)
        .rounding(egui::Rounding::same(20.0))
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                egui::Frame::none()
                    .fill(CURRENT_THEME.layout.background)
                    .rounding(egui::Rounding::same(10.0))
                    .inner_margin(egui::Margin::same(8.0))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(card.icon).font(egui::FontId::proportional(16.0)));
                    });
                ui.label(
                    egui::RichText::new(card.title)
                        .font(egui::FontId::proportional(16.0))
                        .strong()
                        .color(CURRENT_THEME.typography.secondary),
                );
            });
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(card.value)
                        .font(egui::FontId::proportional(28.0))
                        .strong()
                        .color(CURRENT_THEME.typography.primary),
                );
                egui::Frame::none()
                    .fill(CURRENT_THEME.layout.chip_background)
                    .rounding(egui::Rounding::same(10.0))
                    .inner_margin(egui::Margin::symmetric(8.0, 3.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(card.sub_value)
                                .font(egui::FontId::proportional(12.0))
                                .strong()
                                .color(CURRENT_THEME.typography.secondary),
                        );
                    });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("→")
                            .font(egui::FontId::proportional(22.0))
                            .color(CURRENT_THEME.typography.muted),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(card.status)
                            .font(egui::FontId::proportional(14.0))
                            .strong()
                            .color(card.status_color),
                    );
                });
            });
        });
}
