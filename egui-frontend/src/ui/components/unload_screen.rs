//! # Unload Screen
//!
//! Title, abbreviated wallet address, balance card and the Unload button
//! that opens the amount entry modal.

use eframe::egui;
use shared::{abbreviate_address, format_amount, AmountEntryEvent};

use crate::ui::app_state::WalletApp;
use crate::ui::components::styling::{draw_card_container, draw_screen_background, styled_button};
use crate::ui::components::theme::colors;
use crate::ui::state::ActiveScreen;

impl WalletApp {
    pub fn render_unload_screen(&mut self, ui: &mut egui::Ui, full_rect: egui::Rect, now: f64) {
        draw_screen_background(ui, full_rect, colors::UNLOAD_BACKGROUND);

        let ActiveScreen::Unload(screen) = &self.screen else {
            return;
        };
        let address = abbreviate_address(screen.entry.public_address());
        let loaded = screen
            .loaded_amount
            .map(|amount| format_amount(&self.config.currency_symbol, amount));
        let mut open_requested = false;

        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Anon. CBDC")
                    .font(egui::FontId::new(35.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_PRIMARY)
                    .strong(),
            );
        });

        ui.add_space(26.0);
        egui::Frame::none()
            .fill(colors::CARD_BACKGROUND)
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                draw_card_container(ui, |ui| {
                    ui.label(egui::RichText::new("Wallet Address").size(14.0).color(colors::TEXT_SECONDARY));
                    ui.label(egui::RichText::new(address).size(16.0).color(colors::TEXT_PRIMARY).monospace());
                });

                ui.add_space(20.0);

                draw_card_container(ui, |ui| {
                    ui.label(egui::RichText::new("Balance").size(14.0).color(colors::TEXT_SECONDARY));
                    ui.label(
                        egui::RichText::new("0 CBDC")
                            .size(24.0)
                            .color(colors::TEXT_PRIMARY)
                            .strong(),
                    );
                    if let Some(loaded) = &loaded {
                        ui.label(
                            egui::RichText::new(format!("Last load: {}", loaded))
                                .size(13.0)
                                .color(colors::TEXT_SECONDARY),
                        );
                    }
                });

                ui.add_space(30.0);

                ui.vertical_centered(|ui| {
                    if ui
                        .add(styled_button("Unload", colors::PRIMARY_BUTTON, egui::vec2(220.0, 50.0)))
                        .clicked()
                    {
                        open_requested = true;
                    }
                });
            });

        if open_requested {
            self.handle_amount_event(AmountEntryEvent::Open, now);
        }
    }
}
