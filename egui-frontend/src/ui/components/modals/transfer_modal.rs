//! # Transfer Modal
//!
//! Confirmation dialog of the Load screen: shows the pending balance and
//! offers Submit or Cancel. Escape cancels.

use eframe::egui;
use shared::BalanceEvent;

use super::modal_frame::render_modal_frame;
use crate::ui::app_state::WalletApp;
use crate::ui::components::styling::styled_button;
use crate::ui::components::theme::colors;
use crate::ui::state::ActiveScreen;

impl WalletApp {
    pub fn render_transfer_modal(&mut self, ctx: &egui::Context, now: f64) {
        let ActiveScreen::Load(screen) = &self.screen else {
            return;
        };
        if !screen.state.modal_visible {
            return;
        }
        let title = screen.adjuster.confirmation_title(&screen.state);
        let enabled = !self.alerts.is_blocking();

        let mut event = None;
        render_modal_frame(
            ctx,
            "transfer_modal",
            egui::Order::Foreground,
            colors::PRIMARY_BUTTON,
            egui::vec2(340.0, 160.0),
            |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new(title)
                            .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.add_space(25.0);

                    ui.horizontal(|ui| {
                        ui.add_space(20.0);
                        if ui
                            .add(styled_button("Submit", colors::PRIMARY_BUTTON, egui::vec2(130.0, 40.0)))
                            .clicked()
                        {
                            event = Some(BalanceEvent::Confirm);
                        }
                        ui.add_space(20.0);
                        if ui
                            .add(styled_button("Cancel", colors::SECONDARY_BUTTON, egui::vec2(130.0, 40.0)))
                            .clicked()
                        {
                            event = Some(BalanceEvent::Cancel);
                        }
                    });
                });
            },
        );

        if enabled && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            event = Some(BalanceEvent::Cancel);
        }
        if let Some(event) = event {
            self.handle_balance_event(event, now);
        }
    }
}
