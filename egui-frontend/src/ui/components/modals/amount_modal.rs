//! # Amount Modal
//!
//! Amount entry dialog of the Unload screen. The text field only keeps
//! digits and a single decimal point, like a numeric keypad would.

use eframe::egui;
use shared::amount_entry::sanitize_numeric_input;
use shared::AmountEntryEvent;

use super::modal_frame::render_modal_frame;
use crate::ui::app_state::WalletApp;
use crate::ui::components::styling::styled_button;
use crate::ui::components::theme::colors;
use crate::ui::state::ActiveScreen;

impl WalletApp {
    pub fn render_amount_modal(&mut self, ctx: &egui::Context, now: f64) {
        let ActiveScreen::Unload(screen) = &self.screen else {
            return;
        };
        if !screen.state.modal_visible {
            return;
        }
        let mut amount = screen.state.amount.clone();
        let enabled = !self.alerts.is_blocking();

        let mut events: Vec<AmountEntryEvent> = Vec::new();
        render_modal_frame(
            ctx,
            "amount_modal",
            egui::Order::Foreground,
            colors::PRIMARY_BUTTON,
            egui::vec2(320.0, 240.0),
            |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    ui.add_space(5.0);
                    ui.label(
                        egui::RichText::new("Enter Amount")
                            .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.add_space(15.0);

                    let response = ui.add(
                        egui::TextEdit::singleline(&mut amount)
                            .hint_text("Enter amount")
                            .desired_width(260.0)
                            .font(egui::FontId::new(16.0, egui::FontFamily::Proportional)),
                    );
                    if response.changed() {
                        events.push(AmountEntryEvent::InputChanged(sanitize_numeric_input(&amount)));
                    }

                    ui.add_space(15.0);
                    if ui
                        .add(styled_button("Submit", colors::PRIMARY_BUTTON, egui::vec2(260.0, 40.0)))
                        .clicked()
                    {
                        events.push(AmountEntryEvent::Submit);
                    }
                    if ui
                        .add(styled_button("Cancel", colors::SECONDARY_BUTTON, egui::vec2(260.0, 40.0)))
                        .clicked()
                    {
                        events.push(AmountEntryEvent::Cancel);
                    }
                });
            },
        );

        if enabled && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(AmountEntryEvent::Cancel);
        }
        for event in events {
            self.handle_amount_event(event, now);
        }
    }
}
