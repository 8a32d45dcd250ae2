//! # Alert Dialog
//!
//! Blocking, single-button alert. Drawn above every other layer; the
//! screens and modals below ignore input until "OK" (or Enter) is pressed.

use eframe::egui;

use super::modal_frame::render_modal_frame;
use crate::ui::app_state::WalletApp;
use crate::ui::components::styling::styled_button;
use crate::ui::components::theme::{colors, CURRENT_THEME};

impl WalletApp {
    pub fn render_alert_dialog(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.alerts.current() else {
            return;
        };
        let accent = CURRENT_THEME.alert_accent(alert.kind);
        let title = alert.title.clone();
        let message = alert.message.clone();

        let acknowledged = render_modal_frame(
            ctx,
            "alert_dialog",
            egui::Order::Tooltip,
            accent,
            egui::vec2(300.0, 150.0),
            |ui| {
                ui.label(
                    egui::RichText::new(title)
                        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                        .color(accent)
                        .strong(),
                );
                ui.add_space(8.0);
                ui.label(egui::RichText::new(message).color(colors::TEXT_PRIMARY));
                ui.add_space(15.0);
                ui.add(styled_button("OK", accent, egui::vec2(100.0, 36.0))).clicked()
            },
        );

        if acknowledged || ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.acknowledge_alert();
        }
    }
}
