//! # App Coordinator Module
//!
//! Main update loop of the wallet.
//!
//! ## Application Flow:
//! 1. Apply the wallet style
//! 2. Render the mounted screen (input disabled while an alert is shown)
//! 3. Render the screen's modal, if open
//! 4. Render the front alert on top of everything
//! 5. Keep repainting while the note animation runs

use eframe::egui;

use crate::ui::app_state::WalletApp;
use crate::ui::state::ActiveScreen;
use crate::ui::*;

impl eframe::App for WalletApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_wallet_style(ctx);

        let now = ctx.input(|i| i.time);
        let input_enabled = !self.alerts.is_blocking();

        egui::CentralPanel::default().show(ctx, |ui| {
            let full_rect = ui.available_rect_before_wrap();
            ui.add_enabled_ui(input_enabled, |ui| match self.screen {
                ActiveScreen::Load(_) => self.render_load_screen(ui, full_rect, now),
                ActiveScreen::Unload(_) => self.render_unload_screen(ui, full_rect, now),
            });
        });

        // Modals
        match self.screen {
            ActiveScreen::Load(_) => self.render_transfer_modal(ctx, now),
            ActiveScreen::Unload(_) => self.render_amount_modal(ctx, now),
        }
        self.render_alert_dialog(ctx);

        // Animation is sampled from the clock; keep frames coming until it settles
        if let ActiveScreen::Load(screen) = &mut self.screen {
            if screen.animation.is_active(now) {
                ctx.request_repaint();
            } else {
                screen.animation.settle(now);
            }
        }
    }
}
