//! # Styling Module
//!
//! Global egui style plus the small drawing helpers shared by both screens.
//!
//! ## Key Functions:
//! - `setup_wallet_style()` - Configure global egui styling
//! - `draw_screen_background()` - Fill a screen with its solid background
//! - `draw_card_container()` - Rounded white card with a light border
//! - `styled_button()` - Filled, rounded button used for every action

use eframe::egui;
use egui::Color32;

use super::theme::colors;

/// Setup the wallet's UI styling for the entire application
pub fn setup_wallet_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        // Panels are transparent so each screen paints its own background
        style.visuals.window_fill = Color32::WHITE;
        style.visuals.panel_fill = Color32::TRANSPARENT;
        style.visuals.button_frame = true;

        // In egui 0.28 text edits use extreme_bg_color
        style.visuals.extreme_bg_color = Color32::from_rgb(248, 248, 248);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(28.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(18.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Fill the whole screen rect with a solid color
pub fn draw_screen_background(ui: &mut egui::Ui, rect: egui::Rect, color: Color32) {
    ui.painter().rect_filled(rect, egui::Rounding::ZERO, color);
}

/// Rounded card with a subtle border, used for the address and balance blocks
pub fn draw_card_container<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(15.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Filled, rounded action button with white text
pub fn styled_button(text: &str, fill: Color32, min_size: egui::Vec2) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_string())
            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
            .color(colors::TEXT_WHITE)
            .strong(),
    )
    .fill(fill)
    .stroke(egui::Stroke::new(1.5, fill))
    .rounding(egui::Rounding::same(10.0))
    .min_size(min_size)
}
