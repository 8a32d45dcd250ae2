//! # Load Screen
//!
//! Renders the pending balance, the note carousel and the Load button.
//!
//! ## Gestures:
//! The note card is a drag target. Vertical movement is accumulated while
//! the pointer is held; on release the total is classified as a swipe up
//! (add the note), a swipe down (take it back) or ignored.
//!
//! Events are collected while rendering and applied afterwards, so the
//! screen state is never mutated while egui still borrows it.

use eframe::egui;
use shared::{format_amount, BalanceEvent};

use crate::ui::app_state::WalletApp;
use crate::ui::components::styling::{draw_screen_background, styled_button};
use crate::ui::components::theme::colors;
use crate::ui::state::ActiveScreen;

const NOTE_SIZE: egui::Vec2 = egui::vec2(190.0, 100.0);
const ARROW_SIZE: egui::Vec2 = egui::vec2(48.0, 48.0);

impl WalletApp {
    pub fn render_load_screen(&mut self, ui: &mut egui::Ui, full_rect: egui::Rect, now: f64) {
        draw_screen_background(ui, full_rect, colors::LOAD_BACKGROUND);

        let symbol = self.config.currency_symbol.clone();
        let ActiveScreen::Load(screen) = &mut self.screen else {
            return;
        };
        let mut events: Vec<BalanceEvent> = Vec::new();

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(
                egui::RichText::new(format!("Balance: {}", format_amount(&symbol, screen.state.balance)))
                    .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_WHITE)
                    .strong(),
            );

            ui.add_space(60.0);
            ui.label(egui::RichText::new("Swipe up to add").color(colors::TEXT_WHITE));
            ui.add_space(12.0);

            // Carousel row: previous arrow, note card, next arrow
            ui.horizontal(|ui| {
                let spacing = ui.spacing().item_spacing.x;
                let row_width = ARROW_SIZE.x * 2.0 + NOTE_SIZE.x + spacing * 2.0;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

                if ui.add(arrow_button("⬅")).on_hover_text("Smaller note").clicked() {
                    events.push(BalanceEvent::SelectPrevious);
                }

                let (rect, response) = ui.allocate_exact_size(NOTE_SIZE, egui::Sense::drag());
                let card_rect = rect.translate(egui::vec2(0.0, screen.animation.offset_at(now)));
                draw_note_card(ui, card_rect, &format_amount(&symbol, screen.selected_note()));

                if response.dragged() {
                    screen.drag_moved(response.drag_delta().y);
                }
                if response.drag_stopped() {
                    if let Some(event) = screen.drag_released() {
                        events.push(event);
                    }
                }
                if screen.is_swiping() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
                } else if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
                }

                if ui.add(arrow_button("➡")).on_hover_text("Larger note").clicked() {
                    events.push(BalanceEvent::SelectNext);
                }
            });

            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(format_amount(&symbol, screen.selected_note()))
                    .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_WHITE)
                    .strong(),
            );
            ui.add_space(12.0);
            ui.label(egui::RichText::new("Swipe down to deduct").color(colors::TEXT_WHITE));
        });

        // Load button pinned to the bottom
        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            ui.add_space(30.0);
            if ui
                .add(styled_button("Load", colors::PRIMARY_BUTTON, egui::vec2(220.0, 50.0)))
                .clicked()
            {
                events.push(BalanceEvent::RequestConfirmation);
            }
        });

        for event in events {
            self.handle_balance_event(event, now);
        }
    }
}

fn arrow_button(glyph: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(glyph.to_string())
            .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
            .color(colors::TEXT_PRIMARY),
    )
    .fill(colors::ARROW_FILL)
    .stroke(egui::Stroke::new(1.5, colors::HOVER_BORDER))
    .rounding(egui::Rounding::same(24.0))
    .min_size(ARROW_SIZE)
}

/// Banknote-style card showing the note value
fn draw_note_card(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    let painter = ui.painter();
    painter.rect(
        rect,
        egui::Rounding::same(8.0),
        colors::NOTE_FACE,
        egui::Stroke::new(2.0, colors::NOTE_BORDER),
    );
    painter.rect_stroke(
        rect.shrink(8.0),
        egui::Rounding::same(4.0),
        egui::Stroke::new(1.0, colors::NOTE_BORDER),
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::new(34.0, egui::FontFamily::Proportional),
        colors::TEXT_PRIMARY,
    );
}
