//! Common modal chrome: dimmed full-screen backdrop plus a centered white
//! frame with a colored border.

use eframe::egui;

use crate::ui::components::theme::colors;

pub fn render_modal_frame<R>(
    ctx: &egui::Context,
    id: &str,
    order: egui::Order,
    accent: egui::Color32,
    size: egui::Vec2,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Area::new(egui::Id::new(id))
        .order(order)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            let screen_rect = ctx.screen_rect();
            ui.painter()
                .rect_filled(screen_rect, egui::Rounding::ZERO, colors::MODAL_BACKDROP);

            ui.allocate_ui_at_rect(screen_rect, |ui| {
                ui.centered_and_justified(|ui| {
                    egui::Frame::window(&ui.style())
                        .fill(egui::Color32::WHITE)
                        .stroke(egui::Stroke::new(3.0, accent))
                        .rounding(egui::Rounding::same(15.0))
                        .inner_margin(egui::Margin::same(20.0))
                        .show(ui, |ui| {
                            ui.set_min_size(size);
                            ui.set_max_size(size);
                            ui.vertical_centered(add_contents).inner
                        })
                        .inner
                })
                .inner
            })
            .inner
        })
        .inner
}
