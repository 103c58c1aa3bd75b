// src/gui/components/banner.rs
use eframe::egui::{ self, Frame, Margin, RichText };

use crate::gui::theme::{ TITLE_BG, TITLE_FG };
use crate::report::REPORT_TITLE;

pub fn draw(ui: &mut egui::Ui) {
    Frame::new()
        .fill(TITLE_BG)
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(REPORT_TITLE).size(24.0).strong().color(TITLE_FG));
            });
        });
}
