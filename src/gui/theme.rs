// src/gui/theme.rs
//! Dark dashboard palette.
use eframe::egui::{ self, Color32, Stroke };

pub const TITLE_BG: Color32 = Color32::from_rgb(0xF0, 0xC8, 0x1E);
pub const TITLE_FG: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);
pub const HEADER: Color32 = Color32::from_rgb(0x87, 0xCE, 0xEB);
pub const BAR: Color32 = Color32::from_rgb(0x4C, 0x9B, 0xE8);
pub const LINE: Color32 = Color32::from_rgb(0x2E, 0xCC, 0x71);
pub const POINT: Color32 = Color32::from_rgb(0xE6, 0x7E, 0x22);
pub const AXIS: Color32 = Color32::from_gray(140);
pub const GRID: Color32 = Color32::from_gray(55);
pub const MUTED: Color32 = Color32::from_gray(160);
pub const ERROR: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = Color32::from_rgb(0x1B, 0x1E, 0x23);
    visuals.window_fill = visuals.panel_fill;
    visuals.extreme_bg_color = Color32::from_rgb(0x14, 0x16, 0x1A);
    visuals.selection.bg_fill = Color32::from_rgb(0x2F, 0x5D, 0x8A);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, GRID);
    ctx.set_visuals(visuals);
}
