// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::{ IconData, ViewportBuilder };
use image::{ Rgba, RgbaImage };
use t20_insights::config::consts::{ LOG_FILE, STORE_DIR };
use t20_insights::config::state::GuiState;
use t20_insights::{ gui, log };

const ICON_SIZE: u32 = 64;

/// A red ball with a white seam, painted at startup.
fn app_icon() -> IconData {
    let c = (ICON_SIZE as f32 - 1.0) / 2.0;
    let r = c - 1.0;
    let rgba = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let dx = x as f32 - c;
        let dy = y as f32 - c;
        let d = (dx * dx + dy * dy).sqrt();
        if d > r {
            Rgba([0, 0, 0, 0])
        } else if (dx - dy * 0.15).abs() < 1.6 && d < r - 3.0 {
            Rgba([0xF5, 0xF0, 0xE6, 0xFF])
        } else {
            let shade = (1.0 - d / r * 0.35) * 255.0;
            Rgba([shade as u8, 0x22, 0x1E, 0xFF])
        }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let log_path = Path::new(STORE_DIR).join(LOG_FILE);
    if let Err(e) = log::init_file(&log_path) {
        eprintln!("Logging disabled ({}): {e}", log_path.display());
    }

    let gui_defaults = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([gui_defaults.window_w as f32, gui_defaults.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
