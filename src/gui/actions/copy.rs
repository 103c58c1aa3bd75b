// src/gui/actions/copy.rs
use eframe::egui;
use crate::{ gui::app::App, file };

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let result = {
        let sections = app.export_sections();
        if sections.is_empty() {
            None
        } else {
            logf!("Copy: sections={}, format={:?}", sections.len(), app.state.options.export.format);
            Some(file::to_export_string(&app.state.options.export, &sections))
        }
    };

    match result {
        None => {
            logd!("Copy: Clicked, but there's nothing to copy");
            app.status("Nothing to copy");
        }
        Some(Ok(txt)) => {
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Some(Err(e)) => {
            loge!("Copy: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
