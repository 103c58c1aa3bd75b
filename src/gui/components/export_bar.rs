// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    gui::{ actions, app::App },
    config::options::{
        ExportFormat,
        ExportType::{ PerMetric, SingleFile },
    },
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Format + Include headers + scope ---
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.label("Format:");
        for fmt in ExportFormat::ALL {
            ui.selectable_value(&mut export.format, fmt, fmt.label());
        }
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        ui.separator();
        if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        let mut single = matches!(export.export_type, SingleFile);
        if ui.checkbox(&mut single, "All sections in one file").changed() {
            export.export_type = if single { SingleFile } else { PerMetric };
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
            logf!("UI: export_type → {:?}", export.export_type);
        }

        let gui = &mut app.state.gui;
        if ui.checkbox(&mut gui.export_all_tabs, "All tabs").changed() {
            logf!("UI: export_all_tabs → {}", gui.export_all_tabs);
        }
        ui.checkbox(&mut gui.show_chart_tables, "Tables under charts");
    });

    // --- Output field + actions ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(360.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
        if ui.button("Reload").clicked() {
            logf!("UI: Reload");
            app.reload();
        }

        ui.separator();
        ui.label(app.status.as_str());
    });
}
