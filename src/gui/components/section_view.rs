// src/gui/components/section_view.rs
//
// One tab = heading, optional blurb, then every section of the tab's group.

use eframe::egui::{ self, Frame, RichText };

use crate::gui::{ app::App, theme };
use crate::report::{ Plot, Section };

use super::{ charts, data_table };

pub fn draw_page(ui: &mut egui::Ui, app: &App) {
    if let Some(err) = &app.load_error {
        ui.add_space(12.0);
        ui.colored_label(theme::ERROR, format!("Could not load data: {err}"));
        ui.label("Check the data paths and press Reload.");
        return;
    }
    let Some(report) = &app.report else {
        ui.label("No data loaded");
        return;
    };

    let page = app.current_page();
    let show_tables = app.state.gui.show_chart_tables;

    egui::ScrollArea::vertical()
        .id_salt(("page", page.label()))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.heading(page.group().heading());
            if let Some(blurb) = page.blurb() {
                ui.label(RichText::new(blurb).color(theme::MUTED));
            }
            for section in report.group(page.group()) {
                ui.add_space(10.0);
                draw(ui, section, show_tables);
            }
            ui.add_space(10.0);
        });
}

pub fn draw(ui: &mut egui::Ui, section: &Section, show_tables: bool) {
    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(section.heading()).strong().size(16.0).color(theme::HEADER));
        for line in &section.summary {
            ui.label(line);
        }

        match &section.plot {
            Plot::None => data_table::draw(ui, section.id, &section.table),
            plot => {
                ui.add_space(4.0);
                charts::draw(ui, plot);
                if show_tables {
                    ui.add_space(4.0);
                    data_table::draw(ui, section.id, &section.table);
                }
            }
        }
    });
}
