// src/gui/components/data_table.rs
//
// Read-only table for one section. Sits inside the page's scroll area, so the
// table itself never scrolls vertically.

use eframe::egui::{ self, Align, Layout, RichText, TextWrapMode };
use egui_extras::{ Column, TableBuilder };

use crate::gui::theme;
use crate::table::Table;

const ROW_H: f32 = 18.0;

pub fn draw(ui: &mut egui::Ui, salt: &str, table: &Table) {
    if table.is_empty() {
        return;
    }
    let cols = table.ncols();
    let numeric = table.numeric_columns();

    ui.push_id(("section_table", salt), |ui| {
        let mut builder = TableBuilder::new(ui)
            .id_salt(("table_state", salt))
            .striped(true)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center));

        for ci in 0..cols {
            let col = if ci == 0 {
                Column::auto().at_least(140.0).resizable(true)
            } else {
                Column::auto().at_least(70.0).resizable(true)
            };
            builder = builder.column(col);
        }

        builder
            .header(ROW_H + 2.0, |mut header| {
                for h in &table.headers {
                    header.col(|ui| {
                        ui.label(RichText::new(h).strong().color(theme::HEADER));
                    });
                }
            })
            .body(|mut body| {
                for row in &table.rows {
                    body.row(ROW_H, |mut r| {
                        for ci in 0..cols {
                            let cell = row.get(ci).map(String::as_str).unwrap_or("");
                            let right = numeric.get(ci).copied().unwrap_or(false);
                            r.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if right {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                        ui.label(cell);
                                    });
                                } else {
                                    ui.label(cell);
                                }
                            });
                        }
                    });
                }
            });
    });
}
