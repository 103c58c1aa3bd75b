// src/gui/app.rs
use eframe::egui;

use crate::{
    config::state::AppState,
    data::load::load_tournament,
    report::{ REPORT_TITLE, Report, Section },
};

use super::{
    components,
    pages::Page,
    progress::GuiProgress,
    router,
    theme,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), eframe::Error> {
    eframe::run_native(
        REPORT_TITLE,
        options,
        Box::new(|cc| {
            theme::apply(&cc.egui_ctx);
            Ok(Box::new(App::new(AppState::default())))
        }),
    )
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // computed once per (re)load
    pub report: Option<Report>,
    pub load_error: Option<String>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        let mut app = Self {
            state,
            report: None,
            load_error: None,
            out_path_text,
            out_path_dirty: false,
            status: s!("Idle"),
        };
        app.reload();
        app
    }

    /// Re-read both tables and rebuild every section. A load failure clears
    /// the report; the dashboard then shows the error instead of partial data.
    pub fn reload(&mut self) {
        let data = &self.state.options.data;
        logf!(
            "Load: matches={} deliveries={}",
            data.matches_path.display(),
            data.deliveries_path.display()
        );
        match load_tournament(data) {
            Ok(t) => {
                let mut prog = GuiProgress::new(&mut self.status);
                self.report = Some(Report::build_with(&t, &mut prog));
                self.load_error = None;
            }
            Err(e) => {
                loge!("Load: {}", e);
                self.report = None;
                self.status = s!("Load failed");
                self.load_error = Some(e.to_string());
            }
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Sections targeted by Copy / Export.
    pub fn export_sections(&self) -> Vec<&Section> {
        let Some(report) = &self.report else { return Vec::new() };
        if self.state.gui.export_all_tabs {
            report.sections.iter().collect()
        } else {
            report.group(self.current_page().group()).collect()
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title")
            .show_separator_line(false)
            .show(ctx, |ui| {
                components::banner::draw(ui);
            });

        egui::TopBottomPanel::bottom("export_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                components::export_bar::draw(ui, self);
                ui.add_space(4.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);
            ui.separator();
            components::section_view::draw_page(ui, self);
        });
    }
}
