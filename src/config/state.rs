// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Draw the data table under each chart, not only for table-style metrics
    pub show_chart_tables: bool,

    /// Export / Copy take every section instead of the active tab's
    pub export_all_tabs: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1280,
            window_h: 860,
            current_page_index: 0,
            show_chart_tables: false,
            export_all_tabs: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
