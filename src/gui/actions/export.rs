// src/gui/actions/export.rs
use crate::{ gui::app::App, error::ExportError, file };

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let result = {
        let sections = app.export_sections();
        let export = &app.state.options.export;
        logf!(
            "Export: Begin sections={}, type={:?}, format={:?}",
            sections.len(),
            export.export_type,
            export.format
        );
        file::export_sections(export, &sections)
    };

    let status_msg = match result {
        Ok(written) => match written.last() {
            Some(last) => {
                logf!("Export: OK count={} last={}", written.len(), last.display());
                format!("Exported {} file(s). Last: {}", written.len(), last.display())
            }
            None => s!("Nothing to export"),
        },
        Err(ExportError::Empty) => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    // mutate app only after the report borrows are gone
    app.status(status_msg);
}
