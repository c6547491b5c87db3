// src/gui/actions/copy.rs
use eframe::egui;
use tracing::{debug, error, info};

use crate::{gui::app::App, table};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(ds) = app.visible_dataset().filter(|ds| !ds.is_empty()) else {
        app.status("Nothing to copy");
        debug!("Copy: clicked, but there's nothing to copy");
        return;
    };

    let export = &app.state.options.export;
    match table::to_export_string(&ds, export.include_headers, export.format.delim()) {
        Ok(txt) => {
            info!("Copy: page={:?}, rows={}", app.current_page_kind(), ds.row_count());
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            error!("Copy: {e}");
            app.status(format!("Copy error: {e}"));
        }
    }
}
