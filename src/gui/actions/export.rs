// src/gui/actions/export.rs
use tracing::{debug, error, info};

use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.apply_out_path();

    let kind = app.current_page_kind();
    let Some(ds) = app.visible_dataset().filter(|ds| !ds.is_empty()) else {
        debug!("Export: clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    };

    let status_msg = match file::write_export(&app.state.options.export, kind, &ds) {
        Ok(path) => {
            info!("Export: OK page={:?} rows={} → {}", kind, ds.row_count(), path.display());
            format!("Exported {} row(s) to {}", ds.row_count(), path.display())
        }
        Err(e) => {
            error!("Export: {e}");
            format!("Export error: {e}")
        }
    };

    app.refresh_out_path_text();
    app.status(status_msg);
}
