// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself. Switching rebuilds
// the visible rows and, unless the user typed a path, points the output field
// at the new page's default file.

use eframe::egui;
use tracing::info;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();
        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;
            let label = match app.data.get(&page.kind()) {
                Some(ds) => format!("{} ({})", page.title(), ds.row_count()),
                None => s!(page.title()),
            };

            if ui.selectable_label(selected, label).clicked() && !selected {
                let prev = app.current_page_kind();
                app.set_current_index(idx);
                info!("UI: tab switch {:?} → {:?}", prev, page.kind());

                app.rebuild_view();
                if !app.state.options.export.has_custom_path() {
                    app.refresh_out_path_text();
                }
            }
        }
    });
}
