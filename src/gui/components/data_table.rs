// src/gui/components/data_table.rs
//
// Draws the live table for the current page. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let page = app.current_page();
    let kind = page.kind();
    let ds = app.current_data();

    // Prefer live headers; fall back to the page's known headers.
    let headers: Vec<String> = ds
        .and_then(|d| d.headers.clone())
        .unwrap_or_else(|| page.default_headers().iter().map(|h| s!(*h)).collect());
    let cols = headers.len();

    let widths: Vec<f32> = match page.preferred_column_widths() {
        Some(ws) if ws.len() == cols => ws.iter().map(|&w| w as f32).collect(),
        _ => vec![120.0; cols],
    };
    let numeric = page.numeric_columns();

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("inner_table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("table_state", kind));
            for &w in &widths {
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for (ci, h) in headers.iter().enumerate() {
                        header.col(|ui| {
                            let text = RichText::new(h).strong();
                            if numeric.contains(&ci) {
                                ui.centered_and_justified(|ui| { ui.label(text); });
                            } else {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.row_ix.len(), |mut row| {
                        let Some(data) = ds.and_then(|d| app.row_ix.get(row.index()).and_then(|&i| d.rows.get(i)))
                        else { return };

                        for ci in 0..cols {
                            let cell = data.get(ci).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let mut rt = RichText::new(cell);
                                if let Some(c) = page.cell_color(ci, cell) {
                                    rt = rt.color(c);
                                }
                                if numeric.contains(&ci) {
                                    ui.centered_and_justified(|ui| { ui.label(rt); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                                }
                            });
                        }
                    });
                });
        });
}
