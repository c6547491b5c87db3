// src/gui/components/action_bar.rs
//
// Export settings, the job buttons and the status line.

use eframe::egui;
use tracing::{debug, info};

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut refresh_path = false;

    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        ui.label("Format:");
        let prev_fmt = export.format;
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev_fmt {
            info!("UI: export format → {:?}", export.format);
            refresh_path = !export.has_custom_path();
        }

        if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
            info!("UI: include_headers → {}", export.include_headers);
        }

        ui.separator();

        let page = app.current_page();
        if page.draw_controls(ui, &mut app.state) {
            app.rebuild_view();
        }
    });

    if refresh_path {
        app.refresh_out_path_text();
    }

    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(420.0))
            .changed()
        {
            app.out_path_dirty = true;
            debug!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        if ui
            .add(egui::Button::new(egui::RichText::new("SCRAPE").color(black).strong()).fill(red))
            .clicked()
        {
            actions::scrape(app);
        }

        let amber = egui::Color32::from_rgb(0xF0, 0xD2, 0x3C);
        if ui
            .add(egui::Button::new(egui::RichText::new("EVALUATE").color(black).strong()).fill(amber))
            .clicked()
        {
            actions::evaluate(app);
        }

        ui.separator();
        ui.label(app.status_text());
    });
}
