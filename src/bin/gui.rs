// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use agenda_watch::{
    config::{consts::CONFIG_FILE, options::AppOptions, state::AppState},
    gui, log,
};
use eframe::egui::ViewportBuilder;

fn main() {
    let options = match AppOptions::load(Path::new(CONFIG_FILE)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = log::init(&log::default_log_path(&options.store_dir)) {
        eprintln!("Log setup failed: {e}");
    }

    let state = AppState::new(options);
    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Agenda Watch")
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
