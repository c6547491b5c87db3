// src/gui/app.rs
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use eframe::egui;
use tracing::{debug, info};

use crate::{
    config::{
        options::PageKind,
        state::AppState,
    },
    store::{self, DataSet},
};

use super::{
    components,
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> eframe::Result<()> {
    eframe::run_native(
        "Agenda Watch",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status line (progress sinks write here)
    pub status: Arc<Mutex<String>>,

    // per-page canonical data
    pub data: HashMap<PageKind, DataSet>,

    // rows of the current page's dataset that are on screen
    pub row_ix: Vec<usize>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut status = s!("Idle");

        // canonical cache(s) from disk
        let mut data: HashMap<PageKind, DataSet> = HashMap::new();
        for p in router::all_pages() {
            let k = p.kind();
            match store::load_dataset(&state.options.store_dir, k) {
                Ok(ds) if ds.is_empty() => debug!(?k, "cache is empty, skipping"),
                Ok(ds) => {
                    info!(?k, rows = ds.row_count(), headers = ds.header_count(), "cache loaded");
                    data.insert(k, ds);
                    status = s!("Loaded local data");
                }
                Err(e) => debug!(?k, "cache missing: {e}"),
            }
        }

        let kind = router::all_pages()[state.gui.current_page_index].kind();
        let out_path_text = state.options.export.out_path(kind).to_string_lossy().into_owned();

        let mut app = Self {
            state,
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(status)),
            data,
            row_ix: Vec::new(),
        };
        app.rebuild_view();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn current_data(&self) -> Option<&DataSet> {
        self.data.get(&self.current_page_kind())
    }

    /// Recompute which rows of the current page are on screen.
    pub fn rebuild_view(&mut self) {
        let page = self.current_page();
        self.row_ix = match self.data.get(&page.kind()) {
            Some(ds) => page.visible_rows(&self.state, ds),
            None => Vec::new(),
        };
    }

    /// Replace a page's data (after a job) and refresh the view.
    pub fn set_data(&mut self, kind: PageKind, ds: DataSet) {
        self.data.insert(kind, ds);
        self.rebuild_view();
    }

    /// Headers plus the on-screen rows of the current page, for Copy/Export.
    pub fn visible_dataset(&self) -> Option<DataSet> {
        let ds = self.current_data()?;
        Some(DataSet {
            headers: ds.headers.clone(),
            rows: self.row_ix.iter().filter_map(|&i| ds.rows.get(i).cloned()).collect(),
        })
    }

    /// Push the output text field into ExportOptions if the user edited it.
    pub fn apply_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            self.out_path_dirty = false;
        }
    }

    /// Refresh the output text field from ExportOptions unless the user is editing it.
    pub fn refresh_out_path_text(&mut self) {
        if !self.out_path_dirty {
            let kind = self.current_page_kind();
            self.out_path_text = self.state.options.export.out_path(kind).to_string_lossy().into_owned();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::action_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
