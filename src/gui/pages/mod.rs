// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::{options::PageKind, state::AppState},
    store::DataSet,
};

pub mod agendas;
pub mod alerts;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Headers shown before any data exists.
    fn default_headers(&self) -> &'static [&'static str];

    /// Optional: per-page column widths (in px-ish)
    fn preferred_column_widths(&self) -> Option<&'static [usize]> { None }

    /// Columns drawn centered; everything else is left-aligned text.
    fn numeric_columns(&self) -> &'static [usize] { &[] }

    /// Optional per-cell highlight.
    fn cell_color(&self, _col: usize, _cell: &str) -> Option<egui::Color32> { None }

    /// Draw page-specific controls above the table. Returns true when the
    /// visible rows may have changed.
    fn draw_controls(&self, _ui: &mut egui::Ui, _state: &mut AppState) -> bool { false }

    /// Indices of the rows to show (and to copy/export). Default: all.
    fn visible_rows(&self, _state: &AppState, ds: &DataSet) -> Vec<usize> {
        (0..ds.rows.len()).collect()
    }
}
