// src/gui/pages/agendas.rs
use eframe::egui;

use crate::{
    config::{consts::NOT_POSTED, options::PageKind, state::AppState},
    record::AGENDA_HEADERS,
    store::DataSet,
};

pub struct AgendasPage;
pub static PAGE: AgendasPage = AgendasPage;

const POSTED_COL: usize = 3;

impl super::Page for AgendasPage {
    fn title(&self) -> &'static str { "Agendas" }
    fn kind(&self) -> PageKind { PageKind::Agendas }

    fn default_headers(&self) -> &'static [&'static str] { &AGENDA_HEADERS }

    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        Some(&[220, 420, 110, 200])
    }

    fn numeric_columns(&self) -> &'static [usize] { &[2] }

    fn cell_color(&self, col: usize, cell: &str) -> Option<egui::Color32> {
        if col != POSTED_COL { return None; }
        if cell == NOT_POSTED {
            Some(egui::Color32::from_rgb(0xDC, 0x61, 0x49))
        } else if cell.starts_with(crate::config::consts::AMENDED_PREFIX) {
            Some(egui::Color32::from_rgb(0xF0, 0xD2, 0x3C))
        } else {
            None
        }
    }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        ui.checkbox(&mut state.gui.agendas_only_not_posted, "Only NOT POSTED").changed()
    }

    fn visible_rows(&self, state: &AppState, ds: &DataSet) -> Vec<usize> {
        let only_missing = state.gui.agendas_only_not_posted;
        ds.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| !only_missing || r.get(POSTED_COL).is_some_and(|c| c == NOT_POSTED))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::pages::Page;

    #[test]
    fn not_posted_filter_keeps_only_sentinel_rows() {
        let ds = DataSet::new(
            AGENDA_HEADERS.iter().map(|h| s!(*h)).collect(),
            vec![
                vec![s!("C"), s!("A"), s!("Jun 10, 2024"), s!("Jun 7, 2024 3:15 PM")],
                vec![s!("C"), s!("B"), s!("Jun 20, 2024"), s!("NOT POSTED")],
            ],
        );
        let mut state = AppState::default();
        assert_eq!(PAGE.visible_rows(&state, &ds), vec![0, 1]);
        state.gui.agendas_only_not_posted = true;
        assert_eq!(PAGE.visible_rows(&state, &ds), vec![1]);
    }
}
