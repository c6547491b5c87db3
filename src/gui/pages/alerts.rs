// src/gui/pages/alerts.rs
use eframe::egui;

use crate::{config::{consts::NOT_POSTED, options::PageKind}, evaluate::ALERT_HEADERS};

pub struct AlertsPage;
pub static PAGE: AlertsPage = AlertsPage;

impl super::Page for AlertsPage {
    fn title(&self) -> &'static str { "Alerts" }
    fn kind(&self) -> PageKind { PageKind::Alerts }

    fn default_headers(&self) -> &'static [&'static str] { &ALERT_HEADERS }

    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        Some(&[420, 110, 170, 140])
    }

    fn numeric_columns(&self) -> &'static [usize] { &[1, 3] }

    fn cell_color(&self, col: usize, cell: &str) -> Option<egui::Color32> {
        match col {
            2 if cell == NOT_POSTED => Some(egui::Color32::from_rgb(0xDC, 0x61, 0x49)),
            // posted after the assumed start
            3 if cell.parse::<f64>().is_ok_and(|h| h > 0.0) => Some(egui::Color32::from_rgb(0xFF, 0xA5, 0x00)),
            _ => None,
        }
    }
}
