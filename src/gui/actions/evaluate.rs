// src/gui/actions/evaluate.rs
use tracing::{error, info};

use crate::{
    config::options::PageKind,
    core::dates,
    gui::{app::App, progress::GuiProgress, router},
    runner,
};

/// Evaluate the agendas in memory against local now; results land on the Alerts tab.
pub fn evaluate(app: &mut App) {
    let Some(agendas) = app.data.get(&PageKind::Agendas).cloned() else {
        app.status("Nothing to evaluate (scrape first)");
        return;
    };

    let now = dates::local_now();
    info!("Evaluate: begin rows={} now={}", agendas.row_count(), now);

    let mut prog = GuiProgress::new(app.status.clone());
    let report = app.state.options.report.path.clone();

    match runner::evaluate_dataset(&app.state.options, &agendas, None, Some(report.as_path()), now, Some(&mut prog)) {
        Ok(summary) => {
            let n = summary.data.row_count();
            app.set_current_index(router::index_of(PageKind::Alerts));
            app.set_data(PageKind::Alerts, summary.data);
            app.refresh_out_path_text();
            app.status(format!("{n} potential violation(s); report at {}", report.display()));
        }
        Err(e) => {
            error!("Evaluate: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
