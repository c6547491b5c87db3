// src/gui/actions/scrape.rs
use tracing::{error, info};

use crate::{
    config::options::PageKind,
    gui::{app::App, progress::GuiProgress, router},
    runner::{self, Source},
};

/// Fetch + extract the agenda center; results land on the Agendas tab.
pub fn scrape(app: &mut App) {
    info!("Scrape: begin url={}", app.state.options.scrape.url);

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the scrape happens ←
    match runner::run_scrape(&app.state.options, &Source::Remote, None, Some(&mut prog)) {
        Ok(summary) => {
            let n = summary.data.row_count();
            app.set_current_index(router::index_of(PageKind::Agendas));
            app.set_data(PageKind::Agendas, summary.data);
            app.refresh_out_path_text();
            app.status(format!("Scraped {n} agenda(s)"));
        }
        Err(e) => {
            error!("Scrape: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
