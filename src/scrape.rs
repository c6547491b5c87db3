// src/scrape.rs
use std::{fs, path::Path};

use tracing::info;

use crate::{
    config::options::ScrapeOptions,
    core::net,
    error::{Error, Result},
    progress::Progress,
    specs::agenda_center,
    store::{self, DataSet},
};

/// Fetch the listing page and extract it (no persistence).
pub fn collect_agendas(
    scrape: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<DataSet> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(2);
        p.log(&format!("Fetching {}…", scrape.url));
    }

    let markup = net::http_get(scrape)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("page fetched");
    }

    let ds = extract_markup(&markup)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done(&format!("{} agendas extracted", ds.row_count()));
        p.finish();
    }
    Ok(ds)
}

/// Extract from a page saved to disk.
pub fn extract_file(path: &Path, mut progress: Option<&mut dyn Progress>) -> Result<DataSet> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(1);
        p.log(&format!("Reading {}…", path.display()));
    }

    let markup = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::MissingInput(format!("{} not found", path.display())),
        _ => Error::Io(e),
    })?;

    let ds = extract_markup(&markup)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done(&format!("{} agendas extracted", ds.row_count()));
        p.finish();
    }
    Ok(ds)
}

fn extract_markup(markup: &str) -> Result<DataSet> {
    let agendas = agenda_center::extract(markup)?;
    let sorted = agendas.is_date_sorted();
    let ds = store::records_to_dataset(agendas);
    info!(records = ds.row_count(), sorted, "agendas collected");
    Ok(ds)
}
