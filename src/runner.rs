// src/runner.rs
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::{
    config::options::{AppOptions, ExportFormat, PageKind},
    error::Result,
    evaluate,
    file,
    progress::Progress,
    report,
    scrape,
    store::{self, DataSet},
    table,
};

/// Where the listing page comes from.
#[derive(Clone, Debug)]
pub enum Source {
    /// `scrape.url` over HTTPS.
    Remote,
    /// A page saved to disk.
    File(PathBuf),
}

/// What a job produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub data: DataSet,
    pub files_written: Vec<PathBuf>,
}

/// Fetch (or read) and extract the listing, cache the records, and export
/// them to `out` when given.
pub fn run_scrape(
    opts: &AppOptions,
    source: &Source,
    out: Option<&Path>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let data = match source {
        Source::Remote => scrape::collect_agendas(&opts.scrape, reborrow(&mut progress))?,
        Source::File(path) => scrape::extract_file(path, reborrow(&mut progress))?,
    };

    cache(opts, PageKind::Agendas, &data);

    let mut files_written = Vec::new();
    if let Some(path) = out {
        file::write_dataset(path, opts.export.format, opts.export.include_headers, &data)?;
        files_written.push(path.to_path_buf());
    }
    if let Some(p) = progress.as_mut() {
        p.log(&format!("{} agendas", data.row_count()));
    }
    Ok(RunSummary { data, files_written })
}

/// Evaluate a saved agenda table (`input`) or, when absent, the cached one.
pub fn run_evaluate(
    opts: &AppOptions,
    input: Option<&Path>,
    out: Option<&Path>,
    report_path: Option<&Path>,
    now: NaiveDateTime,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let agendas = match input {
        Some(path) => table::read_table_path(path, ExportFormat::from_path(path).delim())?,
        None => store::load_dataset(&opts.store_dir, PageKind::Agendas)?,
    };
    evaluate_dataset(opts, &agendas, out, report_path, now, progress)
}

/// Scrape, then evaluate the fresh records without a round-trip through disk.
pub fn run_all(
    opts: &AppOptions,
    source: &Source,
    agendas_out: Option<&Path>,
    alerts_out: Option<&Path>,
    report_path: Option<&Path>,
    now: NaiveDateTime,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let scraped = run_scrape(opts, source, agendas_out, reborrow(&mut progress))?;
    let mut summary = evaluate_dataset(opts, &scraped.data, alerts_out, report_path, now, progress)?;

    let mut files_written = scraped.files_written;
    files_written.append(&mut summary.files_written);
    summary.files_written = files_written;
    Ok(summary)
}

/// Evaluate, cache the alerts, then export and report as requested.
pub fn evaluate_dataset(
    opts: &AppOptions,
    agendas: &DataSet,
    out: Option<&Path>,
    report_path: Option<&Path>,
    now: NaiveDateTime,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(1);
        p.log(&format!("Evaluating {} agendas…", agendas.row_count()));
    }

    let evaluation = evaluate::evaluate(agendas, now, &opts.evaluate)?;
    let data = evaluation.to_dataset();
    cache(opts, PageKind::Alerts, &data);

    let mut files_written = Vec::new();
    if let Some(path) = out {
        file::write_dataset(path, opts.export.format, opts.export.include_headers, &data)?;
        files_written.push(path.to_path_buf());
    }
    if let Some(path) = report_path {
        report::write_report(path, &opts.report.subject, opts.evaluate.assumed_start, &data)?;
        files_written.push(path.to_path_buf());
    }

    info!(alerts = data.row_count(), files = files_written.len(), "evaluation finished");
    if let Some(p) = progress.as_deref_mut() {
        p.step_done(&format!("{} potential violations", data.row_count()));
        p.finish();
    }
    Ok(RunSummary { data, files_written })
}

/// Shorter-lived handle on the sink so it can be lent to a sub-job and used again after.
fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    progress.as_deref_mut().map(|p| p as &mut dyn Progress)
}

/// Cache failures are logged, never fatal.
fn cache(opts: &AppOptions, kind: PageKind, data: &DataSet) {
    if let Err(e) = store::save_dataset(&opts.store_dir, kind, data) {
        warn!(?kind, "could not cache dataset: {e}");
    }
}
