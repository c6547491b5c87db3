// tests/pipeline_e2e.rs
use std::{fs, path::PathBuf};

use agenda_watch::{
    config::options::{AppOptions, ExportFormat, PageKind},
    progress::Progress,
    runner::{self, Source},
    store, Error,
};
use chrono::NaiveDate;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/agenda_center.html")
}

fn opts_in(dir: &std::path::Path) -> AppOptions {
    AppOptions { store_dir: dir.join(".store"), ..AppOptions::default() }
}

#[test]
fn scrape_from_file_exports_and_caches() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = opts_in(tmp.path());
    let out = tmp.path().join("exports/AgendaCenter.csv");

    let summary = runner::run_scrape(&opts, &Source::File(fixture()), Some(out.as_path()), None).unwrap();
    assert_eq!(summary.data.row_count(), 4);
    assert_eq!(summary.files_written, vec![out.clone()]);

    let text = fs::read_to_string(&out).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Category,Title,MeetingDate,PostedDate"));
    assert_eq!(lines.next(), Some("Planning & Zoning Commission,Public Hearing,\"Jun 20, 2024\",NOT POSTED"));

    let cached = store::load_dataset(&opts.store_dir, PageKind::Agendas).unwrap();
    assert_eq!(cached, summary.data);
}

#[test]
fn evaluate_reads_exported_tsv_and_writes_report() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = opts_in(tmp.path());
    opts.export.format = ExportFormat::Tsv;

    let agendas = tmp.path().join("AgendaCenter.tsv");
    runner::run_scrape(&opts, &Source::File(fixture()), Some(agendas.as_path()), None).unwrap();

    let alerts = tmp.path().join("Alerts.tsv");
    let report = tmp.path().join("report/alerts.html");
    let now = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap().and_hms_opt(12, 0, 0).unwrap();
    let summary =
        runner::run_evaluate(&opts, Some(agendas.as_path()), Some(alerts.as_path()), Some(report.as_path()), now, None).unwrap();

    assert_eq!(summary.data.row_count(), 2);
    assert_eq!(summary.files_written, vec![alerts.clone(), report.clone()]);

    let tsv = fs::read_to_string(&alerts).unwrap();
    assert!(tsv.starts_with("Title\tMeeting Date\tPosted Date\tDifference in Hours\n"));
    assert!(tsv.contains("Budget Workshop\t2024-06-03\t2024-06-03 18:30:00\t1.50"));

    let html = fs::read_to_string(&report).unwrap();
    assert!(html.contains("<td>Public Hearing</td>"));

    let cached = store::load_dataset(&opts.store_dir, PageKind::Alerts).unwrap();
    assert_eq!(cached, summary.data);
}

#[test]
fn run_all_chains_scrape_and_evaluate() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = opts_in(tmp.path());
    let now = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap().and_hms_opt(12, 0, 0).unwrap();
    let agendas = tmp.path().join("a.csv");
    let alerts = tmp.path().join("b.csv");

    let summary = runner::run_all(
        &opts, &Source::File(fixture()), Some(agendas.as_path()), Some(alerts.as_path()), None, now, None,
    )
    .unwrap();
    assert_eq!(summary.data.row_count(), 2);
    assert_eq!(summary.files_written, vec![agendas, alerts]);
}

#[derive(Default)]
struct Recorder {
    lines: Vec<String>,
    finished: usize,
}

impl Progress for Recorder {
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_owned());
    }
    fn step_done(&mut self, what: &str) {
        self.lines.push(what.to_owned());
    }
    fn finish(&mut self) {
        self.finished += 1;
    }
}

#[test]
fn one_progress_sink_follows_both_phases_of_run_all() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = opts_in(tmp.path());
    let now = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap().and_hms_opt(12, 0, 0).unwrap();
    let mut rec = Recorder::default();

    runner::run_all(&opts, &Source::File(fixture()), None, None, None, now, Some(&mut rec)).unwrap();

    assert!(rec.lines.iter().any(|l| l == "4 agendas extracted"));
    assert!(rec.lines.iter().any(|l| l == "4 agendas"));
    assert_eq!(rec.lines.last().map(String::as_str), Some("2 potential violations"));
    assert_eq!(rec.finished, 2);
}

#[test]
fn evaluate_without_cache_or_input_is_missing_input() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = opts_in(tmp.path());
    let now = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap().and_hms_opt(12, 0, 0).unwrap();
    let err = runner::run_evaluate(&opts, None, None, None, now, None).unwrap_err();
    assert!(matches!(err, Error::MissingInput(_)));
}

#[test]
fn missing_page_file_is_missing_input() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = opts_in(tmp.path());
    let err = runner::run_scrape(&opts, &Source::File(tmp.path().join("nope.html")), None, None)
        .unwrap_err();
    assert!(matches!(err, Error::MissingInput(_)));
}
