// src/config/options.rs
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::consts::*;
use crate::error::Result;

/// Everything a run can be tuned with. Every section is optional in `config.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    /// Where the last extracted/evaluated datasets and the log live.
    pub store_dir: PathBuf,
    /// Kept under the `site_to_scrape` key so older config files still load.
    #[serde(rename = "site_to_scrape")]
    pub scrape: ScrapeOptions,
    #[serde(rename = "evaluator")]
    pub evaluate: EvaluateOptions,
    pub export: ExportOptions,
    /// Older config files carry the subject inside an `email` block.
    #[serde(alias = "email")]
    pub report: ReportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(STORE_DIR),
            scrape: ScrapeOptions::default(),
            evaluate: EvaluateOptions::default(),
            export: ExportOptions::default(),
            report: ReportOptions::default(),
        }
    }
}

impl AppOptions {
    /// Load options from a JSON file. A missing file means "all defaults".
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let opts: AppOptions = serde_json::from_str(&text)?;
                info!(path = %path.display(), url = %opts.scrape.url, "config loaded");
                Ok(opts)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Agendas,
    Alerts,
}

impl PageKind {
    pub fn file_stem(self) -> &'static str {
        match self {
            PageKind::Agendas => DEFAULT_AGENDAS_FILE,
            PageKind::Alerts => DEFAULT_ALERTS_FILE,
        }
    }

    /// Name of the cached dataset under the store directory.
    pub fn cache_name(self) -> &'static str {
        match self {
            PageKind::Agendas => "agendas.csv",
            PageKind::Alerts => "alerts.csv",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    pub url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(AGENDA_CENTER_URL),
            user_agent: s!(USER_AGENT),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Knobs of the notice rule. The defaults are the ones the alerts have always
/// been produced with; change them only on a new requirement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateOptions {
    /// Wall-clock time substituted for the meeting's (untracked) start.
    pub assumed_start: NaiveTime,
    /// Rows posted more than this many hours before the assumed start pass.
    pub lead_threshold_hours: f64,
    /// Only meetings on or after `now - trailing_window_days` are reported.
    pub trailing_window_days: i64,
    /// A meeting within this many hours from now is due for an alert.
    pub imminent_window_hours: i64,
}

impl Default for EvaluateOptions {
    fn default() -> Self {
        Self {
            assumed_start: NaiveTime::from_hms_opt(ASSUMED_START_HOUR, 0, 0).unwrap_or_default(),
            lead_threshold_hours: LEAD_THRESHOLD_HOURS,
            trailing_window_days: TRAILING_WINDOW_DAYS,
            imminent_window_hours: IMMINENT_WINDOW_HOURS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }

    /// Guess the format from a file extension; anything unknown is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => ExportFormat::Tsv,
            _ => ExportFormat::Csv,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    pub out_dir: PathBuf,
    /// User override typed into the output field; `None` means per-page default.
    #[serde(skip)]
    out_path: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            out_path: None,
        }
    }
}

impl ExportOptions {
    pub fn default_path_for(&self, kind: PageKind) -> PathBuf {
        self.out_dir.join(join!(kind.file_stem(), ".", self.format.ext()))
    }

    pub fn out_path(&self, kind: PageKind) -> PathBuf {
        self.out_path.clone().unwrap_or_else(|| self.default_path_for(kind))
    }

    /// Parse GUI/CLI text into an override. Empty text restores the default.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.out_path = if s.is_empty() { None } else { Some(PathBuf::from(s)) };
    }

    pub fn has_custom_path(&self) -> bool {
        self.out_path.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    pub subject: String,
    pub path: PathBuf,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            subject: s!(DEFAULT_REPORT_SUBJECT),
            path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_REPORT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_config_layout_loads() {
        let text = r#"{
            "site_to_scrape": { "url": "https://example.org/agendacenter" },
            "email": {
                "smtp_server": "smtp.example.org",
                "smtp_port": "465",
                "subject": "FOI check"
            }
        }"#;
        let opts: AppOptions = serde_json::from_str(text).unwrap();
        assert_eq!(opts.scrape.url, "https://example.org/agendacenter");
        assert_eq!(opts.scrape.timeout_secs, REQUEST_TIMEOUT_SECS);
        assert_eq!(opts.report.subject, "FOI check");
        assert_eq!(opts.evaluate, EvaluateOptions::default());
    }

    #[test]
    fn evaluator_section_overrides_defaults() {
        let text = r#"{ "evaluator": { "lead_threshold_hours": -48.0, "assumed_start": "18:30:00" } }"#;
        let opts: AppOptions = serde_json::from_str(text).unwrap();
        assert_eq!(opts.evaluate.lead_threshold_hours, -48.0);
        assert_eq!(opts.evaluate.assumed_start, NaiveTime::from_hms_opt(18, 30, 0).unwrap());
        assert_eq!(opts.evaluate.trailing_window_days, 7);
    }

    #[test]
    fn default_evaluate_options() {
        let e = EvaluateOptions::default();
        assert_eq!(e.assumed_start, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
        assert_eq!(e.lead_threshold_hours, -24.0);
        assert_eq!(e.trailing_window_days, 7);
        assert_eq!(e.imminent_window_hours, 24);
    }

    #[test]
    fn out_path_follows_format_until_overridden() {
        let mut export = ExportOptions::default();
        assert!(export.out_path(PageKind::Agendas).ends_with("AgendaCenter.csv"));

        export.format = ExportFormat::Tsv;
        assert!(export.out_path(PageKind::Alerts).ends_with("Alerts.tsv"));

        export.set_path("reports/custom.data");
        assert!(export.has_custom_path());
        assert_eq!(export.out_path(PageKind::Agendas), PathBuf::from("reports/custom.data"));

        export.set_path("   ");
        assert!(!export.has_custom_path());
    }

    #[test]
    fn missing_config_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let opts = AppOptions::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(opts, AppOptions::default());
    }
}
