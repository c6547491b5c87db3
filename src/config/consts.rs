// src/config/consts.rs

// Net config
pub const AGENDA_CENTER_URL: &str = "https://www.hamden.com/agendacenter";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "agenda_watch.log";
pub const CONFIG_FILE: &str = "config.json";

// Records
pub const NOT_POSTED: &str = "NOT POSTED";
pub const UNKNOWN_CATEGORY: &str = "Unknown";
pub const AMENDED_PREFIX: &str = "A - ";
pub const MEETING_DATE_FMT: &str = "%b %d, %Y";
pub const POSTED_DATE_FMT: &str = "%b %d, %Y %I:%M %p";

// Evaluate
pub const ASSUMED_START_HOUR: u32 = 17;
pub const LEAD_THRESHOLD_HOURS: f64 = -24.0;
pub const TRAILING_WINDOW_DAYS: i64 = 7;
pub const IMMINENT_WINDOW_HOURS: i64 = 24;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_AGENDAS_FILE: &str = "AgendaCenter";
pub const DEFAULT_ALERTS_FILE: &str = "Alerts";
pub const DEFAULT_REPORT_FILE: &str = "alerts.html";
pub const DEFAULT_REPORT_SUBJECT: &str = "Potential FOI violation: agenda posting";
