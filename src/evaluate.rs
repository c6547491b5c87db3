// src/evaluate.rs
//! Compliance evaluation of extracted agenda rows.
//!
//! Each row gets an assumed meeting start (the meeting date at a fixed
//! wall-clock time, since the listing never carries start times) and the lead
//! time of its posting relative to that start. Rows whose posting came too
//! late, or that were never posted, are selected for alerting when the meeting
//! is not older than the trailing window.
//!
//! Pure: `now` is an argument and nothing here touches the filesystem.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use tracing::{debug, info};

use crate::config::consts::NOT_POSTED;
use crate::config::options::EvaluateOptions;
use crate::core::dates;
use crate::error::{Error, Result};
use crate::store::DataSet;

pub const ALERT_HEADERS: [&str; 4] = ["Title", "Meeting Date", "Posted Date", "Difference in Hours"];

const TITLE_COL: &str = "Title";
const MEETING_COL: &str = "MeetingDate";
const POSTED_COL: &str = "PostedDate";

/// The PostedDate cell after parsing.
#[derive(Clone, Debug, PartialEq)]
pub enum PostedAt {
    /// The explicit `NOT POSTED` sentinel.
    NotPosted,
    At(NaiveDateTime),
    /// Text that is neither the sentinel nor a timestamp (e.g. an amended tag).
    Unreadable(String),
}

impl PostedAt {
    fn parse(cell: &str) -> Self {
        let cell = cell.trim();
        if cell == NOT_POSTED {
            return PostedAt::NotPosted;
        }
        match dates::parse_posted_at(cell) {
            Some(at) => PostedAt::At(at),
            None => PostedAt::Unreadable(s!(cell)),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, PostedAt::NotPosted)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EvaluatedRecord {
    pub title: String,
    pub meeting_date: NaiveDate,
    pub posted: PostedAt,
    pub assumed_start: NaiveDateTime,
    /// posted − assumed start; `None` unless the posting parsed.
    pub delta: Option<TimeDelta>,
    pub delta_hours: Option<f64>,
    /// Posted after the assumed start.
    pub violated_ordering: Option<bool>,
    pub due_for_alert: bool,
}

impl EvaluatedRecord {
    pub fn meeting_midnight(&self) -> NaiveDateTime {
        self.meeting_date.and_time(NaiveTime::default())
    }

    /// Row in `ALERT_HEADERS` order.
    pub fn to_alert_row(&self) -> Vec<String> {
        let posted = match &self.posted {
            PostedAt::NotPosted => s!(NOT_POSTED),
            PostedAt::At(at) => at.format("%Y-%m-%d %H:%M:%S").to_string(),
            PostedAt::Unreadable(text) => text.clone(),
        };
        vec![
            self.title.clone(),
            self.meeting_date.format("%Y-%m-%d").to_string(),
            posted,
            self.delta_hours.map(|h| format!("{h:.2}")).unwrap_or_default(),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct Evaluation {
    pub now: NaiveDateTime,
    /// Every row with a readable meeting date, input order.
    pub records: Vec<EvaluatedRecord>,
    alert_ix: Vec<usize>,
}

impl Evaluation {
    pub fn alerts(&self) -> impl Iterator<Item = &EvaluatedRecord> + '_ {
        self.alert_ix.iter().map(|&i| &self.records[i])
    }

    pub fn alert_count(&self) -> usize {
        self.alert_ix.len()
    }

    /// Alert subset as a table under `ALERT_HEADERS`.
    pub fn to_dataset(&self) -> DataSet {
        DataSet::new(
            ALERT_HEADERS.iter().map(|h| s!(*h)).collect(),
            self.alerts().map(EvaluatedRecord::to_alert_row).collect(),
        )
    }
}

/// Evaluate a table carrying `Title`, `MeetingDate` and `PostedDate` columns.
/// Structural problems with the table abort before anything is evaluated.
pub fn evaluate(table: &DataSet, now: NaiveDateTime, opts: &EvaluateOptions) -> Result<Evaluation> {
    let title_ix = required_column(table, TITLE_COL)?;
    let meeting_ix = required_column(table, MEETING_COL)?;
    let posted_ix = required_column(table, POSTED_COL)?;

    if table.rows.is_empty() {
        return Err(Error::MissingInput(s!("table has no data rows")));
    }
    let width = table.header_count();
    if let Some((n, row)) = table.rows.iter().enumerate().find(|(_, r)| r.len() < width) {
        return Err(Error::Malformed(format!(
            "data row {} has {} fields, header has {width}",
            n + 1,
            row.len()
        )));
    }

    let imminent_window = TimeDelta::try_hours(opts.imminent_window_hours).ok_or_else(|| {
        Error::Malformed(format!("imminent_window_hours {} is out of range", opts.imminent_window_hours))
    })?;
    let window_start = TimeDelta::try_days(opts.trailing_window_days)
        .and_then(|d| now.checked_sub_signed(d))
        .ok_or_else(|| {
            Error::Malformed(format!("trailing_window_days {} is out of range", opts.trailing_window_days))
        })?;

    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let (title, meeting, posted) = (&row[title_ix], &row[meeting_ix], &row[posted_ix]);
        match evaluate_row(title, meeting, posted, now, opts.assumed_start, imminent_window) {
            Ok(rec) => records.push(rec),
            Err(e) if e.is_item_level() => debug!("row dropped: {e}"),
            Err(e) => return Err(e),
        }
    }

    let alert_ix: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            let late = r.posted.is_sentinel()
                || r.delta_hours.is_some_and(|h| h > opts.lead_threshold_hours);
            late && r.meeting_midnight() >= window_start
        })
        .map(|(i, _)| i)
        .collect();

    info!(
        rows = table.row_count(),
        evaluated = records.len(),
        alerts = alert_ix.len(),
        "agendas evaluated"
    );
    Ok(Evaluation { now, records, alert_ix })
}

fn required_column(table: &DataSet, name: &str) -> Result<usize> {
    if table.headers.is_none() {
        return Err(Error::MissingInput(s!("table has no header row")));
    }
    table
        .column(name)
        .ok_or_else(|| Error::MissingInput(format!("required column {name:?} is missing")))
}

fn evaluate_row(
    title: &str,
    meeting: &str,
    posted: &str,
    now: NaiveDateTime,
    start: NaiveTime,
    imminent_window: TimeDelta,
) -> Result<EvaluatedRecord> {
    let meeting = meeting.trim();
    let meeting_date =
        dates::parse_meeting_date(meeting).ok_or_else(|| Error::UnparsableDate(s!(meeting)))?;
    let posted = PostedAt::parse(posted);
    let assumed_start = meeting_date.and_time(start);

    let (delta, violated_ordering) = match &posted {
        PostedAt::At(at) => (Some(*at - assumed_start), Some(assumed_start < *at)),
        PostedAt::NotPosted | PostedAt::Unreadable(_) => (None, None),
    };

    let until_meeting = meeting_date.and_time(NaiveTime::default()) - now;
    let imminent = until_meeting >= TimeDelta::zero()
        && until_meeting <= imminent_window;

    Ok(EvaluatedRecord {
        title: s!(title),
        meeting_date,
        due_for_alert: imminent || posted.is_sentinel(),
        posted,
        assumed_start,
        delta,
        delta_hours: delta.map(dates::hours),
        violated_ordering,
    })
}
