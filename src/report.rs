// src/report.rs
//
// HTML alert report: an intro paragraph followed by the alert table with bold
// headers and no index column. Ready to be handed to a mail transport as-is.

use std::{fmt::Write as _, fs, path::Path};

use tracing::info;

use crate::core::sanitize::escape_html;
use crate::error::Result;
use crate::file::ensure_directory;
use crate::store::DataSet;

pub const INTRO: &str = "There was a potential FOI violation for the following meeting(s). \
The agenda(s) may not have been posted in accordance with state public meeting law requirements.";

/// Note under the intro; `start` is the assumed meeting start, e.g. "5pm".
fn assumption_note(start: &str) -> String {
    format!(
        "Note: This notification system assumes a public meeting start time of {start} \
         and calculates the hourly difference accordingly."
    )
}

pub fn render_html(subject: &str, assumed_start: chrono::NaiveTime, alerts: &DataSet) -> String {
    let start = assumed_start.format("%-I%P").to_string();
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(subject));
    out.push_str("<style>th { font-weight: bold; }</style>\n</head>\n<body>\n");
    let _ = writeln!(
        out,
        "<p>{}<br><br><i>{}</i></p>\n<hr>",
        escape_html(INTRO),
        escape_html(&assumption_note(&start))
    );

    out.push_str("<table>\n");
    if let Some(headers) = &alerts.headers {
        out.push_str("<thead><tr>");
        for h in headers {
            let _ = write!(out, "<th>{}</th>", escape_html(h));
        }
        out.push_str("</tr></thead>\n");
    }
    out.push_str("<tbody>\n");
    for row in &alerts.rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape_html(cell));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    out
}

pub fn write_report(
    path: &Path,
    subject: &str,
    assumed_start: chrono::NaiveTime,
    alerts: &DataSet,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, render_html(subject, assumed_start, alerts))?;
    info!(path = %path.display(), alerts = alerts.row_count(), "report written");
    Ok(())
}
