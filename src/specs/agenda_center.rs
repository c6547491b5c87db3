// src/specs/agenda_center.rs
//! Scraping *spec* for the Agenda Center listing page.
//!
//! Page shape (one fixed layout):
//! - category sections: `div[id^="cat"]`
//! - section label: `h2[onclick*="expandCollaspseCategory("]` (the site's own spelling)
//! - meeting rows: `tr[class="catAgendaRow"]`
//! - per row, a heading holding `<strong>DATE</strong>` followed by
//!   "Posted …" / "Amended …" text
//! - per row, the agenda link `p a[id][href*="ViewFile"]`
//!
//! Responsibilities:
//! - Turn one page snapshot into `AgendaRecord`s, skipping rows whose
//!   substructure is missing.
//! - Order the result newest meeting first when every date parses.
//!
//! Non-Responsibilities:
//! - **No fetching, no persistence, no compliance logic.**

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::config::consts::UNKNOWN_CATEGORY;
use crate::core::dates;
use crate::core::sanitize::{join_trimmed, normalize_ws, strip_glyphs};
use crate::error::{Error, Result};
use crate::record::{AgendaRecord, Posting};

/// Heading levels tried for a row's date/status header, in this exact order.
/// Categories on the site use different levels; `h4` is by far the most common.
/// Only the first element of each level is considered.
pub const DATE_HEADER_CANDIDATES: [&str; 6] = ["h4", "h1", "h2", "h3", "h5", "h6"];

const SECTION_SEL: &str = r#"div[id^="cat"]"#;
const CATEGORY_SEL: &str = r#"h2[onclick*="expandCollaspseCategory("]"#;
const ROW_SEL: &str = r#"tr[class="catAgendaRow"]"#;
const TITLE_SEL: &str = r#"p a[id][href*="ViewFile"]"#;
const EMPHASIS_SEL: &str = "strong";

static POSTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)(?:Posted|Amended)(.+)").expect("posted pattern compiles"));

/// Extracted records, consumed once.
#[derive(Debug)]
pub struct Agendas {
    inner: std::vec::IntoIter<AgendaRecord>,
    date_sorted: bool,
}

impl Agendas {
    /// True when every meeting date parsed and the records were re-ordered
    /// newest first; false when extraction order was kept.
    pub fn is_date_sorted(&self) -> bool {
        self.date_sorted
    }
}

impl Iterator for Agendas {
    type Item = AgendaRecord;

    fn next(&mut self) -> Option<AgendaRecord> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Agendas {}

struct Selectors {
    section: Selector,
    category: Selector,
    row: Selector,
    title: Selector,
    emphasis: Selector,
    /// Same order as `DATE_HEADER_CANDIDATES`
    headers: Vec<Selector>,
}

impl Selectors {
    fn compile() -> Result<Self> {
        Ok(Self {
            section: selector(SECTION_SEL)?,
            category: selector(CATEGORY_SEL)?,
            row: selector(ROW_SEL)?,
            title: selector(TITLE_SEL)?,
            emphasis: selector(EMPHASIS_SEL)?,
            headers: DATE_HEADER_CANDIDATES
                .iter()
                .map(|h| selector(h))
                .collect::<Result<_>>()?,
        })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector(format!("{css}: {e:?}")))
}

/// Parse a full page snapshot into agenda records.
pub fn extract(markup: &str) -> Result<Agendas> {
    let sels = Selectors::compile()?;
    let doc = Html::parse_document(markup);

    let mut records = Vec::new();
    let mut sections = 0usize;
    let mut skipped = 0usize;

    for section in doc.select(&sels.section) {
        sections += 1;
        let category = category_label(section, &sels);

        for row in section.select(&sels.row) {
            match extract_row(row, &category, &sels) {
                Ok(rec) => records.push(rec),
                Err(e) if e.is_item_level() => {
                    skipped += 1;
                    debug!(category = %category, "row skipped: {e}");
                }
                Err(e) => return Err(e),
            }
        }
    }

    let (records, date_sorted) = order_by_meeting_date(records);
    info!(sections, records = records.len(), skipped, date_sorted, "agenda center parsed");

    Ok(Agendas { inner: records.into_iter(), date_sorted })
}

/// Section label from its collapsible header; "Unknown" when there is none.
fn category_label(section: ElementRef<'_>, sels: &Selectors) -> String {
    let label = section
        .select(&sels.category)
        .next()
        .map(|h2| strip_glyphs(&join_trimmed(h2.text())))
        .unwrap_or_default();

    if label.is_empty() { s!(UNKNOWN_CATEGORY) } else { label }
}

fn extract_row(row: ElementRef<'_>, category: &str, sels: &Selectors) -> Result<AgendaRecord> {
    let (header, emphasis) = date_header(row, sels)
        .ok_or_else(|| Error::StructuralMismatch(s!("no heading with a <strong> date")))?;

    let meeting_date = normalize_ws(&emphasis.text().collect::<String>());
    if meeting_date.is_empty() {
        return Err(Error::StructuralMismatch(s!("empty meeting date")));
    }

    // The date element is taken out of the header; what remains carries the posting.
    let remainder = normalize_ws(&text_without(header, emphasis));
    let posted = posting_from(&remainder, &meeting_date);

    let title = row
        .select(&sels.title)
        .next()
        .map(|a| normalize_ws(&a.text().collect::<String>()))
        .unwrap_or_default();
    if title.is_empty() {
        return Err(Error::StructuralMismatch(format!("no title for meeting {meeting_date}")));
    }

    Ok(AgendaRecord {
        category: s!(category),
        title,
        meeting_date,
        posted,
    })
}

/// First candidate heading (in `DATE_HEADER_CANDIDATES` order) that holds an
/// emphasized element, together with that element.
fn date_header<'a>(
    row: ElementRef<'a>,
    sels: &Selectors,
) -> Option<(ElementRef<'a>, ElementRef<'a>)> {
    sels.headers.iter().find_map(|level| {
        let header = row.select(level).next()?;
        let emphasis = header.select(&sels.emphasis).next()?;
        Some((header, emphasis))
    })
}

/// Text of `root` with the subtree of `skip` left out.
fn text_without(root: ElementRef<'_>, skip: ElementRef<'_>) -> String {
    let skip_id = skip.id();
    root.descendants()
        .filter(|node| !node.ancestors().any(|a| a.id() == skip_id))
        .filter_map(|node| node.value().as_text().map(|t| &**t))
        .collect()
}

fn posting_from(remainder: &str, meeting_date: &str) -> Posting {
    match POSTED_RE.captures(remainder).and_then(|c| c.get(1)) {
        None => Posting::NotPosted,
        Some(m) => Posting::Posted {
            text: s!(m.as_str().trim()),
            amended: meeting_date.contains("Amended"),
        },
    }
}

/// All-or-nothing: sort newest first only if every meeting date parses.
fn order_by_meeting_date(records: Vec<AgendaRecord>) -> (Vec<AgendaRecord>, bool) {
    let parsed: Option<Vec<NaiveDate>> = records
        .iter()
        .map(|r| dates::parse_meeting_date(&r.meeting_date))
        .collect();

    match parsed {
        Some(keys) => {
            let mut keyed: Vec<(NaiveDate, AgendaRecord)> = keys.into_iter().zip(records).collect();
            // stable: same-day meetings keep page order
            keyed.sort_by(|a, b| b.0.cmp(&a.0));
            (keyed.into_iter().map(|(_, r)| r).collect(), true)
        }
        None => {
            debug!("unparsable meeting date present, keeping page order");
            (records, false)
        }
    }
}
