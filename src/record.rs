// src/record.rs
//
// The agenda record schema shared by the extractor (producer) and the
// evaluator (consumer, through its tabular form).

use std::fmt;

use crate::config::consts::{AMENDED_PREFIX, NOT_POSTED};

/// Column names of the tabular form. This is the evaluator's input contract.
pub const AGENDA_HEADERS: [&str; 4] = ["Category", "Title", "MeetingDate", "PostedDate"];

/// PostedDate column: either the posting text or the explicit sentinel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Posting {
    NotPosted,
    Posted { text: String, amended: bool },
}

impl fmt::Display for Posting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Posting::NotPosted => f.write_str(NOT_POSTED),
            Posting::Posted { text, amended: true } => write!(f, "{AMENDED_PREFIX}{text}"),
            Posting::Posted { text, amended: false } => f.write_str(text),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AgendaRecord {
    pub category: String,
    pub title: String,
    /// Verbatim date text from the row header, e.g. "Jun 10, 2024".
    pub meeting_date: String,
    pub posted: Posting,
}

impl AgendaRecord {
    /// Row in `AGENDA_HEADERS` order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.category.clone(),
            self.title.clone(),
            self.meeting_date.clone(),
            self.posted.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posting_renders_sentinel_and_amendment_tag() {
        assert_eq!(Posting::NotPosted.to_string(), "NOT POSTED");
        let p = Posting::Posted { text: s!("Jun 7, 2024 3:15 PM"), amended: false };
        assert_eq!(p.to_string(), "Jun 7, 2024 3:15 PM");
        let a = Posting::Posted { text: s!("Jun 7, 2024 3:15 PM"), amended: true };
        assert_eq!(a.to_string(), "A - Jun 7, 2024 3:15 PM");
    }

    #[test]
    fn row_follows_header_order() {
        let r = AgendaRecord {
            category: s!("Town Council"),
            title: s!("Regular Meeting"),
            meeting_date: s!("Jun 10, 2024"),
            posted: Posting::NotPosted,
        };
        assert_eq!(r.to_row(), vec!["Town Council", "Regular Meeting", "Jun 10, 2024", "NOT POSTED"]);
    }
}
