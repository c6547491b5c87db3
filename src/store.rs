// src/store.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::config::options::PageKind;
use crate::error::{Error, Result};
use crate::record::{AgendaRecord, AGENDA_HEADERS};
use crate::table;

/// In-memory table shared by the GUI pages, the exporters and the evaluator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers: Some(headers), rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column, if the table has headers.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.as_ref()?.iter().position(|h| h == name)
    }
}

/// Tabular form of extracted records, in `AGENDA_HEADERS` order.
pub fn records_to_dataset<I>(records: I) -> DataSet
where
    I: IntoIterator<Item = AgendaRecord>,
{
    DataSet::new(
        AGENDA_HEADERS.iter().map(|h| s!(*h)).collect(),
        records.into_iter().map(|r| r.to_row()).collect(),
    )
}

/* ---------------- Local cache ---------------- */

pub fn cache_path(root: &Path, kind: PageKind) -> PathBuf {
    root.join(kind.cache_name())
}

/// Cache always carries the header row, CSV-delimited.
pub fn save_dataset(root: &Path, kind: PageKind, ds: &DataSet) -> Result<PathBuf> {
    fs::create_dir_all(root)?;
    let path = cache_path(root, kind);
    let file = fs::File::create(&path)?;
    table::write_table(file, ds, true, b',')?;
    debug!(path = %path.display(), rows = ds.row_count(), "dataset cached");
    Ok(path)
}

/// A cache that was never written is reported as `MissingInput`.
pub fn load_dataset(root: &Path, kind: PageKind) -> Result<DataSet> {
    let path = cache_path(root, kind);
    if !path.is_file() {
        return Err(Error::MissingInput(format!("no cached {kind:?} at {}", path.display())));
    }
    table::read_table_path(&path, b',')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Posting;

    fn sample() -> Vec<AgendaRecord> {
        vec![
            AgendaRecord {
                category: s!("Town Council"),
                title: s!("Regular Meeting, Budget"),
                meeting_date: s!("Jun 10, 2024"),
                posted: Posting::Posted { text: s!("Jun 7, 2024 3:15 PM"), amended: false },
            },
            AgendaRecord {
                category: s!("Planning & Zoning"),
                title: s!("Public Hearing"),
                meeting_date: s!("Jun 20, 2024"),
                posted: Posting::NotPosted,
            },
        ]
    }

    #[test]
    fn records_become_rows_under_agenda_headers() {
        let ds = records_to_dataset(sample());
        assert_eq!(ds.header_count(), 4);
        assert_eq!(ds.column("MeetingDate"), Some(2));
        assert_eq!(ds.column("Nope"), None);
        assert_eq!(ds.rows[1][3], "NOT POSTED");
    }

    #[test]
    fn cache_survives_a_save_load_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let ds = records_to_dataset(sample());
        let path = save_dataset(dir.path(), PageKind::Agendas, &ds).unwrap();
        assert!(path.ends_with("agendas.csv"));
        assert_eq!(load_dataset(dir.path(), PageKind::Agendas).unwrap(), ds);
    }

    #[test]
    fn missing_cache_is_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(dir.path(), PageKind::Alerts).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
    }
}
