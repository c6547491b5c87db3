// src/table.rs
use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use crate::error::{Error, Result};
use crate::store::DataSet;

/* ---------------- Reading ---------------- */

/// Read a delimited table whose first record is the header row.
/// Every data row must have the header's width.
pub fn read_table<R: Read>(reader: R, sep: u8) -> Result<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(sep)
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| if i == 0 { s!(h.trim_start_matches('\u{feff}')) } else { s!(h) })
        .collect();
    if headers.is_empty() {
        return Err(Error::MissingInput(s!("table has no header row")));
    }

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(malformed_or_csv)?;
        rows.push(rec.iter().map(String::from).collect());
    }

    Ok(DataSet::new(headers, rows))
}

fn malformed_or_csv(e: csv::Error) -> Error {
    if let csv::ErrorKind::UnequalLengths { pos, expected_len, len } = e.kind() {
        return Error::Malformed(format!(
            "row at line {} has {len} fields, header has {expected_len}",
            pos.as_ref().map_or(0, |p| p.line()),
        ));
    }
    Error::Csv(e)
}

pub fn read_table_path(path: &Path, sep: u8) -> Result<DataSet> {
    let file = fs::File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::MissingInput(format!("{} not found", path.display())),
        _ => Error::Io(e),
    })?;
    read_table(io::BufReader::new(file), sep)
}

/* ---------------- Writing ---------------- */

/// Write headers (when present and wanted) and rows. Fields are quoted only
/// when they contain the delimiter, a quote or a line break.
pub fn write_table<W: Write>(writer: W, ds: &DataSet, include_headers: bool, sep: u8) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(sep)
        .flexible(true)
        .from_writer(writer);

    if include_headers {
        if let Some(h) = &ds.headers {
            wtr.write_record(h)?;
        }
    }
    for row in &ds.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Full export text for Copy/Export.
pub fn to_export_string(ds: &DataSet, include_headers: bool, sep: u8) -> Result<String> {
    let mut buf = Vec::new();
    write_table(&mut buf, ds, include_headers, sep)?;
    String::from_utf8(buf).map_err(|e| Error::Malformed(format!("export is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_row_and_quoted_fields_are_read() {
        let text = "\u{feff}Title,MeetingDate,PostedDate\n\"Budget, Final\",\"Jun 10, 2024\",NOT POSTED\n";
        let ds = read_table(text.as_bytes(), b',').unwrap();
        assert_eq!(ds.column("Title"), Some(0));
        assert_eq!(ds.rows, vec![vec!["Budget, Final", "Jun 10, 2024", "NOT POSTED"]]);
    }

    #[test]
    fn short_row_is_malformed() {
        let text = "Title,MeetingDate,PostedDate\nA,\"Jun 10, 2024\"\n";
        let err = read_table(text.as_bytes(), b',').unwrap_err();
        assert!(matches!(err, Error::Malformed(_)), "{err}");
    }

    #[test]
    fn empty_input_is_missing_input() {
        let err = read_table("".as_bytes(), b',').unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
    }

    #[test]
    fn tsv_export_without_headers() {
        let ds = DataSet::new(
            vec![s!("Title"), s!("Meeting Date")],
            vec![vec![s!("Budget, Final"), s!("2024-06-10")]],
        );
        assert_eq!(to_export_string(&ds, false, b'\t').unwrap(), "Budget, Final\t2024-06-10\n");
        assert_eq!(
            to_export_string(&ds, true, b',').unwrap(),
            "Title,Meeting Date\n\"Budget, Final\",2024-06-10\n"
        );
    }
}
