// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::options::{ExportFormat, ExportOptions, PageKind};
use crate::error::{Error, Result};
use crate::store::DataSet;
use crate::table::to_export_string;

/// Write one page's dataset according to ExportOptions (path, headers policy, delimiter).
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, kind: PageKind, ds: &DataSet) -> Result<PathBuf> {
    let path = export.out_path(kind);
    write_dataset(&path, export.format, export.include_headers, ds)?;
    Ok(path)
}

/// Write a dataset to an explicit path, creating parent directories.
pub fn write_dataset(path: &Path, format: ExportFormat, include_headers: bool, ds: &DataSet) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(ds, include_headers, format.delim())?;
    fs::write(path, contents)?;
    info!(path = %path.display(), rows = ds.row_count(), "exported");
    Ok(())
}

/// Resolve user text for `-o`: empty → default; a directory (or a trailing
/// separator) → `<dir>/<default_filename>`; anything else is the file itself.
pub fn resolve_single_out_path(user_o: &str, default_filename: &Path) -> Result<PathBuf> {
    if user_o.is_empty() { return Ok(default_filename.to_path_buf()); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        let name = default_filename.file_name().unwrap_or(default_filename.as_os_str());
        Ok(p.join(name))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Malformed(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_hint_resolves_to_default_filename() {
        let dir = tempfile::tempdir().unwrap();
        let hint = format!("{}/", dir.path().join("exports").display());
        let p = resolve_single_out_path(&hint, Path::new("out/AgendaCenter.csv")).unwrap();
        assert!(p.ends_with("AgendaCenter.csv"));
        assert!(dir.path().join("exports").is_dir());
    }

    #[test]
    fn empty_text_means_default() {
        let p = resolve_single_out_path("", Path::new("out/Alerts.tsv")).unwrap();
        assert_eq!(p, PathBuf::from("out/Alerts.tsv"));
    }

    #[test]
    fn file_in_place_of_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let f = dir.path().join("taken");
        fs::write(&f, "x").unwrap();
        assert!(ensure_directory(&f).is_err());
    }
}
