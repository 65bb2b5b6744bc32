use std::ffi::OsStr;
use std::fs::read_dir;
use std::io;
use std::path::{Path, PathBuf};

use super::consts::REPORT_EXTENSION;

///
/// List the guide reports of a directory.
///
/// Only regular files ending in `.tsv` are returned, in the order the
/// directory listing yields them. Subdirectories are not descended into.
///
/// # Arguments
/// - dir: directory holding one report per gene
///
pub fn list_report_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut reports = Vec::new();

    for entry in read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_report_file(&path) {
            reports.push(path);
        }
    }

    Ok(reports)
}

///
/// Whether a path carries the report extension (case sensitive).
///
pub fn is_report_file(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(REPORT_EXTENSION))
}
