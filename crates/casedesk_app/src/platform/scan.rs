//! Turns the typed import path into candidate files for the state machine.
//!
//! Only metadata is read here; file contents are never touched at import
//! time. The PDF filter itself lives in the core so it stays pure.

use std::fs;
use std::path::{Path, PathBuf};

use casedesk_core::{PickedFile, PDF_MIME};
use desk_logging::desk_warn;

/// Expands the typed import path into candidate files: a file path yields
/// itself, a directory yields the files directly inside it (no recursion).
/// An unreadable path yields nothing.
pub fn scan_input(input: &str) -> Vec<PickedFile> {
    let path = PathBuf::from(input);
    let meta = match fs::metadata(&path) {
        Ok(meta) => meta,
        Err(err) => {
            desk_warn!("import scan failed for {:?}: {}", path, err);
            return Vec::new();
        }
    };

    if !meta.is_dir() {
        return picked_file(path, meta).into_iter().collect();
    }

    let entries = match fs::read_dir(&path) {
        Ok(entries) => entries,
        Err(err) => {
            desk_warn!("import scan failed for {:?}: {}", path, err);
            return Vec::new();
        }
    };

    let mut files: Vec<PickedFile> = entries
        .flatten()
        .filter_map(|entry| {
            let meta = entry.metadata().ok()?;
            if meta.is_file() {
                picked_file(entry.path(), meta)
            } else {
                None
            }
        })
        .collect();
    // Directory iteration order is platform-defined; keep imports stable.
    files.sort_by(|a, b| a.name.cmp(&b.name));
    files
}

fn picked_file(path: PathBuf, meta: fs::Metadata) -> Option<PickedFile> {
    let name = path.file_name()?.to_string_lossy().into_owned();
    Some(PickedFile {
        mime: mime_for_path(&path).to_owned(),
        name,
        size: meta.len(),
        modified: meta.modified().ok(),
        path,
    })
}

/// Maps a file extension to the MIME type the import filter checks, the way
/// a browser file input reports `type` for a picked file.
fn mime_for_path(path: &Path) -> &'static str {
    let ext = path.extension().and_then(|ext| ext.to_str());
    match ext {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => PDF_MIME,
        Some(ext) if ext.eq_ignore_ascii_case("txt") => "text/plain",
        Some(ext) if ext.eq_ignore_ascii_case("md") => "text/markdown",
        Some(ext) if ext.eq_ignore_ascii_case("html") => "text/html",
        Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
        Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
            "image/jpeg"
        }
        _ => "application/octet-stream",
    }
}
