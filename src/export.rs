//! Plain-text export of saved summaries.
//!
//! Rendering is pure; writing picks a filename derived from the sanitized
//! title so repeated exports of the same record are byte-identical.

use chrono::{Local, TimeZone};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::store::SavedSummary;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the fixed export layout: title, URL, style label, date, then the
/// summary body after a blank line.
pub fn render(saved: &SavedSummary) -> String {
    format!(
        "Title: {}\nURL: {}\nType: {}\nDate: {}\n\n{}",
        saved.title,
        saved.url,
        saved.style.label(),
        format_date(saved.timestamp),
        saved.summary
    )
}

/// Filename for the export: lowercased title with every non-alphanumeric
/// character replaced by `_`, suffixed `_summary.txt`.
pub fn file_name(saved: &SavedSummary) -> String {
    let sanitized: String = saved
        .title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{sanitized}_summary.txt")
}

/// Write the rendered export into `dir` and return the written path.
pub fn write_to(dir: &Path, saved: &SavedSummary) -> Result<PathBuf, ExportError> {
    let path = dir.join(file_name(saved));
    std::fs::write(&path, render(saved))?;
    Ok(path)
}

fn format_date(timestamp_millis: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp_millis)
        .single()
        .map(|date| date.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
