//! CSV export of recorded battery changes.
//!
//! The file format matches the companion body-battery CSVs these logs get
//! merged with: a fixed two-column header, `HH:MM:SS,<percent>` rows, UTF-8
//! with no BOM.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::data::session::LogEntry;

pub const CSV_HEADER: &str = "original_time,phone_battery";

const FILENAME_PREFIX: &str = "phone_battery";

/// Errors that can occur while writing an export file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of a successful export call.
#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// A file was written to the given path.
    Written(PathBuf),
    /// There were no entries, so no file was created.
    NothingToExport,
}

/// Filename derived from the export time: `phone_battery_YYYYMMDD_HHMMSS.csv`.
///
/// Second precision keeps successive exports from colliding; two exports
/// within the same second overwrite each other.
pub fn export_filename(at: DateTime<Local>) -> String {
    format!("{}_{}.csv", FILENAME_PREFIX, at.format("%Y%m%d_%H%M%S"))
}

/// Write `entries` as CSV into `dir`, named after the export time.
///
/// The whole file is rendered in memory and written in one call, so a
/// failed export never leaves a half-written file behind a success report.
/// Never mutates the entries.
pub fn export_csv(
    entries: &[LogEntry],
    dir: &Path,
    at: DateTime<Local>,
) -> Result<ExportOutcome, ExportError> {
    if entries.is_empty() {
        warn!("Export requested with no recorded entries");
        return Ok(ExportOutcome::NothingToExport);
    }

    let path = dir.join(export_filename(at));
    let content = render_csv(entries);

    std::fs::write(&path, &content).map_err(|source| {
        warn!(path = %path.display(), error = %source, "CSV export failed");
        ExportError::Io {
            path: path.clone(),
            source,
        }
    })?;

    info!(path = %path.display(), rows = entries.len(), "CSV exported");
    Ok(ExportOutcome::Written(path))
}

fn render_csv(entries: &[LogEntry]) -> String {
    let mut output = String::with_capacity(entries.len() * 12 + CSV_HEADER.len() + 1);
    output.push_str(CSV_HEADER);
    output.push('\n');
    for entry in entries {
        output.push_str(&format!("{},{}\n", entry.formatted_time(), entry.level));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{NaiveTime, TimeZone};

    fn entry(h: u32, m: u32, s: u32, level: u8) -> LogEntry {
        LogEntry::new(NaiveTime::from_hms_opt(h, m, s).unwrap(), level)
    }

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 15, h, m, s).unwrap()
    }

    #[test]
    fn test_export_filename_format() {
        assert_eq!(
            export_filename(at(9, 5, 3)),
            "phone_battery_20240315_090503.csv"
        );
    }

    #[test]
    fn test_export_writes_exact_content() {
        let dir = tempfile::tempdir().unwrap();
        let entries = [entry(10, 0, 0, 80), entry(10, 0, 5, 79)];

        let outcome = export_csv(&entries, dir.path(), at(12, 0, 0)).unwrap();
        let ExportOutcome::Written(path) = outcome else {
            panic!("expected a written file");
        };

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "original_time,phone_battery\n10:00:00,80\n10:00:05,79\n");
    }

    #[test]
    fn test_export_empty_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();

        let outcome = export_csv(&[], dir.path(), at(12, 0, 0)).unwrap();

        assert_eq!(outcome, ExportOutcome::NothingToExport);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let entries = [
            entry(8, 30, 0, 100),
            entry(8, 45, 12, 99),
            entry(9, 2, 41, 98),
        ];

        let ExportOutcome::Written(path) = export_csv(&entries, dir.path(), at(9, 3, 0)).unwrap()
        else {
            panic!("expected a written file");
        };

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<LogEntry> = content
            .lines()
            .skip(1)
            .map(|line| {
                let (time, level) = line.split_once(',').unwrap();
                LogEntry::new(
                    NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap(),
                    level.parse().unwrap(),
                )
            })
            .collect();

        assert_eq!(parsed, entries);
    }

    #[test]
    fn test_repeated_export_yields_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let entries = [entry(10, 0, 0, 50), entry(10, 1, 0, 49)];

        let first = export_csv(&entries, dir.path(), at(12, 0, 0)).unwrap();
        let second = export_csv(&entries, dir.path(), at(12, 0, 1)).unwrap();

        let (ExportOutcome::Written(a), ExportOutcome::Written(b)) = (first, second) else {
            panic!("expected two written files");
        };
        assert_ne!(a, b);
        assert_eq!(
            std::fs::read_to_string(a).unwrap(),
            std::fs::read_to_string(b).unwrap()
        );
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let entries = [entry(10, 0, 0, 50)];

        let err = export_csv(&entries, &missing, at(12, 0, 0)).unwrap_err();
        let ExportError::Io { path, .. } = err;
        assert!(path.starts_with(&missing));
    }
}
