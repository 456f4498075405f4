// Group result delivery: spreadsheet CSV and plain-text rendering.
//
// The rendering functions are pure; actually landing bytes somewhere is
// behind the `FileExport` capability so the orchestrator can be tested
// with a throwaway directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::roster::Person;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export; run a group split first")]
    NoGroups,

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("csv encoding failed: {0}")]
    Csv(String),
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// UTF-8 byte-order mark, so spreadsheet apps detect the encoding.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Display label for the group at `index` (zero-based).
pub fn group_label(index: usize) -> String {
    format!("第 {} 組", index + 1)
}

/// CSV bytes: BOM, header `組別,姓名`, one row per (group, person).
pub fn groups_csv(groups: &[Vec<Person>]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    buf.extend_from_slice(UTF8_BOM);
    let mut writer = csv::Writer::from_writer(buf);
    writer
        .write_record(["組別", "姓名"])
        .map_err(|e| ExportError::Csv(e.to_string()))?;
    for (index, group) in groups.iter().enumerate() {
        let label = group_label(index);
        for person in group {
            writer
                .write_record([label.as_str(), person.name.as_str()])
                .map_err(|e| ExportError::Csv(e.to_string()))?;
        }
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))
}

/// Plain-text rendering, one line per group: `第 N 組: a, b, c`.
pub fn groups_text(groups: &[Vec<Person>]) -> String {
    groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let members: Vec<&str> = group.iter().map(|p| p.name.as_str()).collect();
            format!("{}: {}", group_label(index), members.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Dated file stem shared by both export formats.
pub fn export_stem(date: NaiveDate) -> String {
    format!("分組結果_{}", date.format("%Y-%m-%d"))
}

// ---------------------------------------------------------------------------
// FileExport capability
// ---------------------------------------------------------------------------

/// Injected capability for delivering group results to the outside world.
pub trait FileExport {
    /// Write the spreadsheet CSV; returns the written path.
    fn export_csv(&self, groups: &[Vec<Person>]) -> Result<PathBuf, ExportError>;

    /// Write the plain-text rendering; returns the written path.
    fn export_text(&self, groups: &[Vec<Person>]) -> Result<PathBuf, ExportError>;
}

/// Filesystem-backed exporter writing dated files into one directory.
#[derive(Debug, Clone)]
pub struct FsExport {
    dir: PathBuf,
}

impl FsExport {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FsExport { dir: dir.into() }
    }

    /// Default export directory: the user's download directory when the
    /// platform reports one, otherwise the current directory.
    pub fn default_dir() -> PathBuf {
        directories::UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn write(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir).map_err(|source| ExportError::Write {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

impl FileExport for FsExport {
    fn export_csv(&self, groups: &[Vec<Person>]) -> Result<PathBuf, ExportError> {
        if groups.is_empty() {
            return Err(ExportError::NoGroups);
        }
        let bytes = groups_csv(groups)?;
        let name = format!("{}.csv", export_stem(Local::now().date_naive()));
        self.write(&name, &bytes)
    }

    fn export_text(&self, groups: &[Vec<Person>]) -> Result<PathBuf, ExportError> {
        if groups.is_empty() {
            return Err(ExportError::NoGroups);
        }
        let mut text = groups_text(groups);
        text.push('\n');
        let name = format!("{}.txt", export_stem(Local::now().date_naive()));
        self.write(&name, text.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::IdGenerator;

    fn sample_groups() -> Vec<Vec<Person>> {
        let ids = IdGenerator::new();
        vec![
            vec![ids.person("陳小美"), ids.person("林志豪")],
            vec![ids.person("張雅婷")],
        ]
    }

    #[test]
    fn csv_starts_with_bom_and_header() {
        let bytes = groups_csv(&sample_groups()).unwrap();
        assert_eq!(&bytes[..3], UTF8_BOM);
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("組別,姓名"));
        assert_eq!(lines.next(), Some("第 1 組,陳小美"));
        assert_eq!(lines.next(), Some("第 1 組,林志豪"));
        assert_eq!(lines.next(), Some("第 2 組,張雅婷"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn text_rendering_one_line_per_group() {
        let text = groups_text(&sample_groups());
        assert_eq!(text, "第 1 組: 陳小美, 林志豪\n第 2 組: 張雅婷");
    }

    #[test]
    fn text_rendering_of_empty_groups_is_empty() {
        assert_eq!(groups_text(&[]), "");
    }

    #[test]
    fn export_stem_embeds_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        assert_eq!(export_stem(date), "分組結果_2026-08-26");
    }

    #[test]
    fn fs_export_writes_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FsExport::new(dir.path());
        let groups = sample_groups();

        let csv_path = exporter.export_csv(&groups).unwrap();
        assert_eq!(csv_path.extension().unwrap(), "csv");
        let bytes = fs::read(&csv_path).unwrap();
        assert_eq!(&bytes[..3], UTF8_BOM);

        let txt_path = exporter.export_text(&groups).unwrap();
        assert_eq!(txt_path.extension().unwrap(), "txt");
        let text = fs::read_to_string(&txt_path).unwrap();
        assert!(text.starts_with("第 1 組: "));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn fs_export_rejects_empty_groups() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FsExport::new(dir.path());
        assert!(matches!(
            exporter.export_csv(&[]),
            Err(ExportError::NoGroups)
        ));
        assert!(matches!(
            exporter.export_text(&[]),
            Err(ExportError::NoGroups)
        ));
    }

    #[test]
    fn fs_export_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports/today");
        let exporter = FsExport::new(&nested);
        let path = exporter.export_csv(&sample_groups()).unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }
}
