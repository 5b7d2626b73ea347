// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error as TeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Guess from the first line break of the content.
    fn detect(content: &str) -> Self {
        match content.find('\n') {
            Some(pos) if content[..pos].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }
}

/// The whole catalog as an ordered list of lines, without their terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFile {
    pub lines: Vec<String>,
    pub line_ending: LineEnding,
}

// ===== Catalog Load & Save =====

#[derive(TeError, Debug)]
pub enum CatalogLoadError {
    #[error("Fail to read catalog file {0:?}: {1}")]
    ReadFile(PathBuf, #[source] std::io::Error),
}

#[derive(TeError, Debug)]
pub enum CatalogSaveError {
    #[error("Fail to write temporary catalog file {0:?}: {1}")]
    WriteTemp(PathBuf, #[source] std::io::Error),
    #[error("Fail to move temporary catalog file into {0:?}: {1}")]
    Replace(PathBuf, #[source] std::io::Error),
}

impl CatalogFile {
    pub fn from_str(content: &str) -> Self {
        let line_ending = LineEnding::detect(content);
        let lines = content
            .lines()
            .map(str::to_string)
            .collect();
        CatalogFile { lines, line_ending }
    }

    pub fn load_from_file(catalog_file: &Path) -> Result<Self, CatalogLoadError> {
        let content = fs::read_to_string(catalog_file)
            .map_err(|e| CatalogLoadError::ReadFile(catalog_file.to_path_buf(), e))?;
        Ok(Self::from_str(&content))
    }

    /// Every line is terminated, including the last one.
    pub fn to_str(&self) -> String {
        let ending = self.line_ending.as_str();
        let mut content = String::new();
        for line in &self.lines {
            content.push_str(line);
            content.push_str(ending);
        }
        content
    }

    /// Write into a sibling temporary file and flush it to disk first, then rename it
    /// over `catalog_file`, so the live catalog is never left half-written.
    pub fn save_into_file(&self, catalog_file: &Path) -> Result<(), CatalogSaveError> {
        let temp_file = temp_path_for(catalog_file);
        write_synced(&temp_file, self.to_str().as_bytes()).map_err(|e| {
            let _ = fs::remove_file(&temp_file);
            CatalogSaveError::WriteTemp(temp_file.clone(), e)
        })?;
        fs::rename(&temp_file, catalog_file).map_err(|e| {
            let _ = fs::remove_file(&temp_file);
            CatalogSaveError::Replace(catalog_file.to_path_buf(), e)
        })
    }
}

fn write_synced(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

fn temp_path_for(target: &Path) -> PathBuf {
    let mut file_name = target.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    file_name.push(format!(".tmp{}", std::process::id()));
    target.with_file_name(file_name)
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn tst_parse_lf_content() {
        let catalog = CatalogFile::from_str("msgid \"Play\"\nmsgstr \"播放\"\n\n");
        assert_eq!(catalog.line_ending, LineEnding::Lf);
        assert_eq!(catalog.lines, vec!["msgid \"Play\"", "msgstr \"播放\"", ""]);
        assert_eq!(catalog.to_str(), "msgid \"Play\"\nmsgstr \"播放\"\n\n");
    }

    #[test]
    fn tst_parse_crlf_content() {
        let catalog = CatalogFile::from_str("msgid \"Play\"\r\nmsgstr \"播放\"");
        assert_eq!(catalog.line_ending, LineEnding::CrLf);
        assert_eq!(catalog.lines, vec!["msgid \"Play\"", "msgstr \"播放\""]);
        // the missing final terminator is added back
        assert_eq!(catalog.to_str(), "msgid \"Play\"\r\nmsgstr \"播放\"\r\n");
    }

    #[test]
    fn tst_save_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zh-hans.po");
        fs::write(&path, "old content\n").unwrap();
        let catalog = CatalogFile::from_str("msgid \"Play\"\nmsgstr \"Play\"\n");
        catalog.save_into_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "msgid \"Play\"\nmsgstr \"Play\"\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
        let reloaded = CatalogFile::load_from_file(&path).unwrap();
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn tst_write_synced_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zh-hans.po.tmp");
        fs::write(&path, "a much longer previous content\n").unwrap();
        write_synced(&path, "msgstr \"Play\"\n".as_bytes()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "msgstr \"Play\"\n");
    }

    #[test]
    fn tst_save_into_missing_dir_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("zh-hans.po");
        let catalog = CatalogFile::from_str("msgid \"Play\"\nmsgstr \"Play\"\n");
        assert!(matches!(catalog.save_into_file(&path), Err(CatalogSaveError::WriteTemp(..))));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
