// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error as TeError;
use tracing::info;

/// Live catalog path plus its `.bak` sibling.
///
/// Presence of the backup is the only persisted state telling a translated catalog
/// apart from a pristine one.
#[derive(Debug, Clone)]
pub struct CatalogBackup {
    live_path: PathBuf,
    backup_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupState {
    /// Only the live catalog exists, nothing was translated yet.
    Pristine,
    /// Backup and live catalog both exist.
    Translated,
    /// Backup exists but the live catalog is gone.
    LiveMissing,
    /// Neither file exists.
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    Restored,
    NothingToRestore,
}

#[derive(TeError, Debug)]
pub enum BackupError {
    #[error("Missing source catalog: neither {0:?} nor its backup exists, please install the Chinese language pack of the editor first")]
    MissingSourceCatalog(PathBuf),
    #[error("Fail to move {0:?} to {1:?}: {2}")]
    Move(PathBuf, PathBuf, #[source] std::io::Error),
    #[error("Fail to remove {0:?}: {1}")]
    Remove(PathBuf, #[source] std::io::Error),
}

impl CatalogBackup {
    pub fn new(live_path: &Path) -> Self {
        let mut backup_name = live_path.as_os_str().to_os_string();
        backup_name.push(".bak");
        CatalogBackup {
            live_path: live_path.to_path_buf(),
            backup_path: PathBuf::from(backup_name),
        }
    }

    pub fn live_path(&self) -> &Path {
        &self.live_path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    pub fn has_backup(&self) -> bool {
        self.backup_path.is_file()
    }

    pub fn state(&self) -> BackupState {
        match (self.live_path.is_file(), self.has_backup()) {
            (true, false) => BackupState::Pristine,
            (true, true) => BackupState::Translated,
            (false, true) => BackupState::LiveMissing,
            (false, false) => BackupState::Missing,
        }
    }

    /// Make sure the pristine copy sits at the backup path.
    ///
    /// Returns `true` if the backup was created by this call.
    pub fn ensure_backup(&self) -> Result<bool, BackupError> {
        match self.state() {
            BackupState::Pristine => {
                fs::rename(&self.live_path, &self.backup_path).map_err(|e| {
                    BackupError::Move(self.live_path.clone(), self.backup_path.clone(), e)
                })?;
                info!(backup = %self.backup_path.display(), "backup_created");
                Ok(true)
            },
            BackupState::Translated | BackupState::LiveMissing => Ok(false),
            BackupState::Missing => Err(BackupError::MissingSourceCatalog(self.live_path.clone())),
        }
    }

    /// Put the backup back in place of the live catalog.
    pub fn restore(&self) -> Result<RestoreOutcome, BackupError> {
        if !self.has_backup() {
            return Ok(RestoreOutcome::NothingToRestore);
        }
        if self.live_path.exists() {
            fs::remove_file(&self.live_path)
                .map_err(|e| BackupError::Remove(self.live_path.clone(), e))?;
        }
        fs::rename(&self.backup_path, &self.live_path).map_err(|e| {
            BackupError::Move(self.backup_path.clone(), self.live_path.clone(), e)
        })?;
        info!(catalog = %self.live_path.display(), "backup_restored");
        Ok(RestoreOutcome::Restored)
    }
}
