// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error as TeError;

use crate::catalog::backup::BackupState;
use crate::catalog::reverter::CatalogReverter;
use crate::settings::{Settings, SettingsError};
use super::translate::SettingsOverrides;

#[derive(TeError, Debug)]
pub enum CmdError {
    #[error("Fail to load settings because: {0}")]
    Settings(#[from] SettingsError),
}

fn describe_state(state: BackupState) -> &'static str {
    match state {
        BackupState::Pristine => "original (not translated)",
        BackupState::Translated => "bilingual (backup present)",
        BackupState::LiveMissing => "backup present but catalog missing, run translate or restore",
        BackupState::Missing => "missing, install the Chinese language pack of the editor first",
    }
}

pub fn subcmd_status(settings_file: Option<PathBuf>, overrides: SettingsOverrides) -> Result<BackupState, CmdError> {
    let mut settings = Settings::load(settings_file.as_deref())?;
    overrides.apply(&mut settings);
    let catalog_path = settings.resolve_catalog_path()?;
    let reverter = CatalogReverter::new(&catalog_path);

    let state = reverter.state();
    println!("Catalog: {catalog_path:?}");
    println!("Backup:  {:?}", reverter.backup_path());
    println!("State:   {}", describe_state(state));
    Ok(state)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use super::*;

    #[test]
    fn tst_subcmd_status() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("zh-hans.po");
        let settings_file = dir.path().join("settings.yaml");
        fs::write(&settings_file, "skip_single_word: true\n").unwrap();
        let overrides = || SettingsOverrides {
            catalog: Some(catalog.clone()),
            ..SettingsOverrides::default()
        };

        assert_eq!(subcmd_status(Some(settings_file.clone()), overrides()).unwrap(), BackupState::Missing);
        fs::write(&catalog, "msgid \"Play\"\nmsgstr \"播放\"\n").unwrap();
        assert_eq!(subcmd_status(Some(settings_file.clone()), overrides()).unwrap(), BackupState::Pristine);
        fs::copy(&catalog, dir.path().join("zh-hans.po.bak")).unwrap();
        assert_eq!(subcmd_status(Some(settings_file), overrides()).unwrap(), BackupState::Translated);
    }
}
