// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error as TeError;

use crate::catalog::backup::RestoreOutcome;
use crate::catalog::reverter::{CatalogReverter, RevertError};
use crate::settings::{Settings, SettingsError};
use super::translate::SettingsOverrides;

#[derive(TeError, Debug)]
pub enum CmdError {
    #[error("Fail to load settings because: {0}")]
    Settings(#[from] SettingsError),
    #[error("Restore failed: {0}")]
    Revert(#[from] RevertError),
}

pub fn subcmd_restore(settings_file: Option<PathBuf>, overrides: SettingsOverrides) -> Result<RestoreOutcome, CmdError> {
    let mut settings = Settings::load(settings_file.as_deref())?;
    overrides.apply(&mut settings);
    let catalog_path = settings.resolve_catalog_path()?;
    let reverter = CatalogReverter::new(&catalog_path);

    let outcome = reverter.restore()?;
    match outcome {
        RestoreOutcome::Restored => {
            println!("Restored original catalog: {catalog_path:?}");
            println!("Restart the editor to apply the change.");
        },
        RestoreOutcome::NothingToRestore => {
            println!("Nothing to restore, {:?} does not exist.", reverter.backup_path());
        },
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use super::*;

    #[test]
    fn tst_subcmd_restore() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("zh-hans.po");
        let settings_file = dir.path().join("settings.yaml");
        fs::write(&settings_file, format!("catalog_path: {}\n", catalog.display())).unwrap();
        fs::write(&catalog, "msgid \"Play\"\nmsgstr \"播放\"\n").unwrap();

        let outcome = subcmd_restore(Some(settings_file.clone()), SettingsOverrides::default()).unwrap();
        assert_eq!(outcome, RestoreOutcome::NothingToRestore);
        assert_eq!(fs::read_to_string(&catalog).unwrap(), "msgid \"Play\"\nmsgstr \"播放\"\n");

        fs::rename(&catalog, dir.path().join("zh-hans.po.bak")).unwrap();
        fs::write(&catalog, "msgid \"Play\"\nmsgstr \"Play\"\n").unwrap();
        let outcome = subcmd_restore(Some(settings_file), SettingsOverrides::default()).unwrap();
        assert_eq!(outcome, RestoreOutcome::Restored);
        assert_eq!(fs::read_to_string(&catalog).unwrap(), "msgid \"Play\"\nmsgstr \"播放\"\n");
    }
}
