// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::PathBuf;
use thiserror::Error as TeError;

use crate::settings::{default_settings_file, Settings, SettingsError, SETTINGS_TEMPLATE};
use super::translate::SettingsOverrides;

#[derive(TeError, Debug)]
pub enum CmdError {
    #[error("Fail to load settings because: {0}")]
    Settings(#[from] SettingsError),
    #[error("Fail to write settings file {0:?}: {1}")]
    WriteFile(PathBuf, #[source] std::io::Error),
    #[error("Fail to serialize settings: {0}")]
    Serialize(String),
}

/// Write the commented settings template, unless a settings file is already there.
pub fn subcmd_init_config(settings_file: Option<PathBuf>) -> Result<PathBuf, CmdError> {
    let settings_file = match settings_file {
        Some(settings_file) => settings_file,
        None => default_settings_file()?,
    };
    if settings_file.exists() {
        println!("Note: {settings_file:?} file already exists, not overwriting it.");
        println!("You can use the following context to update the file manually:\n");
        println!("{SETTINGS_TEMPLATE}");
    } else {
        if let Some(parent_dir) = settings_file.parent() {
            fs::create_dir_all(parent_dir).map_err(|e| CmdError::WriteFile(settings_file.clone(), e))?;
        }
        fs::write(&settings_file, SETTINGS_TEMPLATE).map_err(|e| CmdError::WriteFile(settings_file.clone(), e))?;
        println!("Generated settings file at: {settings_file:?}");
    }
    Ok(settings_file)
}

/// Print the settings in effect after applying command line overrides.
pub fn subcmd_show_config(settings_file: Option<PathBuf>, overrides: SettingsOverrides) -> Result<(), CmdError> {
    let mut settings = Settings::load(settings_file.as_deref())?;
    overrides.apply(&mut settings);
    let content = serde_yaml2::to_string(&settings).map_err(|e| CmdError::Serialize(e.to_string()))?;
    println!("{content}");
    if let Ok(catalog_path) = settings.resolve_catalog_path() {
        println!("# resolved catalog: {}", catalog_path.display());
    }
    Ok(())
}
