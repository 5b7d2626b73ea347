// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error as TeError;

use crate::catalog::reverter::{IgnoreList, RevertPolicy};

/// Name of the Simplified Chinese catalog shipped with the editor's language pack.
pub const CATALOG_FILE_NAME: &str = "zh-hans.po";

pub const SETTINGS_TEMPLATE: &str = r#"# Settings for bilingual-po-utils
#
# Path to the catalog to patch. Takes precedence over editor_path.
# catalog_path: /opt/Editor/Data/Localization/zh-hans.po
#
# Editor installation, used to locate <editor>/Data/Localization/zh-hans.po
# or <editor>/Contents/Localization/zh-hans.po when catalog_path is not set.
# editor_path: /Applications/Editor.app

# Show single English words (e.g. "Play") instead of their translation.
skip_single_word: true

# Source terms always shown in English, case-insensitive.
ignored_source_terms: []

# Translations that are never touched, case-insensitive.
ignored_translated_terms: []
"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub editor_path: Option<PathBuf>,
    pub skip_single_word: bool,
    pub ignored_source_terms: Vec<String>,
    pub ignored_translated_terms: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            catalog_path: None,
            editor_path: None,
            skip_single_word: true,
            ignored_source_terms: vec![],
            ignored_translated_terms: vec![],
        }
    }
}

#[derive(TeError, Debug)]
pub enum SettingsError {
    #[error("Settings file {0:?} does not exist")]
    FileNotFound(PathBuf),
    #[error("Can not read settings file {0:?}: {1}")]
    ReadFile(PathBuf, #[source] std::io::Error),
    #[error("Fail to deserialize settings file {0:?}: {1}")]
    ParseError(PathBuf, String),
    #[error("Not able to get the configuration directory")]
    NoConfigDir,
    #[error("No catalog configured. Pass --catalog or --editor-path, or set catalog_path in the settings file")]
    NoCatalogPath,
}

pub fn default_settings_file() -> Result<PathBuf, SettingsError> {
    let xdg_proj_dirs = ProjectDirs::from("", "bilingual-po", "bilingual-po-utils")
        .ok_or(SettingsError::NoConfigDir)?;
    Ok(xdg_proj_dirs.config_dir().join("settings.yaml"))
}

impl Settings {
    pub fn from_str(content: &str) -> Result<Self, String> {
        serde_yaml2::from_str::<Settings>(content).map_err(|err| err.to_string())
    }

    pub fn load_from_file(settings_file: &Path) -> Result<Self, SettingsError> {
        if !settings_file.is_file() {
            return Err(SettingsError::FileNotFound(settings_file.to_path_buf()));
        }
        let source_content = fs::read_to_string(settings_file)
            .map_err(|e| SettingsError::ReadFile(settings_file.to_path_buf(), e))?;
        Self::from_str(&source_content)
            .map_err(|e| SettingsError::ParseError(settings_file.to_path_buf(), e))
    }

    /// Load the explicitly given settings file, or the default one if it exists.
    ///
    /// A missing default file is not an error, defaults are used instead.
    pub fn load(explicit_file: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(settings_file) = explicit_file {
            return Self::load_from_file(settings_file);
        }
        let settings_file = default_settings_file()?;
        if settings_file.is_file() {
            Self::load_from_file(&settings_file)
        } else {
            Ok(Settings::default())
        }
    }

    pub fn ignore_list(&self) -> IgnoreList {
        IgnoreList::new(self.ignored_source_terms.as_slice(), self.ignored_translated_terms.as_slice())
    }

    pub fn revert_policy(&self) -> RevertPolicy {
        RevertPolicy {
            ignore_list: self.ignore_list(),
            skip_single_word: self.skip_single_word,
        }
    }

    pub fn resolve_catalog_path(&self) -> Result<PathBuf, SettingsError> {
        if let Some(catalog_path) = &self.catalog_path {
            return Ok(catalog_path.clone());
        }
        match &self.editor_path {
            Some(editor_path) => Ok(locate_catalog_in_editor(editor_path)),
            None => Err(SettingsError::NoCatalogPath),
        }
    }
}

/// Find the catalog inside an editor installation.
///
/// `editor_path` may be the editor executable, its directory, or a macOS app bundle.
/// An executable always maps to `<its dir>/Data/Localization`. For a directory, that
/// layout is preferred when it exists, otherwise the app bundle's `Contents/Localization`.
pub fn locate_catalog_in_editor(editor_path: &Path) -> PathBuf {
    if editor_path.is_file() {
        let editor_dir = editor_path.parent().unwrap_or(Path::new(""));
        return editor_dir.join("Data").join("Localization").join(CATALOG_FILE_NAME);
    }
    let data_localization = editor_path.join("Data").join("Localization");
    if data_localization.is_dir() {
        return data_localization.join(CATALOG_FILE_NAME);
    }
    editor_path.join("Contents").join("Localization").join(CATALOG_FILE_NAME)
}
