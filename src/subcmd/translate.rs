// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error as TeError;

use crate::catalog::reverter::{CatalogReverter, RevertError, TranslateReport};
use crate::settings::{Settings, SettingsError};

#[derive(TeError, Debug)]
pub enum CmdError {
    #[error("Fail to load settings because: {0}")]
    Settings(#[from] SettingsError),
    #[error("Translation failed: {0}")]
    Revert(#[from] RevertError),
}

/// Command line values that take precedence over the settings file.
#[derive(Debug, Default)]
pub struct SettingsOverrides {
    pub catalog: Option<PathBuf>,
    pub editor_path: Option<PathBuf>,
    pub keep_single_word: bool,
    pub ignore_source: Vec<String>,
    pub ignore_translated: Vec<String>,
}

impl SettingsOverrides {
    pub fn apply(self, settings: &mut Settings) {
        if let Some(catalog) = self.catalog {
            settings.catalog_path = Some(catalog);
        }
        if let Some(editor_path) = self.editor_path {
            settings.editor_path = Some(editor_path);
        }
        if self.keep_single_word {
            settings.skip_single_word = false;
        }
        settings.ignored_source_terms.extend(self.ignore_source);
        settings.ignored_translated_terms.extend(self.ignore_translated);
    }
}

fn print_report(report: &TranslateReport) {
    let stats = &report.stats;
    println!("Entries processed:      {}", stats.total());
    println!("  Shown in English:     {}", stats.forced);
    println!("  Bilingual:            {}", stats.annotated);
    println!("  Kept (ignored):       {}", stats.kept_ignored);
    println!("  Kept (heuristics):    {}", stats.kept_heuristic);
    println!("  Skipped (no msgid):   {}", stats.unpaired);
}

pub fn subcmd_translate(settings_file: Option<PathBuf>, overrides: SettingsOverrides, dry_run: bool) -> Result<(), CmdError> {
    let mut settings = Settings::load(settings_file.as_deref())?;
    overrides.apply(&mut settings);
    let catalog_path = settings.resolve_catalog_path()?;
    let policy = settings.revert_policy();
    let reverter = CatalogReverter::new(&catalog_path);

    if dry_run {
        let report = reverter.preview(&policy)?;
        for change in &report.changes {
            println!("{}:{}", catalog_path.display(), change.line_index + 1);
            println!("  - {}", change.before);
            println!("  + {}", change.after);
        }
        print_report(&report);
        println!("Dry run, {catalog_path:?} was not modified.");
        return Ok(());
    }

    let report = reverter.translate(&policy)?;
    if report.backup_created {
        println!("Backed up original catalog to: {:?}", reverter.backup_path());
    }
    print_report(&report);
    println!("Wrote bilingual catalog to: {catalog_path:?}");
    println!("Restart the editor to apply the change.");
    Ok(())
}
