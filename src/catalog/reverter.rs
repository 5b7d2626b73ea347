// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::path::Path;
use serde::Serialize;
use thiserror::Error as TeError;
use tracing::{debug, trace};

use super::backup::{BackupError, BackupState, CatalogBackup, RestoreOutcome};
use super::entry::{pair_entries, CatalogEntry, MsgstrLine};
use super::file::{CatalogFile, CatalogLoadError, CatalogSaveError};
use super::text;

// ===== Ignore List =====

/// Terms the user wants handled differently, compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    /// Entries whose source text is one of these always show the source text.
    source_terms: Vec<String>,
    /// Entries whose translation is one of these are never touched.
    translated_terms: Vec<String>,
}

fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

impl IgnoreList {
    pub fn new<S: AsRef<str>>(source_terms: &[S], translated_terms: &[S]) -> Self {
        IgnoreList {
            source_terms: source_terms.iter().map(|t| normalize_term(t.as_ref())).collect(),
            translated_terms: translated_terms.iter().map(|t| normalize_term(t.as_ref())).collect(),
        }
    }

    pub fn ignores_source(&self, source_text: &str) -> bool {
        let source_text = source_text.to_lowercase();
        self.source_terms.iter().any(|t| *t == source_text)
    }

    pub fn ignores_translation(&self, translated_text: &str) -> bool {
        let translated_text = translated_text.to_lowercase();
        self.translated_terms.iter().any(|t| *t == translated_text)
    }
}

// ===== Decision Policy =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Replace the translation with the source text.
    ForceSource,
    /// The translation is in the ignored translated terms.
    KeepIgnored,
    /// Looks like a sentence, a non-Chinese string or an intentional fragment.
    KeepHeuristic,
    /// Append `[source]` to the translation.
    Annotate,
}

#[derive(Debug, Clone)]
pub struct RevertPolicy {
    pub ignore_list: IgnoreList,
    pub skip_single_word: bool,
}

/// Per-decision counters of a revert pass.
#[derive(Debug, Default, Clone, Serialize, PartialEq, Eq)]
pub struct RevertStats {
    pub forced: u64,
    pub annotated: u64,
    pub kept_ignored: u64,
    pub kept_heuristic: u64,
    /// `msgstr` lines without a usable `msgid` right above them.
    pub unpaired: u64,
}

impl RevertStats {
    fn record(&mut self, decision: Decision) {
        match decision {
            Decision::ForceSource => self.forced += 1,
            Decision::Annotate => self.annotated += 1,
            Decision::KeepIgnored => self.kept_ignored += 1,
            Decision::KeepHeuristic => self.kept_heuristic += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.forced + self.annotated + self.kept_ignored + self.kept_heuristic + self.unpaired
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    pub line_index: usize,
    pub before: String,
    pub after: String,
}

impl RevertPolicy {
    /// First matching rule wins. `line` is the `msgstr` line after quote stripping.
    pub fn decide(&self, entry: &CatalogEntry, line: &str) -> Decision {
        let source_text = entry.source_text.as_str();
        if (self.skip_single_word && text::is_all_alphabetic(source_text))
            || self.ignore_list.ignores_source(source_text)
        {
            return Decision::ForceSource;
        }
        if self.ignore_list.ignores_translation(&entry.translated_text) {
            return Decision::KeepIgnored;
        }
        if text::contains_cjk_punctuation(line)
            || !text::contains_ideograph(line)
            || line.contains("...")
        {
            return Decision::KeepHeuristic;
        }
        Decision::Annotate
    }

    /// Run a full decision pass over `source`, returning the rewritten catalog.
    pub fn revert(&self, source: &CatalogFile) -> (CatalogFile, RevertStats) {
        let mut lines: Vec<String> = source
            .lines
            .iter()
            .map(|line| {
                if line.trim().is_empty() {
                    line.clone()
                } else {
                    text::strip_decorative_quotes(line)
                }
            })
            .collect();

        let mut stats = RevertStats::default();
        for msgstr in pair_entries(&lines) {
            let entry = match msgstr {
                MsgstrLine::Paired(entry) => entry,
                MsgstrLine::Unpaired { line_index } => {
                    trace!(line = line_index + 1, "unpaired_msgstr");
                    stats.unpaired += 1;
                    continue;
                },
            };
            let line = &mut lines[entry.line_index];
            let decision = self.decide(&entry, line);
            debug!(line = entry.line_index + 1, source = %entry.source_text, ?decision, "entry_decided");
            stats.record(decision);
            match decision {
                Decision::ForceSource => {
                    *line = format!("msgstr \"{}\"", entry.source_text);
                },
                Decision::Annotate => {
                    *line = annotate(line, &entry.source_text);
                },
                Decision::KeepIgnored | Decision::KeepHeuristic => {},
            }
        }

        let reverted = CatalogFile {
            lines,
            line_ending: source.line_ending,
        };
        (reverted, stats)
    }
}

/// `msgstr "翻译"` becomes `msgstr "翻译[Source]"`.
fn annotate(line: &str, source_text: &str) -> String {
    let line = line.trim_end();
    let body = line.strip_suffix('"').unwrap_or(line);
    format!("{body}[{source_text}]\"")
}

fn diff_lines(before: &CatalogFile, after: &CatalogFile) -> Vec<LineChange> {
    before
        .lines
        .iter()
        .zip(after.lines.iter())
        .enumerate()
        .filter(|(_, (b, a))| b != a)
        .map(|(line_index, (b, a))| LineChange {
            line_index,
            before: b.clone(),
            after: a.clone(),
        })
        .collect()
}

// ===== Catalog Reverter =====

#[derive(TeError, Debug)]
pub enum RevertError {
    #[error("{0}")]
    Backup(#[from] BackupError),
    #[error("{0}")]
    Load(#[from] CatalogLoadError),
    #[error("{0}")]
    Save(#[from] CatalogSaveError),
}

#[derive(Debug, Clone)]
pub struct TranslateReport {
    pub stats: RevertStats,
    /// The pristine catalog was moved to the backup path during this run.
    pub backup_created: bool,
    pub changes: Vec<LineChange>,
}

/// Owns one catalog path and its backup for the duration of a command.
pub struct CatalogReverter {
    backup: CatalogBackup,
}

impl CatalogReverter {
    pub fn new(catalog_path: &Path) -> Self {
        CatalogReverter {
            backup: CatalogBackup::new(catalog_path),
        }
    }

    pub fn backup_path(&self) -> &Path {
        self.backup.backup_path()
    }

    pub fn state(&self) -> BackupState {
        self.backup.state()
    }

    /// Rewrite the live catalog from the pristine backup.
    ///
    /// The backup is always the input, so running this twice gives the same result as once.
    pub fn translate(&self, policy: &RevertPolicy) -> Result<TranslateReport, RevertError> {
        let backup_created = self.backup.ensure_backup()?;
        let source = CatalogFile::load_from_file(self.backup.backup_path())?;
        let (reverted, stats) = policy.revert(&source);
        let changes = diff_lines(&source, &reverted);
        reverted.save_into_file(self.backup.live_path())?;
        Ok(TranslateReport {
            stats,
            backup_created,
            changes,
        })
    }

    /// Same decision pass as [`Self::translate`], without touching the disk.
    pub fn preview(&self, policy: &RevertPolicy) -> Result<TranslateReport, RevertError> {
        let source_path = match self.backup.state() {
            BackupState::Translated | BackupState::LiveMissing => self.backup.backup_path(),
            BackupState::Pristine => self.backup.live_path(),
            BackupState::Missing => {
                return Err(BackupError::MissingSourceCatalog(self.backup.live_path().to_path_buf()).into());
            },
        };
        let source = CatalogFile::load_from_file(source_path)?;
        let (reverted, stats) = policy.revert(&source);
        Ok(TranslateReport {
            stats,
            backup_created: false,
            changes: diff_lines(&source, &reverted),
        })
    }

    pub fn restore(&self) -> Result<RestoreOutcome, RevertError> {
        Ok(self.backup.restore()?)
    }
}
