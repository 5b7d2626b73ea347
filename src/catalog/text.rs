// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

pub const MSGID_MARKER: &str = "msgid ";
pub const MSGSTR_MARKER: &str = "msgstr ";

/// Quote marks some translators put around Chinese terms, stripped from every non-blank line.
const DECORATIVE_QUOTES: [char; 2] = ['“', '”'];

const CJK_PUNCTUATION: [char; 11] = ['。', '，', '、', '！', '!', '?', '？', '/', '{', '%', '（'];

/// True if every character of `s` is an alphabetic letter.
///
/// Used to detect single-word source texts like `Play` or `Inspector`.
/// Letter-like numerals such as `Ⅻ` are alphabetic in Unicode but do not count as letters here.
pub fn is_all_alphabetic(s: &str) -> bool {
    s.chars().all(|c| c.is_alphabetic() && !c.is_numeric())
}

/// True if any character falls in the CJK Unified Ideographs block (U+4E00 to U+9FA5).
pub fn contains_ideograph(s: &str) -> bool {
    s.chars().any(|c| ('\u{4E00}'..='\u{9FA5}').contains(&c))
}

/// True if `s` contains punctuation that marks a translated sentence rather than a term.
pub fn contains_cjk_punctuation(s: &str) -> bool {
    s.chars().any(|c| CJK_PUNCTUATION.contains(&c))
}

pub fn strip_decorative_quotes(line: &str) -> String {
    line.replace(DECORATIVE_QUOTES, "")
}

/// Extract the quoted content following `marker "` in `line`.
///
/// Returns `None` if the marker is absent or occurs more than once.
/// Returns `Some("")` for an entry like `msgid ""`, callers decide what an empty value means.
pub fn extract_after_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let boundary = format!("{marker}\"");
    let mut parts = line.split(boundary.as_str());
    let _ = parts.next()?;
    let remainder = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let remainder = remainder.trim();
    let remainder = remainder.strip_suffix('"').unwrap_or(remainder);
    Some(remainder.trim())
}
