// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use super::text::{extract_after_marker, MSGID_MARKER, MSGSTR_MARKER};

/// A `msgid` line and the `msgstr` line right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub source_text: String,
    pub translated_text: String,
    /// Index of the `msgstr` line. The `msgid` line is always at `line_index - 1`.
    pub line_index: usize,
}

/// Every line starting with `msgstr` is reported, paired or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MsgstrLine {
    Paired(CatalogEntry),
    /// No usable `msgid` right above.
    Unpaired { line_index: usize },
}

/// Pair each `msgstr` line with the `msgid` line immediately preceding it.
///
/// Only strict adjacency is recognized. Context lines, comments or continuation
/// strings between the two break the pair, and an empty `msgid ""` (the header entry)
/// never pairs.
pub fn pair_entries(lines: &[String]) -> Vec<MsgstrLine> {
    let mut result = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() || !line.starts_with("msgstr") {
            continue;
        }
        let source_text = index
            .checked_sub(1)
            .and_then(|prev| extract_after_marker(&lines[prev], MSGID_MARKER))
            .filter(|text| !text.is_empty());
        // An irregular msgstr line still pairs, its whole trimmed text stands in for the translation.
        let translated_text = extract_after_marker(line, MSGSTR_MARKER).unwrap_or(line.trim());
        let paired = match source_text {
            Some(source_text) => MsgstrLine::Paired(CatalogEntry {
                source_text: source_text.to_string(),
                translated_text: translated_text.to_string(),
                line_index: index,
            }),
            None => MsgstrLine::Unpaired { line_index: index },
        };
        result.push(paired);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(content: &str) -> Vec<String> {
        content.lines().map(str::to_string).collect()
    }

    #[test]
    fn tst_pair_entries() {
        let lines = lines(r#"msgid ""
msgstr ""
"Language: zh_CN\n"

msgid "Play"
msgstr "播放"

msgctxt "Menu"
msgid "Save changes to scene"
msgstr "保存更改到场景"

msgctxt "Orphan"
msgstr "孤立"
"#);
        let entries = pair_entries(&lines);
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], MsgstrLine::Unpaired { line_index: 1 });
        assert_eq!(entries[1], MsgstrLine::Paired(CatalogEntry {
            source_text: "Play".to_string(),
            translated_text: "播放".to_string(),
            line_index: 5,
        }));
        match &entries[2] {
            MsgstrLine::Paired(entry) => {
                assert_eq!(entry.source_text, "Save changes to scene");
                assert_eq!(entry.line_index, 9);
            },
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(entries[3], MsgstrLine::Unpaired { line_index: 12 });
    }

    #[test]
    fn tst_pair_irregular_msgstr() {
        let lines = lines("msgid \"Play\"\nmsgstr  \"播放\"\n\nmsgid \"Open\"\nmsgstr \"打开 msgstr \"x\"\n");
        assert_eq!(pair_entries(&lines), vec![
            MsgstrLine::Paired(CatalogEntry {
                source_text: "Play".to_string(),
                translated_text: "msgstr  \"播放\"".to_string(),
                line_index: 1,
            }),
            MsgstrLine::Paired(CatalogEntry {
                source_text: "Open".to_string(),
                translated_text: "msgstr \"打开 msgstr \"x\"".to_string(),
                line_index: 4,
            }),
        ]);
    }

    #[test]
    fn tst_msgstr_on_first_line() {
        let lines = lines("msgstr \"播放\"\n");
        assert_eq!(pair_entries(&lines), vec![MsgstrLine::Unpaired { line_index: 0 }]);
    }
}
