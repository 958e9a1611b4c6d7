//! Word record: one indexed word and every place it occurred.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single concordance entry: a case-folded word plus the map from source
/// file to the ordered list of line numbers where the word occurred.
///
/// Ordering and equality are defined solely by the folded text, so the
/// tree places records alphabetically regardless of how many occurrences
/// they carry. The occurrence map is mutated in place when a duplicate key
/// is found during indexing; a record is never re-inserted.
///
/// # Examples
///
/// ```
/// use concord::index::record::WordRecord;
///
/// let mut record = WordRecord::new("The");
/// record.add_occurrence("a.txt", 1);
/// record.add_occurrence("b.txt", 1);
/// record.add_occurrence("a.txt", 3);
///
/// assert_eq!(record.text(), "the");
/// assert_eq!(record.lines_in("a.txt"), Some(&[1, 3][..]));
/// assert_eq!(record.frequency(), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordRecord {
    text: String,
    occurrences: BTreeMap<String, Vec<u32>>,
}

impl WordRecord {
    /// Create a record for `text`, case-folding it before storage.
    ///
    /// All comparisons use the folded form, so `"The"` and `"the"` produce
    /// equal records.
    pub fn new(text: &str) -> Self {
        WordRecord {
            text: text.to_lowercase(),
            occurrences: BTreeMap::new(),
        }
    }

    /// Record one appearance of the word at `line` of `file`.
    ///
    /// The file's line list is created on first sight. Lines are kept in
    /// insertion order and duplicates are preserved verbatim: a word
    /// appearing twice on one line counts twice.
    pub fn add_occurrence(&mut self, file: &str, line: u32) {
        self.occurrences.entry(file.to_string()).or_default().push(line);
    }

    /// The case-folded word text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The full file → line-numbers map.
    pub fn occurrences(&self) -> &BTreeMap<String, Vec<u32>> {
        &self.occurrences
    }

    /// The recorded lines for one file, if the word occurred there.
    pub fn lines_in(&self, file: &str) -> Option<&[u32]> {
        self.occurrences.get(file).map(Vec::as_slice)
    }

    /// Total occurrence count across all files.
    ///
    /// Recomputed on every call; the record caches nothing.
    pub fn frequency(&self) -> usize {
        self.occurrences.values().map(Vec::len).sum()
    }
}

impl PartialEq for WordRecord {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for WordRecord {}

impl Ord for WordRecord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.text.cmp(&other.text)
    }
}

impl PartialOrd for WordRecord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for WordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_case_folded() {
        assert_eq!(WordRecord::new("HELLO").text(), "hello");
        assert_eq!(WordRecord::new("MiXeD").text(), "mixed");
        assert_eq!(WordRecord::new("STRASSE").text(), "strasse");
    }

    #[test]
    fn test_equality_ignores_occurrences() {
        let mut a = WordRecord::new("The");
        let b = WordRecord::new("the");
        a.add_occurrence("a.txt", 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_ordering_is_alphabetical() {
        let bird = WordRecord::new("bird");
        let cat = WordRecord::new("Cat");
        let dog = WordRecord::new("dog");
        assert!(bird < cat);
        assert!(cat < dog);
    }

    #[test]
    fn test_occurrences_accumulate_per_file() {
        let mut record = WordRecord::new("The");
        record.add_occurrence("a.txt", 1);
        record.add_occurrence("b.txt", 1);
        record.add_occurrence("a.txt", 3);

        assert_eq!(record.lines_in("a.txt"), Some(&[1, 3][..]));
        assert_eq!(record.lines_in("b.txt"), Some(&[1][..]));
        assert_eq!(record.lines_in("c.txt"), None);
        assert_eq!(record.frequency(), 3);
    }

    #[test]
    fn test_duplicate_lines_preserved() {
        let mut record = WordRecord::new("buffalo");
        record.add_occurrence("a.txt", 7);
        record.add_occurrence("a.txt", 7);

        assert_eq!(record.lines_in("a.txt"), Some(&[7, 7][..]));
        assert_eq!(record.frequency(), 2);
    }

    #[test]
    fn test_fresh_record_has_zero_frequency() {
        let record = WordRecord::new("nothing");
        assert_eq!(record.frequency(), 0);
        assert!(record.occurrences().is_empty());
    }

    #[test]
    fn test_display_renders_folded_text() {
        assert_eq!(WordRecord::new("Word").to_string(), "word");
    }
}
