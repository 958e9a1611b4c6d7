//! Word concordance index: the driver around the binary search tree.
//!
//! [`WordIndex`] owns a `BinarySearchTree<WordRecord>` and implements the
//! aggregation policy: every incoming word is case-folded, looked up by
//! key, and either merged into the existing record in place or inserted as
//! a fresh record carrying its first occurrence. Reports are produced from
//! an in-order snapshot, so output is always alphabetical.
//!
//! # Examples
//!
//! ```
//! use concord::index::WordIndex;
//!
//! let mut index = WordIndex::new();
//! index.record("The", "a.txt", 1).unwrap();
//! index.record("the", "b.txt", 1).unwrap();
//! index.record("THE", "a.txt", 3).unwrap();
//!
//! let words: Vec<_> = index.words().map(|r| r.text().to_string()).collect();
//! assert_eq!(words, vec!["the"]);
//! assert_eq!(index.stats().total_occurrences, 3);
//! ```

pub mod record;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::{Tokenizer, WordTokenizer};
use crate::error::{ConcordError, Result};
use crate::tree::{BinarySearchTree, TreeIterator};

pub use record::WordRecord;

/// Summary counters for an index, recomputed on request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of distinct (case-folded) words.
    pub distinct_words: usize,

    /// Total number of recorded (file, line) occurrences.
    pub total_occurrences: usize,

    /// Height of the backing tree in node-count terms.
    pub tree_height: usize,
}

/// The concordance driver: a binary search tree of [`WordRecord`]s plus
/// the tokenize / normalize / merge-or-insert loop that fills it.
#[derive(Debug, Default)]
pub struct WordIndex {
    tree: BinarySearchTree<WordRecord>,
}

impl WordIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        WordIndex {
            tree: BinarySearchTree::new(),
        }
    }

    /// Wrap an existing tree, e.g. one loaded from a repository file.
    pub fn from_tree(tree: BinarySearchTree<WordRecord>) -> Self {
        WordIndex { tree }
    }

    /// Borrow the backing tree.
    pub fn tree(&self) -> &BinarySearchTree<WordRecord> {
        &self.tree
    }

    /// Surrender the backing tree, e.g. for persistence.
    pub fn into_tree(self) -> BinarySearchTree<WordRecord> {
        self.tree
    }

    /// Record one appearance of `word` at `line` of `file`.
    ///
    /// The word is case-folded before lookup. If a record with the same
    /// key exists it is mutated in place and `Ok(false)` is returned;
    /// otherwise a new record is inserted and `Ok(true)` is returned.
    ///
    /// Fails with [`ConcordError::InvalidArgument`] when `word` contains
    /// no usable text.
    pub fn record(&mut self, word: &str, file: &str, line: u32) -> Result<bool> {
        if word.trim().is_empty() {
            return Err(ConcordError::invalid_argument(
                "word must not be empty or whitespace",
            ));
        }

        let mut probe = WordRecord::new(word);
        if let Some(existing) = self.tree.search_mut(&probe) {
            existing.add_occurrence(file, line);
            Ok(false)
        } else {
            probe.add_occurrence(file, line);
            self.tree.insert(probe);
            Ok(true)
        }
    }

    /// Tokenize every line of `reader` and record each word under
    /// `file_id`, numbering lines from 1. Returns the number of
    /// occurrences recorded.
    pub fn process_reader<R: BufRead>(&mut self, reader: R, file_id: &str) -> Result<usize> {
        let tokenizer = WordTokenizer::new();
        let mut recorded = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = (index + 1) as u32;
            for word in tokenizer.tokenize(&line) {
                self.record(word, file_id, line_number)?;
                recorded += 1;
            }
        }

        Ok(recorded)
    }

    /// Open `path` and index its contents, using the path's display form
    /// as the file identifier. Returns the number of occurrences recorded.
    pub fn process_file(&mut self, path: &Path) -> Result<usize> {
        let file = File::open(path)?;
        let file_id = path.display().to_string();
        self.process_reader(BufReader::new(file), &file_id)
    }

    /// An in-order (alphabetical) snapshot of every record, for report
    /// generation.
    pub fn words(&self) -> TreeIterator<WordRecord> {
        self.tree.inorder_iter()
    }

    /// Whether the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Recompute the summary counters.
    pub fn stats(&self) -> IndexStats {
        let total_occurrences = self.words().map(|record| record.frequency()).sum();
        IndexStats {
            distinct_words: self.tree.len(),
            total_occurrences,
            tree_height: self.tree.height(),
        }
    }
}
