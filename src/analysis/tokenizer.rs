//! Word tokenizer built on Unicode word boundaries.
//!
//! Splits text using the Unicode Text Segmentation rules (UAX #29) and
//! keeps only the segments that contain an alphanumeric character, so
//! punctuation and whitespace never reach the index.
//!
//! # Examples
//!
//! ```
//! use concord::analysis::{Tokenizer, WordTokenizer};
//!
//! let tokenizer = WordTokenizer::new();
//! let words = tokenizer.tokenize("Hello, world! It's can't-miss.");
//!
//! assert_eq!(words, vec!["Hello", "world", "It's", "can't", "miss"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Trait for tokenizers that split a line of text into word tokens.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into word tokens, preserving input order.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Non-word segments (whitespace, punctuation runs) are dropped. Word
/// bounds keep interior apostrophes and split on hyphens, which matches
/// how the concordance counts "it's" as one word and "can't-miss" as two.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_word_bounds()
            .filter(|segment| segment.chars().any(|c| c.is_alphanumeric()))
            .collect()
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
