//! Text analysis module for Concord.
//!
//! Tokenization is deliberately thin: the concordance only needs line →
//! word splitting. Case normalization is not the tokenizer's job; it
//! happens in [`WordRecord::new`](crate::index::record::WordRecord::new) so
//! that every entry path folds identically.

pub mod tokenizer;

// Re-export commonly used types
pub use tokenizer::{Tokenizer, WordTokenizer};
