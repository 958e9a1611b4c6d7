//! # Concord
//!
//! A word concordance indexer for Rust: reads text files, tracks every word's
//! occurrences by file and line number, and persists the index between runs.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Binary search tree index with in-order, pre-order, and post-order traversal
//! - Case-folded word aggregation with per-file line positions
//! - Unicode word-boundary tokenization
//! - Checksummed repository persistence across runs
//! - Human and JSON report output

pub mod analysis;
pub mod cli;
pub mod error;
pub mod index;
pub mod storage;
pub mod tree;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
