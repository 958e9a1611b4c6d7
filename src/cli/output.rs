//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{ConcordArgs, OutputFormat, ReportDetail};
use crate::error::Result;
use crate::index::{IndexStats, WordRecord};

/// Result structure for the index command.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexingResult {
    pub files_indexed: usize,
    pub occurrences_recorded: usize,
    pub new_words: usize,
    pub distinct_words: usize,
    pub duration_ms: u64,
    pub repository: String,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub repository: String,
    #[serde(flatten)]
    pub stats: IndexStats,
}

/// One row of the concordance report. Which fields are populated depends on
/// the requested [`ReportDetail`].
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportEntry {
    pub word: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<BTreeMap<String, Vec<u32>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<usize>,
}

impl ReportEntry {
    /// Project a [`WordRecord`] down to the fields the detail level shows.
    pub fn from_record(record: &WordRecord, detail: ReportDetail) -> Self {
        let files = match detail {
            ReportDetail::Files => Some(record.occurrences().keys().cloned().collect()),
            _ => None,
        };
        let lines = match detail {
            ReportDetail::Lines | ReportDetail::Occurrences => {
                Some(record.occurrences().clone())
            }
            ReportDetail::Files => None,
        };
        let frequency = match detail {
            ReportDetail::Occurrences => Some(record.frequency()),
            _ => None,
        };

        ReportEntry {
            word: record.text().to_string(),
            files,
            lines,
            frequency,
        }
    }
}

/// Render report entries as numbered human-readable text.
pub fn render_report(entries: &[ReportEntry]) -> String {
    let mut out = String::new();
    for (index, entry) in entries.iter().enumerate() {
        out.push_str(&format!("{} Key : {}\n", index + 1, entry.word));

        if let Some(files) = &entry.files {
            for file in files {
                out.push_str(&format!("  Found in file: {file}\n"));
            }
        }
        if let Some(lines) = &entry.lines {
            for (file, numbers) in lines {
                out.push_str(&format!("  Found in file: {file} on lines: {numbers:?}\n"));
            }
        }
        if let Some(frequency) = entry.frequency {
            out.push_str(&format!("  Total occurrences: {frequency}\n"));
        }
    }
    out
}

/// Print a command result in the format the top-level args selected:
/// the human summary line, or the value serialized as JSON.
pub fn emit<T: Serialize>(args: &ConcordArgs, human: &str, value: &T) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if !human.is_empty() {
                println!("{human}");
            }
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            println!("{json}");
        }
    }
    Ok(())
}
