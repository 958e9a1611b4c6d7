//! Command implementations for the Concord CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::index::WordIndex;
use crate::storage;

/// Execute a CLI command.
pub fn execute_command(args: ConcordArgs) -> Result<()> {
    match &args.command {
        Command::Index(index_args) => index_files(index_args.clone(), &args),
        Command::Report(report_args) => print_report(report_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Load the repository at `repo`, or start a fresh index when the file is
/// missing or unreadable. A corrupt repository is reported on stderr but
/// never fatal; indexing proceeds against an empty tree.
fn load_index(repo: &Path, verbosity: u8) -> WordIndex {
    match storage::load_repository(repo) {
        Ok(tree) => {
            if verbosity > 1 {
                println!(
                    "Loaded repository {} ({} words)",
                    repo.display(),
                    tree.len()
                );
            }
            WordIndex::from_tree(tree)
        }
        Err(e) => {
            eprintln!(
                "Could not load repository {}: {e}. Starting a new tree.",
                repo.display()
            );
            WordIndex::new()
        }
    }
}

/// Index one or more files into the repository.
fn index_files(args: IndexArgs, cli_args: &ConcordArgs) -> Result<()> {
    let start = Instant::now();
    let mut index = load_index(&args.repo, cli_args.verbosity());
    let words_before = index.len();

    let mut occurrences = 0;
    for file in &args.files {
        if cli_args.verbosity() > 1 {
            println!("Indexing: {}", file.display());
        }
        occurrences += index.process_file(file)?;
    }

    storage::save_repository(&args.repo, index.tree())?;

    let result = IndexingResult {
        files_indexed: args.files.len(),
        occurrences_recorded: occurrences,
        new_words: index.len() - words_before,
        distinct_words: index.len(),
        duration_ms: start.elapsed().as_millis() as u64,
        repository: args.repo.display().to_string(),
    };

    emit(
        cli_args,
        &format!(
            "Indexed {} file(s): {} occurrence(s), {} new word(s). Repository saved to {}.",
            result.files_indexed,
            result.occurrences_recorded,
            result.new_words,
            result.repository
        ),
        &result,
    )
}

/// Print the concordance report, alphabetically, at the requested detail.
fn print_report(args: ReportArgs, cli_args: &ConcordArgs) -> Result<()> {
    let index = load_index(&args.repo, cli_args.verbosity());
    let entries: Vec<ReportEntry> = index
        .words()
        .map(|record| ReportEntry::from_record(&record, args.detail))
        .collect();

    match &args.output {
        Some(path) => {
            // File output keeps the human rendering regardless of --format.
            fs::write(path, render_report(&entries))?;
            if cli_args.verbosity() > 0 {
                println!("Report written to {}", path.display());
            }
        }
        None => match cli_args.output_format {
            OutputFormat::Human => print!("{}", render_report(&entries)),
            OutputFormat::Json => emit(cli_args, "", &entries)?,
        },
    }

    Ok(())
}

/// Show summary statistics for the repository.
fn show_stats(args: StatsArgs, cli_args: &ConcordArgs) -> Result<()> {
    let index = load_index(&args.repo, cli_args.verbosity());
    let stats = index.stats();

    let human = format!(
        "Repository: {}\nDistinct words: {}\nTotal occurrences: {}\nTree height: {}",
        args.repo.display(),
        stats.distinct_words,
        stats.total_occurrences,
        stats.tree_height
    );
    let result = StatsResult {
        repository: args.repo.display().to_string(),
        stats,
    };

    emit(cli_args, &human, &result)
}
