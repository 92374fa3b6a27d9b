//! Kitgen CLI - compile localized checklist JSON into a content repository.
//!
//! Reads a source directory holding one subdirectory per locale, folds the
//! flat records found there into a deduplicated category tree, and writes
//! the tree out as one file per addressable node under the destination
//! directory.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod build;

/// Compile flat checklist JSON into a hierarchical content repository.
///
/// The source directory holds one subdirectory per locale; each locale
/// directory holds `.json` files of flat records (`strings.json` is
/// reserved for translations and ignored). The destination directory is
/// populated with one file per category, subcategory, checks aggregate,
/// and item; existing files at those paths are overwritten.
#[derive(Parser)]
#[command(name = "kitgen")]
#[command(author, version)]
#[command(about = "Compile flat checklist JSON into a hierarchical content repository")]
struct Cli {
    /// Source directory (one subdirectory per locale)
    src: PathBuf,

    /// Destination directory for the generated repository
    dest: PathBuf,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let start = Instant::now();
    let summary = build::run(&cli.src, &cli.dest)?;

    if !cli.quiet {
        println!(
            "{} {} categories, {} files in {:.2?}",
            "Created".green().bold(),
            summary.categories,
            summary.artifacts,
            start.elapsed()
        );
        if summary.skipped_files > 0 {
            println!(
                "{} {} source file(s) skipped (undecodable)",
                "Warning:".yellow().bold(),
                summary.skipped_files
            );
        }
    }
    Ok(())
}
