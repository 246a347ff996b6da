//! `layout-checkr`: scan a corpus of package top-level listings,
//! classify layout conventions, and check naming compliance.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and resolve the analysis mode.
//! 2. Load config ([`config::load_config`]).
//! 3. Load the corpus from the on-disk listing cache ([`corpus`]).
//! 4. Survey name frequencies, then classify and fold ([`aggregate`]),
//!    or evaluate per-package naming compliance ([`compliance`]).
//! 5. Render the requested output ([`report`], `--report` format).
//!
//! Aggregated data goes to stdout; progress and summaries go to
//! stderr, so the output stays pipeable.

mod aggregate;
mod classify;
mod cli;
mod compliance;
mod config;
mod corpus;
mod models;
mod normalize;
mod report;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use classify::dirs::DirRules;
use classify::files::FileRules;
use cli::{Cli, Mode, ReportFormat};
use config::{load_config, Config};
use models::Corpus;
use report::Section;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Reject an unknown mode before touching the filesystem.
    let mode = match Mode::parse(&cli.mode) {
        Some(mode) => mode,
        None => {
            eprintln!("No such analysis mode: {}", cli.mode);
            std::process::exit(1);
        }
    };

    // Resolve corpus path
    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    let config = load_config(&path, cli.config.as_deref())?;
    let root = config.corpus_root(&path);

    let corpus = corpus::load(&root, cli.quiet)?;
    if !cli.quiet {
        eprintln!(
            "  {} {} vendors, {} packages loaded",
            "→".cyan(),
            corpus.vendor_count(),
            corpus.package_count()
        );
    }

    match mode {
        Mode::Report => run_report(&cli, &config, &corpus, Section::Both)?,
        Mode::Dirs => run_report(&cli, &config, &corpus, Section::Directories)?,
        Mode::Files => run_report(&cli, &config, &corpus, Section::Files)?,
        Mode::DirNames => {
            let (dir_freq, _) = aggregate::count_names(&corpus);
            print!(
                "{}",
                report::text::render_names(
                    corpus.vendor_count(),
                    corpus.package_count(),
                    &dir_freq,
                    "directory"
                )
            );
        }
        Mode::FileNames => {
            let (_, file_freq) = aggregate::count_names(&corpus);
            print!(
                "{}",
                report::text::render_names(
                    corpus.vendor_count(),
                    corpus.package_count(),
                    &file_freq,
                    "file"
                )
            );
        }
        Mode::Compliance => run_compliance(&cli, &corpus)?,
        Mode::Dump => println!("{}", serde_json::to_string_pretty(&corpus)?),
    }

    Ok(())
}

/// Frequency survey, classification, and the grouped report.
fn run_report(cli: &Cli, config: &Config, corpus: &Corpus, section: Section) -> Result<()> {
    let (dir_freq, file_freq) = aggregate::count_names(corpus);
    let dir_rules = DirRules::with_min_occurrences(config.classify.min_occurrences);
    let file_rules = FileRules::with_min_occurrences(config.classify.min_occurrences)?;
    let report = aggregate::build_report(corpus, &dir_freq, &file_freq, &dir_rules, &file_rules);

    match cli.report {
        ReportFormat::Text => print!("{}", report::text::render(&report, section)),
        ReportFormat::Table => report::table::render(&report, section),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Per-package compliance: compliant ids on stdout, failures and the
/// summary on stderr.
fn run_compliance(cli: &Cli, corpus: &Corpus) -> Result<()> {
    let rules = compliance::ComplianceRules::new()?;
    let results = compliance::evaluate_corpus(corpus, &rules);

    let compliant: Vec<String> = results
        .iter()
        .filter(|r| r.is_compliant())
        .map(|r| r.id())
        .collect();

    match cli.report {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&compliant)?),
        _ => {
            for id in &compliant {
                println!("{}", id);
            }
        }
    }

    if cli.verbose {
        for result in results.iter().filter(|r| !r.is_compliant()) {
            eprintln!(
                "  {} {} fails: {}",
                "✗".red(),
                result.id(),
                result.failed.join(", ")
            );
        }
    }

    if !cli.quiet {
        eprintln!(
            "  {} {} of {} packages fully compliant",
            "→".cyan(),
            compliant.len(),
            results.len()
        );
    }

    Ok(())
}
