pub mod aggregate;
pub mod analyzer;
pub mod collab;
pub mod config;
pub mod report;
pub mod rules;
pub mod walker;

use crate::analyzer::Analyzer;
use crate::config::AnalyzerConfig;
use crate::report::Diagnostic;
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a Python file or a directory to analyze.
    /// Directories are walked recursively for `.py` files.
    path: PathBuf,

    /// Disallowed import modules, comma separated.
    /// Overrides the default set (os, subprocess).
    #[arg(long, value_delimiter = ',')]
    ban: Option<Vec<String>>,

    /// Output raw JSON.
    /// If true, the output will be in JSON format for machine parsing.
    #[arg(long)]
    json: bool,
}

/// The per-file result emitted by the CLI.
#[derive(Serialize)]
struct FileReport {
    /// The analyzed file.
    file: PathBuf,
    /// Diagnostics in visitation order.
    diagnostics: Vec<Diagnostic>,
}

/// Main entry point of the application.
///
/// Parses arguments, collects the target files, analyzes them in parallel
/// and prints either a colored human-readable report or JSON.
fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.json {
        println!("Analyzing path: {:?}", cli.path);
    }

    // Build the immutable configuration once; every file analysis shares it.
    let config = match cli.ban {
        Some(banned) => AnalyzerConfig::with_banned_imports(banned),
        None => AnalyzerConfig::default(),
    };
    let analyzer = Analyzer::new(config);

    // Collect the Python files to analyze. A single file is taken as-is,
    // a directory is walked recursively.
    let files: Vec<PathBuf> = if cli.path.is_file() {
        vec![cli.path.clone()]
    } else {
        WalkDir::new(&cli.path)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "py"))
            .map(|e| e.path().to_path_buf())
            .collect()
    };

    if files.is_empty() {
        anyhow::bail!("no Python files found under {:?}", cli.path);
    }

    // Analyses of different source units share no mutable state, so the
    // files are processed in parallel with rayon.
    let mut reports: Vec<FileReport> = files
        .par_iter()
        .map(|path| {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read {:?}", path))?;
            Ok(FileReport {
                file: path.clone(),
                diagnostics: analyzer.analyze(&source),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Stable output order regardless of scheduling.
    reports.sort_by(|a, b| a.file.cmp(&b.file));

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    // Human-readable report.
    println!("\n{}", "Python Code Review Results".bold());
    println!("===================================\n");

    let total: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
    println!("Summary:");
    println!(" * Files analyzed: {}", reports.len());
    println!(" * Issues found: {}", total);

    for report in &reports {
        if report.diagnostics.is_empty() {
            continue;
        }
        println!("\n - {}", report.file.display());
        println!("================");
        for (i, diagnostic) in report.diagnostics.iter().enumerate() {
            println!(" {}. [{:?}] {}", i + 1, diagnostic.kind, diagnostic.message);
            if !diagnostic.subject.is_empty() {
                println!("    └─ subject: {}", diagnostic.subject);
            }
        }
    }

    if total == 0 {
        println!("\n{}", "No issues found.".green());
    }

    Ok(())
}
