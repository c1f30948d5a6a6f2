//! # Validate Subcommand
//!
//! Parses zone files and loads them into a [`ZoneTable`], reporting each
//! file as `OK` or `FAIL`:
//!
//! ```text
//! OK: lib/world/zon/30.zon — zone #30 "Northern Midgaard" rooms 3000-3099, 9 commands (rnum 0)
//! FAIL: lib/world/zon/31.zon — format error in lib/world/zon/31.zon, line 13: "O 0 3099"
//! Zones: 1/2 passed
//! ```
//!
//! Directories expand to the `*.zon` files directly inside them.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use cmud_core::{parse_zone_file, ZoneTable};

use crate::config::CliConfig;

/// Extension of legacy zone files.
pub const ZONE_EXTENSION: &str = "zon";

/// Arguments for the `cmud validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Zone files or directories of `*.zon` files.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Keep validating after the first failing file.
    #[arg(long)]
    pub keep_going: bool,
}

/// The result of validating one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ok { path: PathBuf, summary: String },
    Fail { path: PathBuf, error: String },
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok { path, summary } => write!(f, "OK: {} — {}", path.display(), summary),
            Self::Fail { path, error } => write!(f, "FAIL: {} — {}", path.display(), error),
        }
    }
}

/// Outcomes of a validation run, in the order files were examined.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub outcomes: Vec<Outcome>,
    pub table: ZoneTable,
}

impl ValidationReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 if every examined file passed, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    if args.paths.is_empty() {
        println!("Usage: cmud validate [--keep-going] <PATH>...");
        return Ok(1);
    }

    let mut files = Vec::new();
    for path in &args.paths {
        files.extend(expand_path(&config.zone_path(path))?);
    }
    if files.is_empty() {
        println!("ERROR: no .{ZONE_EXTENSION} files found");
        return Ok(1);
    }
    tracing::info!(files = files.len(), "validating zone files");

    let report = validate_files(&files, args.keep_going || config.keep_going);

    for outcome in &report.outcomes {
        println!("{outcome}");
    }
    println!("Zones: {}/{} passed", report.passed(), report.total());

    if report.failed() > 0 {
        if report.total() < files.len() {
            println!(
                "\nStopped after the first failure; {} file(s) not examined.",
                files.len() - report.total()
            );
        }
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Parse each file and load it into a table, stopping at the first
/// failure unless `keep_going`.
pub fn validate_files(files: &[PathBuf], keep_going: bool) -> ValidationReport {
    let mut report = ValidationReport::default();

    for path in files {
        let outcome = match parse_zone_file(path) {
            Ok(zone) => {
                let summary = format!(
                    "zone #{} \"{}\" rooms {}-{}, {} commands",
                    zone.number,
                    zone.name,
                    zone.bottom,
                    zone.top,
                    zone.commands.len()
                );
                match report.table.push(zone) {
                    Ok(rnum) => Outcome::Ok {
                        path: path.clone(),
                        summary: format!("{summary} (rnum {rnum})"),
                    },
                    Err(e) => Outcome::Fail {
                        path: path.clone(),
                        error: e.to_string(),
                    },
                }
            }
            Err(e) => Outcome::Fail {
                path: path.clone(),
                error: e.to_string(),
            },
        };

        let stop = !outcome.is_ok() && !keep_going;
        report.outcomes.push(outcome);
        if stop {
            break;
        }
    }

    report
}

/// A file stays as is; a directory becomes its sorted `*.zon` entries.
pub fn expand_path(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let entries = std::fs::read_dir(path)
        .with_context(|| format!("failed to read directory {}", path.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", path.display()))?;
        let file = entry.path();
        if file.is_file() && file.extension().and_then(|e| e.to_str()) == Some(ZONE_EXTENSION) {
            files.push(file);
        }
    }
    files.sort();
    if files.is_empty() {
        tracing::warn!(dir = %path.display(), "directory contains no zone files");
    } else {
        tracing::debug!(dir = %path.display(), count = files.len(), "expanded zone directory");
    }
    Ok(files)
}
