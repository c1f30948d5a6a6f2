//! # Convert Subcommand
//!
//! Parses one zone file and writes it as a JSON (`.json5`) or YAML document,
//! then reads the document back to make sure it parses.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use cmud_convert::{output_path, write_document, OutputFormat};
use cmud_core::parse_zone_file;

use crate::config::CliConfig;

/// Document format selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Json,
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

/// Arguments for the `cmud convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Zone file to convert.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format. Defaults to the configured format (json).
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Output file. Defaults to `<file name>.<ext>` in the output directory.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Execute the convert subcommand.
///
/// Returns exit code 0; parse and write failures are operational errors.
pub fn run_convert(args: &ConvertArgs, config: &CliConfig) -> Result<u8> {
    let input = config.zone_path(&args.path);
    let format = args.format.map(OutputFormat::from).unwrap_or(config.format);

    let zone = parse_zone_file(&input)
        .with_context(|| format!("failed to parse {}", input.display()))?;
    tracing::info!(
        zone = zone.number,
        commands = zone.commands.len(),
        "zone parsed"
    );

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| output_path(&input, config.output_dir.as_deref(), format));
    write_document(&zone, format, &out)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    println!("{}", out.display());
    Ok(0)
}
