//! # cmud CLI entry point
//!
//! Parses command-line arguments, loads the optional configuration file,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmud_cli::config::CliConfig;
use cmud_cli::convert::{run_convert, ConvertArgs};
use cmud_cli::validate::{run_validate, ValidateArgs};

/// Legacy CircleMUD zone file toolchain.
///
/// Validates `.zon` zone definitions and converts them to JSON or YAML
/// documents.
#[derive(Parser, Debug)]
#[command(name = "cmud", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output directory for converted documents.
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse zone files and load them into a zone table.
    Validate(ValidateArgs),

    /// Convert a zone file to a JSON or YAML document.
    Convert(ConvertArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("cmud CLI starting");

    let result = CliConfig::resolve(cli.config.as_deref(), cli.output_dir).and_then(|config| {
        match cli.command {
            Commands::Validate(args) => run_validate(&args, &config),
            Commands::Convert(args) => run_convert(&args, &config),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_validate_paths() {
        let cli = Cli::try_parse_from(["cmud", "validate", "30.zon", "lib/world/zon"]).unwrap();
        if let Commands::Validate(args) = cli.command {
            assert_eq!(
                args.paths,
                vec![PathBuf::from("30.zon"), PathBuf::from("lib/world/zon")]
            );
            assert!(!args.keep_going);
        } else {
            panic!("expected validate");
        }
    }

    #[test]
    fn cli_parse_validate_keep_going() {
        let cli = Cli::try_parse_from(["cmud", "validate", "--keep-going", "30.zon"]).unwrap();
        if let Commands::Validate(args) = cli.command {
            assert!(args.keep_going);
        } else {
            panic!("expected validate");
        }
    }

    #[test]
    fn cli_parse_validate_without_paths() {
        let cli = Cli::try_parse_from(["cmud", "validate"]).unwrap();
        if let Commands::Validate(args) = cli.command {
            assert!(args.paths.is_empty());
        } else {
            panic!("expected validate");
        }
    }

    #[test]
    fn cli_parse_convert_defaults() {
        let cli = Cli::try_parse_from(["cmud", "convert", "30.zon"]).unwrap();
        if let Commands::Convert(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("30.zon"));
            assert!(args.format.is_none());
            assert!(args.out.is_none());
        } else {
            panic!("expected convert");
        }
    }

    #[test]
    fn cli_parse_convert_with_all_options() {
        let cli = Cli::try_parse_from([
            "cmud",
            "convert",
            "30.zon",
            "--format",
            "yaml",
            "--out",
            "midgaard.yaml",
        ])
        .unwrap();
        if let Commands::Convert(args) = cli.command {
            assert_eq!(args.format, Some(cmud_cli::convert::FormatArg::Yaml));
            assert_eq!(args.out, Some(PathBuf::from("midgaard.yaml")));
        } else {
            panic!("expected convert");
        }
    }

    #[test]
    fn cli_parse_convert_rejects_unknown_format() {
        let result = Cli::try_parse_from(["cmud", "convert", "30.zon", "--format", "toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_convert_requires_path() {
        assert!(Cli::try_parse_from(["cmud", "convert"]).is_err());
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["cmud", "validate"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli1 = Cli::try_parse_from(["cmud", "-v", "validate"]).unwrap();
        assert_eq!(cli1.verbose, 1);

        let cli3 = Cli::try_parse_from(["cmud", "validate", "-vvv"]).unwrap();
        assert_eq!(cli3.verbose, 3);
    }

    #[test]
    fn cli_parse_global_options() {
        let cli = Cli::try_parse_from([
            "cmud",
            "--config",
            "cmud.yaml",
            "convert",
            "30.zon",
            "--output-dir",
            "/tmp/out",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("cmud.yaml")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/out")));
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["cmud"]).is_err());
    }

    #[test]
    fn cli_parse_invalid_subcommand_errors() {
        assert!(Cli::try_parse_from(["cmud", "lock"]).is_err());
    }
}
