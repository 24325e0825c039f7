//! cell-storage: writes printable storage towers for coin and button cells.
//!
//! Run without arguments to write the default coin-cell assembly
//! (`CR1632_CR2025.scad`) into the working directory.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=cell_storage=info` - Assembly summary and file writes
//! - `RUST_LOG=cell_storage=debug` - Per-tower derived dimensions
//! - `RUST_LOG=debug` - All debug output
//!
//! # Example
//!
//! ```bash
//! # Button cells, custom selection, printed to stdout
//! cell-storage --variant button LR44 SR626 --stdout
//!
//! # Coin cells from a JSON table
//! cell-storage --definition my-cells.json --out-dir out/ -v
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cell_storage::{generate, GenerateOptions, StorageDefinition, Variant};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use config::constants::DEFAULT_SEGMENTS;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// cell-storage - Generate OpenSCAD storage towers for coin and button cells.
///
/// Each requested battery type gets a tower of angled slots; the towers are
/// placed side by side and written as one `.scad` file.
#[derive(Parser)]
#[command(name = "cell-storage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Battery labels to build, left to right (defaults to the table's order)
    labels: Vec<String>,

    /// Which built-in table and naming scheme to use
    #[arg(long, default_value = "coin")]
    variant: VariantArg,

    /// JSON storage definition replacing the built-in table
    #[arg(long)]
    definition: Option<PathBuf>,

    /// Directory to write the file into
    #[arg(long, short, default_value = ".")]
    out_dir: PathBuf,

    /// Circle segment count (`$fn`)
    #[arg(long, default_value_t = DEFAULT_SEGMENTS)]
    segments: u32,

    /// Print the file to stdout instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Leave out the trailing parameter comment
    #[arg(long)]
    no_parameters: bool,

    /// List the battery labels the table knows and exit
    #[arg(long)]
    list: bool,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    /// Lithium coin cells, file named after the towers
    Coin,
    /// Alkaline and silver-oxide button cells
    Button,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Coin => Variant::CoinCell,
            VariantArg::Button => Variant::ButtonCell,
        }
    }
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "cell_storage=info,openscad_csg=info",
            2 => "cell_storage=debug,openscad_csg=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn load_definition(path: &Path) -> Result<StorageDefinition> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read definition {}", path.display()))?;
    let definition = StorageDefinition::from_json(&source)
        .with_context(|| format!("Invalid definition {}", path.display()))?;
    info!(
        "Loaded {} battery types from {}",
        definition.type_labels().count(),
        path.display()
    );
    Ok(definition)
}

fn run(cli: &Cli) -> Result<()> {
    let variant = Variant::from(cli.variant);
    let definition = cli.definition.as_deref().map(load_definition).transpose()?;

    if cli.list {
        let definition = definition.unwrap_or_else(|| variant.definition());
        for label in definition.type_labels() {
            println!("{}", label);
        }
        return Ok(());
    }

    let mut options = GenerateOptions::new(cli.segments, !cli.no_parameters)?;
    if let Some(definition) = definition {
        options = options.with_definition(definition);
    }
    if !cli.labels.is_empty() {
        options = options.with_order(cli.labels.clone());
    }
    let generated = generate(variant, &options)?;

    if cli.stdout {
        print!("{}", generated.render()?);
        return Ok(());
    }

    let path = generated.write(&cli.out_dir)?;
    if !cli.quiet {
        println!("Wrote file: {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        if !cli.quiet {
            eprintln!("{}: {}", "Error".red().bold(), e);
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {}", "Caused by".yellow(), cause);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["cell-storage"]);
        assert!(cli.labels.is_empty());
        assert!(matches!(cli.variant, VariantArg::Coin));
        assert_eq!(cli.segments, DEFAULT_SEGMENTS);
        assert_eq!(cli.out_dir, PathBuf::from("."));
        assert!(!cli.stdout && !cli.no_parameters && !cli.list);
    }

    #[test]
    fn test_cli_button_with_labels() {
        let cli = Cli::parse_from([
            "cell-storage",
            "--variant",
            "button",
            "LR44",
            "SR626",
            "--segments",
            "96",
            "-vv",
        ]);
        assert_eq!(Variant::from(cli.variant), Variant::ButtonCell);
        assert_eq!(cli.labels, vec!["LR44", "SR626"]);
        assert_eq!(cli.segments, 96);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_run_rejects_degenerate_segments() {
        let cli = Cli::parse_from(["cell-storage", "--segments", "2", "--stdout"]);
        let err = run(&cli).unwrap_err();
        assert_eq!(err.to_string(), "segments must be >= 3: 2");
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
