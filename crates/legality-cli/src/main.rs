//! Legality CLI

mod error;
mod input;
mod output;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use legality::{console, AnalysisConfig, AnalysisContext, BallVerifier, Pipeline};
use owo_colors::OwoColorize;
use tracing::{debug, info};

use crate::error::Result;
use crate::output::JsonReport;

#[derive(Parser)]
#[command(name = "legality")]
#[command(about = "Check creature records against their candidate origins")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every entry of a batch file
    Check {
        /// TOML file with one [[entry]] table per record
        file: PathBuf,

        /// Analysis configuration (TOML or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Rule catalog replacing the configured one
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Print the catalog revision and list sizes
    Catalog {
        /// Rule catalog to inspect instead of the embedded one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        console::init_with_filter(&console::filter_for("debug"));
    } else {
        console::init();
    }

    let result = match cli.command {
        Commands::Check {
            file,
            config,
            catalog,
            format,
        } => cmd_check(&file, config.as_deref(), catalog, format),
        Commands::Catalog { catalog } => cmd_catalog(catalog),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn load_config(config: Option<&Path>, catalog: Option<PathBuf>) -> Result<AnalysisConfig> {
    let mut config = match config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(path) = catalog {
        config = config.with_catalog(path);
    }
    Ok(config)
}

/// Returns whether every entry is legal.
fn cmd_check(
    file: &Path,
    config: Option<&Path>,
    catalog: Option<PathBuf>,
    format: Format,
) -> Result<bool> {
    let config = load_config(config, catalog)?;
    let catalog = config.load_catalog()?;
    debug!(event = "catalog_loaded", revision = catalog.revision);

    let entries = input::read_entries(file)?;
    info!(
        event = "check_start",
        file = %file.display(),
        entries = entries.len(),
    );

    let start = Instant::now();
    let pipeline = Pipeline::with_config((BallVerifier::with_catalog(&catalog),), &config);
    let contexts: Vec<AnalysisContext<'_>> = entries.iter().map(|e| e.context()).collect();
    let reports = pipeline.analyze_batch(&contexts)?;

    let all_legal = reports.iter().all(|r| r.is_legal());
    info!(
        event = "check_end",
        entries = entries.len(),
        illegal = reports.iter().filter(|r| !r.is_legal()).count(),
        duration_ms = start.elapsed().as_millis() as u64,
    );

    match format {
        Format::Text => {
            let color = std::io::stdout().is_terminal();
            print!("{}", output::render_text(&entries, &reports, color));
        }
        Format::Json => {
            let report = JsonReport::new(catalog.revision, &entries, &reports);
            println!("{}", output::render_json(&report)?);
        }
    }

    Ok(all_legal)
}

fn cmd_catalog(catalog: Option<PathBuf>) -> Result<bool> {
    let config = load_config(None, catalog)?;
    let catalog = config.load_catalog()?;
    print!("{}", output::render_catalog(&catalog));
    Ok(true)
}
