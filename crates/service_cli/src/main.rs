//! Sobol CLI - Command Line Access to the Sobol Sequence Engine
//!
//! This is the operational entry point for the sobol_core library.
//!
//! # Commands
//!
//! - `sobol draw` - Print points of the Sobol sequence
//! - `sobol check` - Report direction-number table coverage
//!
//! # Configuration
//!
//! Settings come from CLI flags, `SOBOL_*` environment variables, a TOML
//! file (`sobol.toml` by default) and built-in defaults, in that order of
//! precedence. `RUST_LOG` overrides the configured log level.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{build_config, CliArgs, OutputFormat};
pub use error::Result;

/// Sobol low-discrepancy sequence CLI
#[derive(Parser)]
#[command(name = "sobol")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Joe & Kuo direction-number file (built-in table when omitted)
    #[arg(long, global = true, value_name = "FILE")]
    table: Option<PathBuf>,

    /// Data rows to skip before dimension 1's row (table default when omitted)
    #[arg(long, global = true)]
    row_offset: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print points of the Sobol sequence
    Draw {
        /// Coordinates per point
        #[arg(short, long)]
        dimension: Option<usize>,

        /// Number of points to print
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Points to skip before printing
        #[arg(short, long, default_value = "0")]
        skip: u32,

        /// Output format (table, csv, json)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Check direction-number table coverage
    Check,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let mut args = CliArgs {
            config_file: self.config.clone(),
            verbose: self.verbose,
            table_path: self.table.clone(),
            row_offset: self.row_offset,
            ..Default::default()
        };
        if let Commands::Draw {
            dimension,
            count,
            format,
            ..
        } = &self.command
        {
            args.dimension = *dimension;
            args.count = *count;
            args.format = *format;
        }
        args
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args()).context("Failed to load configuration")?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());

    info!("Sobol CLI v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        dimension = config.dimension,
        count = config.count,
        format = %config.format,
        row_offset = ?config.table.row_offset,
        "Configuration loaded"
    );

    let table = commands::load_table(&config.table)?;

    match cli.command {
        Commands::Draw { skip, .. } => commands::draw::run(&config, &table, skip)?,
        Commands::Check => commands::check::run(&table)?,
    }
    Ok(())
}
