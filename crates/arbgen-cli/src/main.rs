//! ARB CLI entry point.
//!
//! Provides command-line tools for working with ARB localization files:
//! - `arbgen generate` - Generate the Rust localizations file
//! - `arbgen check` - Validate ARB files without writing output
//! - `arbgen coverage` - Report translation coverage across locales

mod commands;
mod output;
mod settings;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_coverage, run_generate, CheckArgs, CoverageArgs, GenerateArgs};
use tracing_subscriber::EnvFilter;

/// ARB localization tools.
#[derive(Debug, Parser)]
#[command(name = "arbgen")]
#[command(about = "ARB localization code generator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the localizations file
    Generate(GenerateArgs),
    /// Validate ARB files without writing output
    Check(CheckArgs),
    /// Report translation coverage across locales
    Coverage(CoverageArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool, color_when: ColorWhen) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let ansi = !matches!(color_when, ColorWhen::Never);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose, cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::DATAERR);
        }
    }
}
