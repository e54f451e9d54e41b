//! Pseudolocalization CLI entry point.
//!
//! Provides command-line tools for pseudo-localizing resource files:
//! - `pseudoloc localize` - Apply a pipeline to files or stdin
//! - `pseudoloc methods` - List registered methods
//! - `pseudoloc variants` - List registered variant tags

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{LocalizeArgs, MethodsArgs, VariantsArgs, run_localize, run_methods, run_variants};

/// Pseudolocalization tools.
#[derive(Debug, Parser)]
#[command(name = "pseudoloc")]
#[command(about = "Pseudo-localize translatable resource files", long_about = None)]
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
    /// Apply a pseudolocalization pipeline to files or stdin
    Localize(LocalizeArgs),
    /// List registered pseudolocalization methods
    Methods(MethodsArgs),
    /// List registered variant tags and their pipelines
    Variants(VariantsArgs),
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

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

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
        Commands::Localize(args) => run_localize(&args, cli.verbose),
        Commands::Methods(args) => run_methods(&args),
        Commands::Variants(args) => run_variants(&args),
    };

    match result {
        Ok(()) => Ok(()),
        Err(report) => {
            eprintln!("{report:?}");
            exit(exitcode::DATAERR);
        }
    }
}
