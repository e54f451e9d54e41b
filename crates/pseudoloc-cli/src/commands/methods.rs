//! The `methods` subcommand: list registered methods.

use clap::Args;
use miette::Result;
use pseudoloc::MethodRegistry;

use crate::output;

/// Arguments for `pseudoloc methods`.
#[derive(Debug, Args)]
pub struct MethodsArgs {
    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run_methods(args: &MethodsArgs) -> Result<()> {
    let registry = MethodRegistry::default();
    let names: Vec<&str> = registry.names().collect();
    if args.json {
        output::print_json(&names)?;
    } else {
        output::print_table(
            &["method"],
            names.iter().map(|name| vec![(*name).to_string()]),
        );
    }
    Ok(())
}
