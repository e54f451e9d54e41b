//! The `variants` subcommand: list variant tags and their pipelines.

use clap::Args;
use miette::Result;
use pseudoloc::{VariantRegistry, use_source_language};
use serde::Serialize;

use crate::output;

/// Arguments for `pseudoloc variants`.
#[derive(Debug, Args)]
pub struct VariantsArgs {
    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct VariantRow {
    variant: String,
    methods: Vec<String>,
    use_source_language: bool,
}

pub fn run_variants(args: &VariantsArgs) -> Result<()> {
    let registry = VariantRegistry::default();
    let rows: Vec<VariantRow> = registry
        .names()
        .map(|tag| VariantRow {
            variant: tag.to_string(),
            methods: registry.lookup(tag).map(<[String]>::to_vec).unwrap_or_default(),
            use_source_language: use_source_language(tag),
        })
        .collect();

    if args.json {
        output::print_json(&rows)?;
    } else {
        output::print_table(
            &["variant", "methods", "source language"],
            rows.iter().map(|row| {
                vec![
                    row.variant.clone(),
                    row.methods.join(", "),
                    if row.use_source_language { "yes" } else { "no" }.to_string(),
                ]
            }),
        );
    }
    Ok(())
}
