//! The `localize` subcommand: run a pipeline over files or stdin.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use pseudoloc::format::FormatRegistry;
use pseudoloc::{MethodRegistry, Pipeline, VariantRegistry, compute_suggestions};
use thiserror::Error;

/// Arguments for `pseudoloc localize`.
#[derive(Debug, Args)]
pub struct LocalizeArgs {
    /// Variant tag whose registered pipeline to apply (default: psaccent)
    #[arg(long, conflicts_with = "method")]
    pub variant: Option<String>,

    /// Method specs to apply in order (name[:key[=value]]...)
    #[arg(long, value_delimiter = ',')]
    pub method: Vec<String>,

    /// Force a file type instead of inferring it from the extension
    #[arg(long = "type", value_name = "EXT")]
    pub file_type: Option<String>,

    /// Global pipeline options as key=value pairs
    #[arg(long, value_name = "KEY=VALUE")]
    pub option: Vec<String>,

    /// Skip the HTML-preserving stage
    #[arg(long)]
    pub no_html: bool,

    /// Files to localize, each written next to its original as
    /// name_<variant>.ext; reads stdin line by line when omitted
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Error)]
enum LocalizeError {
    #[error("unknown variant '{tag}'{}", suggestion_text(suggestions))]
    UnknownVariant {
        tag: String,
        suggestions: Vec<String>,
    },
}

fn suggestion_text(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean {}?", suggestions.join(" or "))
    }
}

pub fn run_localize(args: &LocalizeArgs, verbose: bool) -> Result<()> {
    let methods = MethodRegistry::default();
    let variants = VariantRegistry::default();
    let formats = FormatRegistry::default();

    let (specs, suffix) = if args.method.is_empty() {
        let tag = args.variant.as_deref().unwrap_or("psaccent");
        let specs = variants
            .lookup(tag)
            .ok_or_else(|| LocalizeError::UnknownVariant {
                tag: tag.to_string(),
                suggestions: compute_suggestions(tag, variants.names()),
            })
            .into_diagnostic()?;
        (specs.to_vec(), tag.to_ascii_lowercase())
    } else {
        (args.method.clone(), "pseudo".to_string())
    };

    let options = args.option.iter().map(|raw| {
        let (key, value) = raw.split_once('=').unwrap_or((raw.as_str(), ""));
        (key.to_string(), value.to_string())
    });

    let mut pipeline = Pipeline::builder(&methods)
        .preserve_html(!args.no_html)
        .options(options)
        .methods(&specs)
        .build()
        .into_diagnostic()?;

    if args.files.is_empty() {
        localize_stdin(&mut pipeline)?;
        return Ok(());
    }

    for path in &args.files {
        let extension = match &args.file_type {
            Some(file_type) => file_type.clone(),
            None => path
                .extension()
                .and_then(OsStr::to_str)
                .unwrap_or("")
                .to_string(),
        };
        let catalog = formats.catalog_for(&extension);

        let mut input = File::open(path).into_diagnostic()?;
        let mut messages = catalog.read_from(&mut input).into_diagnostic()?;
        for message in &mut messages {
            pipeline.localize(message);
        }

        let out_path = output_path(path, &suffix);
        let mut output = File::create(&out_path).into_diagnostic()?;
        catalog.write_to(&mut output, &messages).into_diagnostic()?;

        if verbose {
            eprintln!(
                "{} {} -> {} ({} messages)",
                "localized".green().bold(),
                path.display(),
                out_path.display(),
                messages.len()
            );
        }
    }
    Ok(())
}

fn localize_stdin(pipeline: &mut Pipeline) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.into_diagnostic()?;
        println!("{}", pipeline.localize_text(&line));
    }
    Ok(())
}

/// Output file name: `dir/name.ext` becomes `dir/name_<suffix>.ext`.
fn output_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().and_then(OsStr::to_str).unwrap_or("out");
    let name = match path.extension().and_then(OsStr::to_str) {
        Some(extension) => format!("{stem}_{suffix}.{extension}"),
        None => format!("{stem}_{suffix}"),
    };
    path.with_file_name(name)
}
