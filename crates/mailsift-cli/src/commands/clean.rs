use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use mailsift_core::pipeline;
use mailsift_csv::{read_table, write_table};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Input CSV file (overrides config)
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Output CSV file (overrides config)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CleanReport {
    original_count: usize,
    cleaned_count: usize,
    output: String,
}

pub fn clean(ctx: &Context<'_>, args: CleanArgs) -> Result<()> {
    let input = args
        .input
        .unwrap_or_else(|| ctx.config.input_path.clone());
    let output = args
        .output
        .unwrap_or_else(|| ctx.config.output_path.clone());

    let table = read_table(&input)
        .with_context(|| format!("read input file {}", input.display()))?;
    debug!(rows = table.len(), "input table loaded");

    let outcome = pipeline::clean(&table)?;
    debug!(
        kept = outcome.summary.cleaned_count,
        dropped = outcome.summary.original_count - outcome.summary.cleaned_count,
        "pipeline finished"
    );

    write_table(&output, &outcome.table)
        .with_context(|| format!("write output file {}", output.display()))?;

    if ctx.json {
        return print_json(&CleanReport {
            original_count: outcome.summary.original_count,
            cleaned_count: outcome.summary.cleaned_count,
            output: output.display().to_string(),
        });
    }

    println!("Original email count: {}", outcome.summary.original_count);
    println!("Cleaned email count: {}", outcome.summary.cleaned_count);
    println!("Cleaning completed successfully.");
    Ok(())
}
