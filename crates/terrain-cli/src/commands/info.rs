//! terrain info command - display height-field statistics.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use terrain_distance::HeightField;

use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct FieldInfo {
    path: String,
    width: usize,
    height: usize,
    samples: usize,
    min_elevation: u8,
    max_elevation: u8,
    mean_elevation: f64,
}

pub fn run(input: &Path, width: usize, height: usize, cli: &Cli) -> Result<()> {
    let field = HeightField::load(input, width, height)
        .with_context(|| format!("Failed to load height data from {input:?}"))?;

    let samples = field.samples();
    let min = samples.iter().copied().min().unwrap_or(0);
    let max = samples.iter().copied().max().unwrap_or(0);
    let mean = samples.iter().map(|&s| s as f64).sum::<f64>() / samples.len() as f64;

    let info = FieldInfo {
        path: input.display().to_string(),
        width: field.width(),
        height: field.height(),
        samples: samples.len(),
        min_elevation: min,
        max_elevation: max,
        mean_elevation: mean,
    };

    match cli.format {
        OutputFormat::Json => {
            output::print(&info, cli.format, cli.quiet);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", "Height Field Information".bold().underline());
                println!("  {}: {}", "File".cyan(), input.display());
                println!("  {}: {} x {}", "Grid".cyan(), info.width, info.height);
                println!("  {}: {}", "Samples".cyan(), info.samples);
                println!(
                    "  {}: {} .. {} (mean {:.2})",
                    "Elevation".cyan(),
                    info.min_elevation,
                    info.max_elevation,
                    info.mean_elevation
                );
            }
        }
    }

    Ok(())
}
