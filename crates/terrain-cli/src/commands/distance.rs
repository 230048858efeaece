//! terrain distance command - measure one path over one dataset.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use terrain_distance::{HeightField, VoxelCoord};

use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct DistanceInfo {
    path: String,
    begin: (i32, i32),
    end: (i32, i32),
    pixel_distance: f64,
    pixel_height: f64,
    planar_distance: f64,
    surface_distance: f64,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    input: &Path,
    begin: (i32, i32),
    end: (i32, i32),
    width: usize,
    height: usize,
    pixel_distance: f64,
    pixel_height: f64,
    cli: &Cli,
) -> Result<()> {
    let field = HeightField::load(input, width, height)
        .with_context(|| format!("Failed to load height data from {input:?}"))?;

    let begin = VoxelCoord::new(begin.0, begin.1);
    let end = VoxelCoord::new(end.0, end.1);
    let surface = field.surface_distance(begin, end, pixel_distance, pixel_height)?;
    let planar = pixel_distance * planar_length(begin, end);

    let info = DistanceInfo {
        path: input.display().to_string(),
        begin: (begin.x, begin.y),
        end: (end.x, end.y),
        pixel_distance,
        pixel_height,
        planar_distance: planar,
        surface_distance: surface,
    };

    match cli.format {
        OutputFormat::Json => {
            output::print(&info, cli.format, cli.quiet);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", "Surface Distance".bold().underline());
                println!("  {}: {}", "File".cyan(), input.display());
                println!(
                    "  {}: ({}, {}) -> ({}, {})",
                    "Path".cyan(),
                    begin.x,
                    begin.y,
                    end.x,
                    end.y
                );
                println!("  {}: {:.3}", "Planar".cyan(), info.planar_distance);
                println!("  {}: {:.3}", "Surface".cyan(), info.surface_distance);
            }
        }
    }

    Ok(())
}

/// Planar length of the path in grid units.
pub(crate) fn planar_length(begin: VoxelCoord, end: VoxelCoord) -> f64 {
    nalgebra::distance(&begin.cast::<f64>(), &end.cast::<f64>())
}
