//! terrain compare command - measure the same path over two datasets.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use terrain_distance::{HeightField, VoxelCoord};

use crate::commands::distance::planar_length;
use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct CompareInfo {
    pre_path: String,
    post_path: String,
    begin: (i32, i32),
    end: (i32, i32),
    pixel_distance: f64,
    pixel_height: f64,
    planar_distance: f64,
    pre_distance: f64,
    post_distance: f64,
    change: f64,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    pre: &Path,
    post: &Path,
    begin: (i32, i32),
    end: (i32, i32),
    width: usize,
    height: usize,
    pixel_distance: f64,
    pixel_height: f64,
    cli: &Cli,
) -> Result<()> {
    let pre_field = HeightField::load(pre, width, height)
        .with_context(|| format!("Failed to load height data from {pre:?}"))?;
    let post_field = HeightField::load(post, width, height)
        .with_context(|| format!("Failed to load height data from {post:?}"))?;

    let begin = VoxelCoord::new(begin.0, begin.1);
    let end = VoxelCoord::new(end.0, end.1);
    let pre_d = pre_field.surface_distance(begin, end, pixel_distance, pixel_height)?;
    let post_d = post_field.surface_distance(begin, end, pixel_distance, pixel_height)?;

    let info = CompareInfo {
        pre_path: pre.display().to_string(),
        post_path: post.display().to_string(),
        begin: (begin.x, begin.y),
        end: (end.x, end.y),
        pixel_distance,
        pixel_height,
        planar_distance: pixel_distance * planar_length(begin, end),
        pre_distance: pre_d,
        post_distance: post_d,
        change: post_d - pre_d,
    };

    match cli.format {
        OutputFormat::Json => {
            output::print(&info, cli.format, cli.quiet);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", "Surface Distance Comparison".bold().underline());
                println!(
                    "  {}: ({}, {}) -> ({}, {})",
                    "Path".cyan(),
                    begin.x,
                    begin.y,
                    end.x,
                    end.y
                );
                println!("  {}: {:.3}", "Planar".cyan(), info.planar_distance);
                println!("  {}: {:.3}", "Pre".cyan(), info.pre_distance);
                println!("  {}: {:.3}", "Post".cyan(), info.post_distance);
                let change = format!("{:+.3}", info.change);
                let rendered = if info.change > 0.0 {
                    change.red()
                } else {
                    change.green()
                };
                println!("  {}: {}", "Change".cyan(), rendered);
            }
        }
    }

    Ok(())
}
