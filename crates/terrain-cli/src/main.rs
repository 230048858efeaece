//! terrain-cli: Command-line interface for surface-distance measurement.
//!
//! This tool measures the terrain-following length of straight paths over
//! raw height-field dumps, suitable for scripting and batch comparison of
//! pre/post datasets.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=terrain_distance=info` - Basic operation logging
//! - `RUST_LOG=terrain_distance=debug` - Per-measurement detail
//! - `RUST_LOG=debug` - All debug output
//!
//! # Example
//!
//! ```bash
//! # Measure one path over a 512x512 dataset
//! terrain distance heights.data --begin 10,20 --end 400,380
//!
//! # Compare the same path over two datasets
//! terrain compare pre.data post.data --begin 10,20 --end 400,380 --format json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use miette::Diagnostic;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod output;

use commands::{compare, distance, info};

/// Parse an `X,Y` grid coordinate pair.
fn parse_point(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got `{s}`"))?;
    let x = x.trim().parse().map_err(|_| format!("invalid x `{x}`"))?;
    let y = y.trim().parse().map_err(|_| format!("invalid y `{y}`"))?;
    Ok((x, y))
}

/// terrain - measure surface-following distances over height fields.
///
/// Paths are straight segments between integer grid points; the reported
/// distance follows the terrain surface instead of the flat plane.
#[derive(Parser)]
#[command(name = "terrain")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for results
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Display height-field statistics
    Info {
        /// Raw height data file (one byte per sample, row-major)
        input: PathBuf,

        /// Grid width in samples
        #[arg(long, default_value = "512")]
        width: usize,

        /// Grid height in samples
        #[arg(long, default_value = "512")]
        height: usize,
    },

    /// Measure the surface distance of one path
    Distance {
        /// Raw height data file (one byte per sample, row-major)
        input: PathBuf,

        /// Path start as X,Y grid coordinates
        #[arg(long, value_parser = parse_point)]
        begin: (i32, i32),

        /// Path end as X,Y grid coordinates
        #[arg(long, value_parser = parse_point)]
        end: (i32, i32),

        /// Grid width in samples
        #[arg(long, default_value = "512")]
        width: usize,

        /// Grid height in samples
        #[arg(long, default_value = "512")]
        height: usize,

        /// Planar size of one grid cell in world units
        #[arg(long, default_value = "30.0")]
        pixel_distance: f64,

        /// World height of one elevation count
        #[arg(long, default_value = "11.0")]
        pixel_height: f64,
    },

    /// Measure the same path over two datasets and report the change
    Compare {
        /// Height data before the change
        pre: PathBuf,

        /// Height data after the change
        post: PathBuf,

        /// Path start as X,Y grid coordinates
        #[arg(long, value_parser = parse_point)]
        begin: (i32, i32),

        /// Path end as X,Y grid coordinates
        #[arg(long, value_parser = parse_point)]
        end: (i32, i32),

        /// Grid width in samples
        #[arg(long, default_value = "512")]
        width: usize,

        /// Grid height in samples
        #[arg(long, default_value = "512")]
        height: usize,

        /// Planar size of one grid cell in world units
        #[arg(long, default_value = "30.0")]
        pixel_distance: f64,

        /// World height of one elevation count
        #[arg(long, default_value = "11.0")]
        pixel_height: f64,
    },
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins over -v flags when set.
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "terrain_distance=info",
            2 => "terrain_distance=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    #[cfg(debug_assertions)]
    miette::set_panic_hook();

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Info {
            input,
            width,
            height,
        } => info::run(input, *width, *height, &cli),
        Commands::Distance {
            input,
            begin,
            end,
            width,
            height,
            pixel_distance,
            pixel_height,
        } => distance::run(
            input,
            *begin,
            *end,
            *width,
            *height,
            *pixel_distance,
            *pixel_height,
            &cli,
        ),
        Commands::Compare {
            pre,
            post,
            begin,
            end,
            width,
            height,
            pixel_distance,
            pixel_height,
        } => compare::run(
            pre,
            post,
            *begin,
            *end,
            *width,
            *height,
            *pixel_distance,
            *pixel_height,
            &cli,
        ),
    };

    if let Err(e) = &result {
        if !cli.quiet {
            // Terrain errors carry a diagnostic code and help text.
            if let Some(terrain_err) = e.downcast_ref::<terrain_distance::TerrainError>() {
                eprintln!("{}: {}", "Error".red().bold(), terrain_err);
                if let Some(code) = terrain_err.code() {
                    eprintln!("  {}: {}", "Code".cyan(), code);
                }
                if let Some(help) = terrain_err.help() {
                    eprintln!("  {}: {}", "Suggestion".green(), help);
                }
            } else {
                eprintln!("{}: {}", "Error".red().bold(), e);
                for cause in e.chain().skip(1) {
                    eprintln!("  {}: {}", "Caused by".yellow(), cause);
                }
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("3,4").unwrap(), (3, 4));
        assert_eq!(parse_point(" 10 , -2 ").unwrap(), (10, -2));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,b").is_err());
    }
}
