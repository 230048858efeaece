//! Error types for terrain distance operations.
//!
//! All fallible operations return [`TerrainResult`]. Errors carry miette
//! diagnostic codes and help text so the CLI can render actionable messages.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::VoxelCoord;

/// Result type alias for terrain operations.
pub type TerrainResult<T> = Result<T, TerrainError>;

/// Errors that can occur while building height fields or measuring distances.
#[derive(Debug, Error, Diagnostic)]
pub enum TerrainError {
    /// Error reading height data from a file.
    #[error("failed to read height data from {path}")]
    #[diagnostic(
        code(terrain::io::read),
        help("Check that the file exists and is readable")
    )]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The sample buffer does not match the declared grid dimensions.
    #[error(
        "height data length mismatch: a {width}x{height} grid needs {expected} samples, got {actual}"
    )]
    #[diagnostic(
        code(terrain::heightfield::sample_count),
        help(
            "The data must be a headerless row-major dump of one unsigned byte per sample. Check the --width and --height values against the file size."
        )
    )]
    SampleCountMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// Zero-sized grid.
    #[error("height field dimensions {width}x{height} are empty")]
    #[diagnostic(
        code(terrain::heightfield::empty),
        help("Both grid dimensions must be at least 1")
    )]
    EmptyHeightField { width: usize, height: usize },

    /// A path endpoint lies outside the sample grid.
    #[error("point ({x}, {y}) is outside the {width}x{height} sample grid")]
    #[diagnostic(
        code(terrain::bounds::endpoint),
        help("Path endpoints must lie within [0, width) x [0, height)")
    )]
    EndpointOutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// A scale factor is zero, negative, or not finite.
    #[error("invalid scale factor: {name} = {value}")]
    #[diagnostic(
        code(terrain::scale::invalid),
        help("Scale factors must be finite and strictly positive")
    )]
    InvalidScale { name: &'static str, value: f64 },
}

impl TerrainError {
    /// Create an `IoRead` error.
    pub fn io_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TerrainError::IoRead {
            path: path.into(),
            source,
        }
    }

    /// Create an `EndpointOutOfBounds` error.
    pub fn endpoint_out_of_bounds(point: VoxelCoord, width: usize, height: usize) -> Self {
        TerrainError::EndpointOutOfBounds {
            x: point.x,
            y: point.y,
            width,
            height,
        }
    }

    /// Create an `InvalidScale` error.
    pub fn invalid_scale(name: &'static str, value: f64) -> Self {
        TerrainError::InvalidScale { name, value }
    }
}
