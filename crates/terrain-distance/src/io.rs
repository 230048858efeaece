//! Raw height-data loading.
//!
//! The on-disk format is a headerless row-major dump of one unsigned byte
//! per elevation sample. There is no magic number, endianness, or version:
//! the grid dimensions must be supplied by the caller and are validated
//! against the file size.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{TerrainError, TerrainResult};
use crate::types::HeightField;

/// Load a height field from a raw byte dump with the given dimensions.
pub fn load_height_data(
    path: impl AsRef<Path>,
    width: usize,
    height: usize,
) -> TerrainResult<HeightField> {
    let path = path.as_ref();
    let samples = fs::read(path).map_err(|source| TerrainError::io_read(path, source))?;
    info!(
        path = %path.display(),
        bytes = samples.len(),
        width,
        height,
        "loaded height data"
    );
    HeightField::from_samples(samples, width, height)
}
