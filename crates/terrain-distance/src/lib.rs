//! Surface-following distance over discretized height fields.
//!
//! This crate measures the true length of a straight planar path when it is
//! draped over a terrain surface, as opposed to the flat planar distance
//! between its endpoints. The typical use is comparing terrain length along
//! the same path before and after a change to the height data ("pre" vs
//! "post" datasets).
//!
//! # How it works
//!
//! The path is a single straight segment between two integer grid points.
//! Measurement proceeds in three layers:
//!
//! 1. **Voxel traversal** ([`traverse_voxels`]): an Amanatides–Woo grid walk
//!    enumerates, in order, every unit cell the segment passes through.
//! 2. **Boundary intersection** ([`boundary`]): within each cell, the
//!    segment is intersected with the cell's four edges and its diagonal,
//!    producing explicit crossing and colinear-overlap records.
//! 3. **Accumulation** ([`surface_distance`]): each crossing is lifted into
//!    3D by sampling the height field at the edge endpoints and
//!    interpolating; consecutive lifted points are summed along the path.
//!
//! The path between the endpoints is always the given straight segment: this
//! is not a geodesic shortest-path search, and no mesh is ever built.
//!
//! # Units
//!
//! Two scale factors relate grid space to world space: `pixel_distance`, the
//! planar size of one grid cell, and `pixel_height`, the world height of one
//! elevation count. Heights are unsigned 8-bit samples in row-major order.
//!
//! # Quick start
//!
//! ```
//! use nalgebra::Point2;
//! use terrain_distance::{HeightField, surface_distance};
//!
//! let field = HeightField::flat(4, 4, 10).unwrap();
//! let d = surface_distance(
//!     Point2::new(0, 0),
//!     Point2::new(3, 3),
//!     &field,
//!     30.0, // meters per grid cell
//!     11.0, // meters per elevation count
//! )
//! .unwrap();
//! // A flat field reduces to the planar distance.
//! assert!((d - 30.0 * 18.0_f64.sqrt()).abs() < 1e-9);
//! ```
//!
//! # Precision
//!
//! Error accumulates per traversed cell; measurements on grids much larger
//! than 512×512 lose precision. This is a documented limitation of the
//! accumulation scheme, not a bug in any single step.
//!
//! # Logging
//!
//! Operations emit `tracing` events; initialize a subscriber (see
//! `terrain-cli`) and set `RUST_LOG=terrain_distance=debug` for per-call
//! detail.

mod error;
mod types;

pub mod boundary;
pub mod intersect;
pub mod io;
pub mod surface;
pub mod traverse;

// Re-export core types at crate root.
pub use error::{TerrainError, TerrainResult};
pub use types::{HeightField, Ray, RayLineIntersection, VoxelCoord};

// Re-export the three entry points.
pub use intersect::{cross, intersect_ray_and_line};
pub use surface::surface_distance;
pub use traverse::traverse_voxels;

pub use boundary::{BoundaryHit, intersect_segment_with_boundary, voxel_boundary_loop};
pub use io::load_height_data;

// Convenience methods on HeightField
impl HeightField {
    /// Load a height field from a raw row-major byte dump.
    pub fn load(
        path: impl AsRef<std::path::Path>,
        width: usize,
        height: usize,
    ) -> TerrainResult<Self> {
        io::load_height_data(path, width, height)
    }

    /// Surface distance of the straight segment `begin → end` over this
    /// field. See [`surface_distance`].
    pub fn surface_distance(
        &self,
        begin: VoxelCoord,
        end: VoxelCoord,
        pixel_distance: f64,
        pixel_height: f64,
    ) -> TerrainResult<f64> {
        surface::surface_distance(begin, end, self, pixel_distance, pixel_height)
    }
}
