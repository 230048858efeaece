//! Surface distance along a straight path over a height field.
//!
//! The planar segment between the two endpoints is walked cell by cell.
//! Within each cell, the crossings of the cell's edges and diagonal are
//! lifted into 3D using the height samples at the edge endpoints, and the
//! lengths of the consecutive lifted sub-segments are summed.

use nalgebra::Point3;
use tracing::debug;

use crate::boundary::{BoundaryHit, intersect_segment_with_boundary, voxel_boundary_loop};
use crate::error::{TerrainError, TerrainResult};
use crate::traverse::traverse_voxels;
use crate::types::{HeightField, VoxelCoord};

/// Lift a grid sample point to its attributed 3D position: planar
/// coordinates scaled by `pixel_distance`, elevation scaled by
/// `pixel_height`.
fn lift(
    field: &HeightField,
    coord: VoxelCoord,
    pixel_distance: f64,
    pixel_height: f64,
) -> Point3<f64> {
    let elevation = field.sample(coord.x as usize, coord.y as usize) as f64 * pixel_height;
    Point3::new(
        pixel_distance * coord.x as f64,
        pixel_distance * coord.y as f64,
        elevation,
    )
}

/// 3D point at parameter `t` along the lifted edge `from → to`.
fn lift_along_edge(
    field: &HeightField,
    from: VoxelCoord,
    to: VoxelCoord,
    pixel_distance: f64,
    pixel_height: f64,
    t: f64,
) -> Point3<f64> {
    let a = lift(field, from, pixel_distance, pixel_height);
    let b = lift(field, to, pixel_distance, pixel_height);
    a + (b - a) * t
}

/// Compute the surface-following distance of the straight segment
/// `begin → end` over `field`.
///
/// Both endpoints must be sample coordinates within
/// `[0, width) × [0, height)`, and both scale factors must be finite and
/// positive; violations fail fast instead of reading out of range.
/// `begin == end` is defined as zero distance.
///
/// When the path runs exactly along a cell edge, that colinear stretch is
/// the cell's entire contribution and any edge crossings collected for the
/// same cell are discarded. For pathological paths that are colinear with
/// one edge while also crossing another edge of the same cell this can
/// misstate the distance; the behavior is kept as a known edge case.
///
/// Error accumulates per traversed cell, so precision degrades on large
/// grids (observable beyond roughly 512×512).
pub fn surface_distance(
    begin: VoxelCoord,
    end: VoxelCoord,
    field: &HeightField,
    pixel_distance: f64,
    pixel_height: f64,
) -> TerrainResult<f64> {
    for point in [begin, end] {
        if !field.contains(point) {
            return Err(TerrainError::endpoint_out_of_bounds(
                point,
                field.width(),
                field.height(),
            ));
        }
    }
    for (name, value) in [
        ("pixel_distance", pixel_distance),
        ("pixel_height", pixel_height),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(TerrainError::invalid_scale(name, value));
        }
    }
    if begin == end {
        return Ok(0.0);
    }

    // The cell grid is one smaller than the sample grid on each axis.
    let grid_width = field.width() as i32 - 1;
    let grid_height = field.height() as i32 - 1;
    let voxels = traverse_voxels(begin, end, grid_width, grid_height);
    debug!(
        cells = voxels.len(),
        begin = ?(begin.x, begin.y),
        end = ?(end.x, end.y),
        "accumulating surface distance"
    );

    let mut distance = 0.0;
    for voxel in voxels {
        let hits = intersect_segment_with_boundary(begin, end, &voxel_boundary_loop(voxel));

        let mut crossings: Vec<(f64, Point3<f64>)> = Vec::with_capacity(5);
        let mut colinear_length: Option<f64> = None;
        for hit in hits {
            match hit {
                BoundaryHit::Crossing {
                    edge_start,
                    edge_end,
                    edge_t,
                    path_t,
                } => {
                    let point = lift_along_edge(
                        field,
                        edge_start,
                        edge_end,
                        pixel_distance,
                        pixel_height,
                        edge_t,
                    );
                    crossings.push((path_t, point));
                }
                BoundaryHit::ColinearOverlap {
                    edge_start,
                    edge_end,
                    t0,
                    t1,
                } => {
                    let p0 = lift_along_edge(
                        field,
                        edge_start,
                        edge_end,
                        pixel_distance,
                        pixel_height,
                        t0,
                    );
                    let p1 = lift_along_edge(
                        field,
                        edge_start,
                        edge_end,
                        pixel_distance,
                        pixel_height,
                        t1,
                    );
                    colinear_length = Some(nalgebra::distance(&p0, &p1));
                }
            }
        }

        if let Some(length) = colinear_length {
            // Colinear stretch supersedes any crossings in this cell.
            distance += length;
        } else if crossings.len() >= 2 {
            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));
            for pair in crossings.windows(2) {
                distance += nalgebra::distance(&pair[0].1, &pair[1].1);
            }
        }
    }

    Ok(distance)
}
