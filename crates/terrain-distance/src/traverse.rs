//! Grid voxel traversal.
//!
//! Enumerates, in order, every grid cell a line segment passes through,
//! using the incremental stepping scheme of Amanatides & Woo,
//! "A Fast Voxel Traversal Algorithm for Ray Tracing"
//! (<http://www.cse.yorku.ca/~amana/research/grid.pdf>).

use nalgebra::Vector2;
use tracing::trace;

use crate::intersect::intersect_ray_and_line;
use crate::types::{Ray, RayLineIntersection, VoxelCoord};

/// Step sign for one axis of the ray direction.
#[inline]
fn step_sign(component: f64) -> i32 {
    if component < 0.0 { -1 } else { 1 }
}

/// Start-voxel correction for the grid's edge-inclusive boundary convention.
///
/// An integer endpoint sits on a corner shared by up to four cells; which
/// cell the segment's interior actually occupies depends on the step signs.
/// Exhaustive table:
///
/// | step_x | step_y | Δx | Δy |
/// |--------|--------|----|----|
/// |   +1   |   +1   |  0 |  0 |
/// |   +1   |   -1   |  0 | -1 |
/// |   -1   |   -1   | -1 | -1 |
/// |   -1   |   +1   | -1 |  0 |
#[inline]
pub(crate) fn start_voxel_offset(step_x: i32, step_y: i32) -> (i32, i32) {
    match (step_x, step_y) {
        (1, -1) => (0, -1),
        (-1, -1) => (-1, -1),
        (-1, 1) => (-1, 0),
        _ => (0, 0),
    }
}

/// The voxel a segment endpoint belongs to, given the travel direction away
/// from (or, with the direction reversed, into) that endpoint.
fn to_voxel_coord(coord: VoxelCoord, direction: Vector2<f64>) -> VoxelCoord {
    let (dx, dy) = start_voxel_offset(step_sign(direction.x), step_sign(direction.y));
    VoxelCoord::new(coord.x + dx, coord.y + dy)
}

/// Ray parameter at which the ray leaves a voxel across one axis: the far
/// crossing of the pair of opposite cell edges for that axis, or infinity
/// when the ray is parallel to them (that axis is never crossed).
fn axis_exit_param(
    ray: &Ray,
    lower: (VoxelCoord, VoxelCoord),
    upper: (VoxelCoord, VoxelCoord),
) -> f64 {
    let lower_hit = intersect_ray_and_line(*ray, lower.0.cast::<f64>(), lower.1.cast::<f64>());
    let upper_hit = intersect_ray_and_line(*ray, upper.0.cast::<f64>(), upper.1.cast::<f64>());

    match (lower_hit, upper_hit) {
        (
            RayLineIntersection::Intersecting { ray_t: lower_t, .. },
            RayLineIntersection::Intersecting { ray_t: upper_t, .. },
        ) => lower_t.max(upper_t),
        _ => f64::INFINITY,
    }
}

/// Enumerate the grid cells crossed by the segment `begin → end`, in order.
///
/// The grid spans `[0, grid_width) × [0, grid_height)` in cell coordinates;
/// each cell is a unit square. The output lists every cell the segment's
/// interior passes through exactly once, from `begin`'s cell to `end`'s cell
/// inclusive. Cells outside the grid are silently omitted.
///
/// The destination cell is derived independently by running the start-voxel
/// correction with the reversed direction from `end`, rather than comparing
/// coordinates to a float-derived cell, which keeps termination robust to
/// floating-point drift.
///
/// `begin == end` yields an empty sequence.
pub fn traverse_voxels(
    begin: VoxelCoord,
    end: VoxelCoord,
    grid_width: i32,
    grid_height: i32,
) -> Vec<VoxelCoord> {
    if begin == end {
        return Vec::new();
    }

    let direction = (end.cast::<f64>() - begin.cast::<f64>()).normalize();
    let ray = Ray::new(begin.cast::<f64>(), direction);

    let start = to_voxel_coord(begin, direction);
    let mut voxel_x = start.x;
    let mut voxel_y = start.y;

    let step_x = step_sign(direction.x);
    let step_y = step_sign(direction.y);

    // Ray parameter of the first boundary crossing on each axis, measured by
    // intersecting against the start voxel's near and far edges.
    let mut t_max_x = axis_exit_param(
        &ray,
        (start, start + Vector2::new(0, 1)),
        (start + Vector2::new(1, 0), start + Vector2::new(1, 1)),
    );
    let mut t_max_y = axis_exit_param(
        &ray,
        (start, start + Vector2::new(1, 0)),
        (start + Vector2::new(0, 1), start + Vector2::new(1, 1)),
    );

    // Per-cell parameter increments. An axis-aligned ray never crosses the
    // perpendicular axis; give it an infinite increment instead of letting a
    // zero component produce NaN downstream.
    let t_delta_x = if direction.x.abs() < f64::EPSILON {
        f64::INFINITY
    } else {
        (1.0 / direction.x).abs()
    };
    let t_delta_y = if direction.y.abs() < f64::EPSILON {
        f64::INFINITY
    } else {
        (1.0 / direction.y).abs()
    };

    let target = to_voxel_coord(end, -direction);
    trace!(
        start_x = start.x,
        start_y = start.y,
        target_x = target.x,
        target_y = target.y,
        "traversing voxels"
    );

    let mut voxels = Vec::new();
    while (voxel_x >= 0 && voxel_x < grid_width)
        && (voxel_y >= 0 && voxel_y < grid_height)
        && (voxel_x != target.x || voxel_y != target.y)
    {
        voxels.push(VoxelCoord::new(voxel_x, voxel_y));
        if t_max_x < t_max_y {
            t_max_x += t_delta_x;
            voxel_x += step_x;
        } else {
            t_max_y += t_delta_y;
            voxel_y += step_y;
        }
    }

    if voxel_x == target.x && voxel_y == target.y {
        voxels.push(VoxelCoord::new(voxel_x, voxel_y));
    }

    voxels
}
