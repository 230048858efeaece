//! Ray / line-segment intersection primitives.
//!
//! Everything in this crate reduces to one classification: given a ray and a
//! segment, decide whether they are parallel, colinear, or crossing, and for
//! a crossing recover the parameter along each. The signed-area (cross
//! product) test underlies all three outcomes.

use nalgebra::{Point2, Vector2};

use crate::types::{Ray, RayLineIntersection};

/// Scalar cross product of two 2D vectors: `a.x * b.y - a.y * b.x`.
///
/// The sign gives the orientation of `b` relative to `a`; a near-zero value
/// means the vectors are (anti)parallel.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Classify a ray against the segment `seg_start → seg_end`.
///
/// When the result is [`RayLineIntersection::Intersecting`], the crossing
/// point can be reconstructed from either side:
///
/// ```text
/// point = ray.origin + ray_t * ray.direction
/// point = seg_start + line_t * (seg_end - seg_start)
/// ```
///
/// `ray_t` is in units of the given direction vector, which need not be
/// normalized. Comparisons against zero use `f64::EPSILON` to absorb
/// floating-point error in the cross products.
pub fn intersect_ray_and_line(
    ray: Ray,
    seg_start: Point2<f64>,
    seg_end: Point2<f64>,
) -> RayLineIntersection {
    let to_start = seg_start - ray.origin;
    let seg_dir = seg_end - seg_start;
    let denom = cross(ray.direction, seg_dir);
    let numer = cross(to_start, ray.direction);

    // Colinearity must be tested first: colinear configurations also have a
    // near-zero direction cross.
    if denom.abs() < f64::EPSILON && numer.abs() < f64::EPSILON {
        return RayLineIntersection::Colinear;
    }
    if denom.abs() < f64::EPSILON {
        return RayLineIntersection::Parallel;
    }

    RayLineIntersection::Intersecting {
        ray_t: cross(to_start, seg_dir) / denom,
        line_t: numer / denom,
    }
}
