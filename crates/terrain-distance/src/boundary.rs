//! Intersection of the path segment with one voxel's boundary.
//!
//! A voxel's boundary is walked as a closed loop of its four edges plus the
//! internal diagonal. Each edge is classified against the path; genuine
//! crossings and colinear overlaps come back as explicit records, which
//! keeps this step independently testable instead of threading accumulator
//! state through callbacks.

use crate::intersect::intersect_ray_and_line;
use crate::types::{Ray, RayLineIntersection, VoxelCoord};

/// One interaction between the path and a cell-boundary edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryHit {
    /// The path crosses the edge.
    Crossing {
        edge_start: VoxelCoord,
        edge_end: VoxelCoord,
        /// Position of the crossing along the edge, in `[0, 1]`.
        edge_t: f64,
        /// Position of the crossing along the path, in units of
        /// `end - begin`.
        path_t: f64,
    },
    /// The path runs along the edge. `[t0, t1]` is the overlapped stretch in
    /// the edge's own parameter space, clamped to `[0, 1]`.
    ColinearOverlap {
        edge_start: VoxelCoord,
        edge_end: VoxelCoord,
        t0: f64,
        t1: f64,
    },
}

/// The boundary loop of one voxel: six points describing five consecutive
/// edges, the four sides walked bottom-right → bottom-left → top-left →
/// top-right → bottom-right, then the diagonal back to top-left.
pub fn voxel_boundary_loop(voxel: VoxelCoord) -> [VoxelCoord; 6] {
    let (x, y) = (voxel.x, voxel.y);
    [
        VoxelCoord::new(x + 1, y),
        VoxelCoord::new(x, y),
        VoxelCoord::new(x, y + 1),
        VoxelCoord::new(x + 1, y + 1),
        VoxelCoord::new(x + 1, y),
        VoxelCoord::new(x, y + 1),
    ]
}

/// Collect every crossing and colinear overlap between the segment
/// `begin → end` and the edges of `boundary_loop`.
///
/// Crossings outside the edge (`edge_t` outside `[0, 1]`) and parallel
/// non-colinear edges produce no record. A colinear edge produces a record
/// only when the projected path interval actually overlaps the edge.
pub fn intersect_segment_with_boundary(
    begin: VoxelCoord,
    end: VoxelCoord,
    boundary_loop: &[VoxelCoord; 6],
) -> Vec<BoundaryHit> {
    let begin_f = begin.cast::<f64>();
    let end_f = end.cast::<f64>();
    let ray = Ray::through(begin_f, end_f);

    let mut hits = Vec::with_capacity(5);
    for pair in boundary_loop.windows(2) {
        let (edge_start, edge_end) = (pair[0], pair[1]);
        let e0 = edge_start.cast::<f64>();
        let e1 = edge_end.cast::<f64>();

        match intersect_ray_and_line(ray, e0, e1) {
            RayLineIntersection::Colinear => {
                // Project both path endpoints onto the edge's parameter
                // space and clip the resulting interval to the edge.
                let edge_vec = e1 - e0;
                let len_sq = edge_vec.dot(&edge_vec);
                let t0 = (begin_f - e0).dot(&edge_vec) / len_sq;
                let t1 = t0 + (end_f - begin_f).dot(&edge_vec) / len_sq;
                if t1 >= 0.0 && t0 <= 1.0 {
                    hits.push(BoundaryHit::ColinearOverlap {
                        edge_start,
                        edge_end,
                        t0: t0.max(0.0),
                        t1: t1.min(1.0),
                    });
                }
            }
            RayLineIntersection::Intersecting { ray_t, line_t }
                if (0.0..=1.0).contains(&line_t) =>
            {
                hits.push(BoundaryHit::Crossing {
                    edge_start,
                    edge_end,
                    edge_t: line_t,
                    path_t: ray_t,
                });
            }
            _ => {}
        }
    }

    hits
}
