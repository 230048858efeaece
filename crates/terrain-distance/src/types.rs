//! Core geometric types for surface-distance computation.

use nalgebra::{Point2, Vector2};

use crate::error::{TerrainError, TerrainResult};

/// Integer coordinate of one grid cell (or grid sample point).
///
/// A voxel at `(x, y)` occupies the unit square `[x, x+1] × [y, y+1]`.
pub type VoxelCoord = Point2<i32>;

/// A 2D ray with an origin and a direction.
///
/// The direction is not required to be normalized. Ray parameters returned
/// by intersection queries are expressed in units of this direction vector,
/// so callers that need metric distances along the ray must normalize first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point2<f64>,
    pub direction: Vector2<f64>,
}

impl Ray {
    /// Create a ray from an origin and a direction.
    #[inline]
    pub fn new(origin: Point2<f64>, direction: Vector2<f64>) -> Self {
        Self { origin, direction }
    }

    /// Ray through two points, with `direction = to - from` (unnormalized).
    #[inline]
    pub fn through(from: Point2<f64>, to: Point2<f64>) -> Self {
        Self {
            origin: from,
            direction: to - from,
        }
    }

    /// Point at parameter `t`, in units of the direction vector.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point2<f64> {
        self.origin + self.direction * t
    }
}

/// Classification of a ray against a line segment.
///
/// `Intersecting` carries the two parameters that reconstruct the crossing
/// point. The other variants carry nothing: no parameters are defined when
/// the lines do not cross at a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayLineIntersection {
    /// Distinct parallel lines; no crossing.
    Parallel,
    /// Ray and segment lie on the same infinite line.
    Colinear,
    /// Single crossing point, satisfying
    /// `ray.origin + ray_t * ray.direction
    ///   == seg_start + line_t * (seg_end - seg_start)`.
    Intersecting {
        /// Position along the ray, in units of the ray's direction vector.
        ray_t: f64,
        /// Position along the segment; 0 is the start, 1 is the end.
        line_t: f64,
    },
}

impl RayLineIntersection {
    /// True for the `Intersecting` variant.
    #[inline]
    pub fn is_intersecting(&self) -> bool {
        matches!(self, RayLineIntersection::Intersecting { .. })
    }
}

/// A row-major grid of 8-bit elevation samples.
///
/// Sample `(x, y)` lives at index `y * width + x`. The sample count is
/// validated against `width * height` at construction, so indexing inside
/// the grid bounds can never read out of range.
#[derive(Debug, Clone)]
pub struct HeightField {
    samples: Vec<u8>,
    width: usize,
    height: usize,
}

impl HeightField {
    /// Build a height field from a flat row-major sample buffer.
    ///
    /// Fails if `width` or `height` is zero, or if the buffer length does
    /// not equal `width * height`.
    pub fn from_samples(samples: Vec<u8>, width: usize, height: usize) -> TerrainResult<Self> {
        if width == 0 || height == 0 {
            return Err(TerrainError::EmptyHeightField { width, height });
        }
        let expected = width * height;
        if samples.len() != expected {
            return Err(TerrainError::SampleCountMismatch {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            samples,
            width,
            height,
        })
    }

    /// Build a height field where every sample has the same elevation.
    pub fn flat(width: usize, height: usize, elevation: u8) -> TerrainResult<Self> {
        Self::from_samples(vec![elevation; width * height], width, height)
    }

    /// Number of sample columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of sample rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw row-major sample buffer.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Elevation sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[inline]
    pub fn sample(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.samples[y * self.width + x]
    }

    /// Whether a grid point lies within `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, point: VoxelCoord) -> bool {
        point.x >= 0
            && (point.x as usize) < self.width
            && point.y >= 0
            && (point.y as usize) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point2, Vector2};

    #[test]
    fn test_ray_point_at() {
        let ray = Ray::new(Point2::new(1.0, 2.0), Vector2::new(2.0, 0.0));
        assert_eq!(ray.point_at(0.5), Point2::new(2.0, 2.0));
    }

    #[test]
    fn test_ray_through_points() {
        let ray = Ray::through(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert_eq!(ray.direction, Vector2::new(3.0, 4.0));
        assert_eq!(ray.point_at(1.0), Point2::new(3.0, 4.0));
    }

    #[test]
    fn test_height_field_indexing() {
        let field = HeightField::from_samples(vec![0, 1, 2, 3, 4, 5], 3, 2).unwrap();
        assert_eq!(field.sample(0, 0), 0);
        assert_eq!(field.sample(2, 0), 2);
        assert_eq!(field.sample(0, 1), 3);
        assert_eq!(field.sample(2, 1), 5);
    }

    #[test]
    fn test_height_field_rejects_bad_length() {
        let err = HeightField::from_samples(vec![0; 5], 3, 2).unwrap_err();
        match err {
            TerrainError::SampleCountMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, 6);
                assert_eq!(actual, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_height_field_rejects_zero_dimension() {
        assert!(HeightField::from_samples(Vec::new(), 0, 4).is_err());
        assert!(HeightField::from_samples(Vec::new(), 4, 0).is_err());
    }

    #[test]
    fn test_height_field_contains() {
        let field = HeightField::flat(4, 3, 7).unwrap();
        assert!(field.contains(VoxelCoord::new(0, 0)));
        assert!(field.contains(VoxelCoord::new(3, 2)));
        assert!(!field.contains(VoxelCoord::new(4, 0)));
        assert!(!field.contains(VoxelCoord::new(0, 3)));
        assert!(!field.contains(VoxelCoord::new(-1, 1)));
    }
}
