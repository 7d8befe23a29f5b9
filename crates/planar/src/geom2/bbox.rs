//! Axis-aligned bounding boxes of point sets.

use super::affine::{transform, V2Transform};
use super::V2;
use crate::error::GeomError;

/// Axis-aligned bounding box.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Built from points, the box is tight: every input lies inside and each
///   of the four edges is touched by at least one input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: V2,
    pub max: V2,
}

impl BoundingBox {
    /// Minimal box containing all `points`; empty input is an error.
    pub fn from_points(points: &[V2]) -> Result<Self, GeomError> {
        let (first, rest) = points
            .split_first()
            .ok_or(GeomError::EmptyInput { op: "bounding_box" })?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = V2::new(min.x.min(p.x), min.y.min(p.y));
            max = V2::new(max.x.max(p.x), max.y.max(p.y));
        }
        Ok(Self { min, max })
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, p: V2) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    /// `(width, height)`.
    #[inline]
    pub fn size(&self) -> V2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> V2 {
        (self.min + self.max) * 0.5
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: V2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: V2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Corners counter-clockwise starting at `min`.
    pub fn corners(&self) -> [V2; 4] {
        [
            self.min,
            V2::new(self.max.x, self.min.y),
            self.max,
            V2::new(self.min.x, self.max.y),
        ]
    }

    /// Box around the four corners after applying `t`.
    ///
    /// Exact for translations and axis-aligned scalings; for rotations and
    /// skews it bounds the transformed box, not the original points.
    pub fn transformed(&self, t: &V2Transform) -> Self {
        let [c0, c1, c2, c3] = self.corners();
        let first = transform(c0, t);
        [c1, c2, c3].iter().fold(
            Self {
                min: first,
                max: first,
            },
            |acc, c| {
                let p = transform(*c, t);
                Self {
                    min: V2::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
                    max: V2::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
                }
            },
        )
    }
}
