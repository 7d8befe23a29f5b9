//! Vertex-list shapes: open polylines and closed polygons.
//!
//! Both keep vertices as given (no dedup, no winding fix-up). A polygon is
//! closed implicitly: its last vertex connects back to the first.

use super::affine::{transform, V2Transform};
use super::vector::{center, cross};
use super::{BoundingBox, Line, V2};
use crate::error::GeomError;

/// Open chain of vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub vs: Vec<V2>,
}

/// Closed ring of vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vs: Vec<V2>,
}

impl Polyline {
    #[inline]
    pub fn new(vs: Vec<V2>) -> Self {
        Self { vs }
    }

    /// `n - 1` consecutive segments.
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        self.vs.windows(2).map(|w| Line::new(w[0], w[1]))
    }

    /// Sum of segment lengths.
    pub fn length(&self) -> f64 {
        self.segments().map(|l| l.length()).sum()
    }

    pub fn center(&self) -> Result<V2, GeomError> {
        center(&self.vs)
    }

    pub fn bounding_box(&self) -> Result<BoundingBox, GeomError> {
        BoundingBox::from_points(&self.vs)
    }

    pub fn transformed(&self, t: &V2Transform) -> Self {
        Self {
            vs: self.vs.iter().map(|v| transform(*v, t)).collect(),
        }
    }
}

impl Polygon {
    #[inline]
    pub fn new(vs: Vec<V2>) -> Self {
        Self { vs }
    }

    /// Edges including the closing one; none for fewer than two vertices.
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        let n = if self.vs.len() < 2 { 0 } else { self.vs.len() };
        (0..n).map(move |k| Line::new(self.vs[k], self.vs[(k + 1) % n]))
    }

    pub fn perimeter(&self) -> f64 {
        self.segments().map(|l| l.length()).sum()
    }

    /// Shoelace area; positive for counter-clockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        0.5 * self.segments().map(|l| cross(l.a, l.b)).sum::<f64>()
    }

    /// Vertex mean (not the area centroid).
    pub fn center(&self) -> Result<V2, GeomError> {
        center(&self.vs)
    }

    pub fn bounding_box(&self) -> Result<BoundingBox, GeomError> {
        BoundingBox::from_points(&self.vs)
    }

    pub fn transformed(&self, t: &V2Transform) -> Self {
        Self {
            vs: self.vs.iter().map(|v| transform(*v, t)).collect(),
        }
    }
}
