//! Segments and rays derived from endpoint/origin vectors.

use super::vector::{add, length, normal, scale, subtract, t_parameter_on_ray, unit};
use super::V2;
use crate::error::GeomError;

/// Finite segment from `a` to `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub a: V2,
    pub b: V2,
}

impl Line {
    #[inline]
    pub fn new(a: V2, b: V2) -> Self {
        Self { a, b }
    }

    /// `b - a`, not normalized.
    #[inline]
    pub fn direction(&self) -> V2 {
        subtract(self.b, self.a)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        length(self.direction())
    }

    /// Direction rotated by 90°, not unit length: divide by `length()` for a
    /// unit normal.
    #[inline]
    pub fn normal(&self) -> V2 {
        normal(self.direction())
    }
}

/// Half-line through `o` with direction `d` (not necessarily unit).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub o: V2,
    pub d: V2,
}

impl Ray {
    #[inline]
    pub fn new(o: V2, d: V2) -> Self {
        Self { o, d }
    }

    /// Unit-direction ray leaving `o` at angle `a` (radians).
    pub fn from_angle(o: V2, a: f64) -> Self {
        let (s, c) = a.sin_cos();
        Self { o, d: V2::new(c, s) }
    }

    /// Same ray with `d` normalized, so `t_parameter` becomes arc length.
    pub fn normalized(&self) -> Result<Self, GeomError> {
        Ok(Self {
            o: self.o,
            d: unit(self.d)?,
        })
    }

    /// See `vector::t_parameter_on_ray`: scaled by `|d|²` for non-unit `d`.
    #[inline]
    pub fn t_parameter(&self, v: V2) -> f64 {
        t_parameter_on_ray(self.o, self.d, v)
    }

    /// `o + d·t`.
    #[inline]
    pub fn point_at(&self, t: f64) -> V2 {
        add(&[self.o, scale(self.d, t)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::TAU;

    #[test]
    fn line_derived_quantities() {
        let l = Line::new(V2::new(1.0, 1.0), V2::new(4.0, 5.0));
        assert_eq!(l.direction(), V2::new(3.0, 4.0));
        assert_eq!(l.length(), 5.0);
        assert_eq!(l.normal(), V2::new(4.0, -3.0));
        // normal is perpendicular but keeps the segment's length
        assert_eq!(l.normal().dot(&l.direction()), 0.0);
        assert_eq!(l.normal().norm(), 5.0);
    }

    #[test]
    fn degenerate_line_has_zero_length() {
        let p = V2::new(2.0, 2.0);
        let l = Line::new(p, p);
        assert_eq!(l.length(), 0.0);
        assert_eq!(l.normal(), V2::zeros());
    }

    #[test]
    fn ray_projection_foot_lies_on_ray() {
        let r = Ray::from_angle(V2::new(1.0, -1.0), TAU / 8.0);
        let q = V2::new(4.0, 0.5);
        let t = r.t_parameter(q);
        let foot = r.point_at(t);
        // q - foot is perpendicular to the direction
        assert!((q - foot).dot(&r.d).abs() < 1e-12);
    }

    #[test]
    fn ray_normalized_rescales_parameter() {
        let r = Ray::new(V2::zeros(), V2::new(2.0, 0.0));
        let q = V2::new(3.0, 1.0);
        assert_eq!(r.t_parameter(q), 6.0);
        let n = r.normalized().unwrap();
        assert_eq!(n.t_parameter(q), 3.0);
        assert_eq!(n.point_at(3.0), V2::new(3.0, 0.0));
        assert!(matches!(
            Ray::new(V2::zeros(), V2::zeros()).normalized(),
            Err(GeomError::DegenerateVector { .. })
        ));
    }
}
