//! Vector algebra on `V2`.
//!
//! Free functions rather than methods so call sites read like the formulas.
//! Each one is a thin, explicit formula over the components; nalgebra's
//! operators are used only where they compute the same thing.

use super::{BoundingBox, V2};
use crate::error::GeomError;
use crate::scalar::{EPSILON, TAU};

/// Origin of the coordinate space.
#[inline]
pub fn origin() -> V2 {
    V2::zeros()
}

/// X axis scaled by `s`.
#[inline]
pub fn x_axis(s: f64) -> V2 {
    V2::new(s, 0.0)
}

/// Y axis scaled by `s`.
#[inline]
pub fn y_axis(s: f64) -> V2 {
    V2::new(0.0, s)
}

/// Componentwise sum of any number of vectors; the empty sum is the origin.
pub fn add(vs: &[V2]) -> V2 {
    vs.iter().fold(origin(), |acc, v| V2::new(acc.x + v.x, acc.y + v.y))
}

/// `a - b`.
#[inline]
pub fn subtract(a: V2, b: V2) -> V2 {
    V2::new(a.x - b.x, a.y - b.y)
}

/// `v * s`.
#[inline]
pub fn scale(v: V2, s: f64) -> V2 {
    V2::new(v.x * s, v.y * s)
}

#[inline]
pub fn dot(a: V2, b: V2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Scalar 2D cross product: the z component of the 3D cross product, i.e.
/// the signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise.
#[inline]
pub fn cross(a: V2, b: V2) -> f64 {
    a.x * b.y - a.y * b.x
}

#[inline]
pub fn square_length(v: V2) -> f64 {
    dot(v, v)
}

#[inline]
pub fn length(v: V2) -> f64 {
    square_length(v).sqrt()
}

/// Unit vector in the direction of `v`.
///
/// Errors with `DegenerateVector` when `length(v) < EPSILON` (or is NaN):
/// a zero vector has no direction. Infinite components are rejected the
/// same way.
pub fn unit(v: V2) -> Result<V2, GeomError> {
    let l = length(v);
    if l.is_nan() || l < EPSILON {
        return Err(GeomError::DegenerateVector { length: l });
    }
    if l.is_finite() {
        return Ok(scale(v, 1.0 / l));
    }
    // |v|² overflowed; normalize a copy scaled down by its largest component.
    let m = v.x.abs().max(v.y.abs());
    if !m.is_finite() {
        return Err(GeomError::DegenerateVector { length: l });
    }
    let w = scale(v, 1.0 / m);
    Ok(scale(w, 1.0 / length(w)))
}

#[inline]
pub fn distance(a: V2, b: V2) -> f64 {
    length(subtract(a, b))
}

/// Positive angle from `b` to `a`, in `[0, TAU)`.
///
/// Not symmetric: `vector_angle(a, b) + vector_angle(b, a) == TAU` unless
/// both are zero.
#[inline]
pub fn vector_angle(a: V2, b: V2) -> f64 {
    (a.y.atan2(a.x) - b.y.atan2(b.x) + TAU) % TAU
}

/// Angle at the corner `o` from the ray `o→b` to the ray `o→a`.
#[inline]
pub fn three_point_angle(o: V2, a: V2, b: V2) -> f64 {
    vector_angle(subtract(a, o), subtract(b, o))
}

/// Parameter of `v` projected onto the ray through `o` with direction `d`:
/// `dot(v - o, d)`.
///
/// `d` is used as given. With a non-unit `d` the result is scaled by `|d|²`
/// relative to the arc-length parameter; normalize first (`Ray::normalized`)
/// when that is what you need.
#[inline]
pub fn t_parameter_on_ray(o: V2, d: V2, v: V2) -> f64 {
    dot(subtract(v, o), d)
}

/// `v` rotated by 90° clockwise: `(v.y, -v.x)`. Not normalized.
#[inline]
pub fn normal(v: V2) -> V2 {
    V2::new(v.y, -v.x)
}

/// Arithmetic mean of a non-empty point set.
pub fn center(vs: &[V2]) -> Result<V2, GeomError> {
    if vs.is_empty() {
        return Err(GeomError::EmptyInput { op: "center" });
    }
    Ok(scale(add(vs), 1.0 / vs.len() as f64))
}

/// Tight axis-aligned box around a non-empty point set.
#[inline]
pub fn bounding_box(vs: &[V2]) -> Result<BoundingBox, GeomError> {
    BoundingBox::from_points(vs)
}
