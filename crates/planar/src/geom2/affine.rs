//! Affine transforms of the plane as 3×3 homogeneous matrices.
//!
//! - `V2Transform`: row-major 3×3 matrix with bottom row `(0, 0, 1)`.
//! - Constructors: `identity`, `translating`, `rotation`, `scaling`,
//!   `skewing`, `mirroring`.
//! - `combining`: first listed transform is applied first.
//! - `transform`: apply to a vector, `x' = t0·x + t1·y + t2`, `y' = t3·x + t4·y + t5`.

use nalgebra::{Matrix2, Matrix3};

use super::V2;
use crate::error::GeomError;

/// 2D affine map stored as a homogeneous 3×3 matrix.
///
/// Invariants:
/// - Bottom row is exactly `(0, 0, 1)`; only the constructors in this module
///   and `from_row_major` (which validates) can build one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct V2Transform {
    m: Matrix3<f64>,
}

impl Default for V2Transform {
    fn default() -> Self {
        identity()
    }
}

impl V2Transform {
    #[inline]
    fn from_rows(r0: [f64; 3], r1: [f64; 3]) -> Self {
        Self {
            m: Matrix3::new(r0[0], r0[1], r0[2], r1[0], r1[1], r1[2], 0.0, 0.0, 1.0),
        }
    }

    #[inline]
    fn from_parts(lin: Matrix2<f64>, t: V2) -> Self {
        Self::from_rows(
            [lin[(0, 0)], lin[(0, 1)], t.x],
            [lin[(1, 0)], lin[(1, 1)], t.y],
        )
    }

    /// Build from nine row-major values; rejects a bottom row other than `(0, 0, 1)`.
    pub fn from_row_major(vals: [f64; 9]) -> Result<Self, GeomError> {
        let bottom_row = [vals[6], vals[7], vals[8]];
        if bottom_row != [0.0, 0.0, 1.0] {
            return Err(GeomError::NotAffine { bottom_row });
        }
        Ok(Self::from_rows(
            [vals[0], vals[1], vals[2]],
            [vals[3], vals[4], vals[5]],
        ))
    }

    /// The nine matrix entries in row-major order.
    #[rustfmt::skip]
    pub fn row_major(&self) -> [f64; 9] {
        let m = &self.m;
        [
            m[(0, 0)], m[(0, 1)], m[(0, 2)],
            m[(1, 0)], m[(1, 1)], m[(1, 2)],
            m[(2, 0)], m[(2, 1)], m[(2, 2)],
        ]
    }

    /// Linear 2×2 block.
    #[inline]
    pub fn linear(&self) -> Matrix2<f64> {
        Matrix2::new(self.m[(0, 0)], self.m[(0, 1)], self.m[(1, 0)], self.m[(1, 1)])
    }

    /// Image of the origin.
    #[inline]
    pub fn translation(&self) -> V2 {
        V2::new(self.m[(0, 2)], self.m[(1, 2)])
    }

    #[inline]
    pub fn apply(&self, v: V2) -> V2 {
        transform(v, self)
    }

    /// `self` followed by `next`.
    #[inline]
    pub fn then(&self, next: &V2Transform) -> V2Transform {
        combining(&[*self, *next])
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.linear().determinant()
    }

    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.determinant() > 0.0
    }

    /// Inverse map, `None` if the linear block is singular.
    pub fn inverse(&self) -> Option<Self> {
        let minv = self.linear().try_inverse()?;
        let t = -(minv * self.translation());
        Some(Self::from_parts(minv, t))
    }
}

/// No-op map.
#[inline]
pub fn identity() -> V2Transform {
    V2Transform::from_rows([1.0, 0.0, 0.0], [0.0, 1.0, 0.0])
}

/// Adds `v` to every input.
#[inline]
pub fn translating(v: V2) -> V2Transform {
    V2Transform::from_rows([1.0, 0.0, v.x], [0.0, 1.0, v.y])
}

/// Counter-clockwise rotation by `a` radians about the origin.
pub fn rotation(a: f64) -> V2Transform {
    let (s, c) = a.sin_cos();
    V2Transform::from_rows([c, -s, 0.0], [s, c, 0.0])
}

/// Scales x by `s` and y by `y_s`, or uniformly by `s` when `y_s` is `None`.
pub fn scaling(s: f64, y_s: Option<f64>) -> V2Transform {
    V2Transform::from_rows([s, 0.0, 0.0], [0.0, y_s.unwrap_or(s), 0.0])
}

/// Symmetric shear: x gains `tan(s)·y`, y gains `tan(y_s)·x` (`y_s`
/// defaults to `s`). Angles in radians.
pub fn skewing(s: f64, y_s: Option<f64>) -> V2Transform {
    V2Transform::from_rows([1.0, s.tan(), 0.0], [y_s.unwrap_or(s).tan(), 1.0, 0.0])
}

/// Negates the x and/or y axis. The conventional single mirror is
/// `mirroring(true, false)`.
pub fn mirroring(x: bool, y: bool) -> V2Transform {
    let sx = if x { -1.0 } else { 1.0 };
    let sy = if y { -1.0 } else { 1.0 };
    V2Transform::from_rows([sx, 0.0, 0.0], [0.0, sy, 0.0])
}

/// Single transform equivalent to applying `ts[0]` first, then `ts[1]`, …,
/// and the last element last. The empty list yields `identity()`.
pub fn combining(ts: &[V2Transform]) -> V2Transform {
    // Application is `M · v`, so the first transform must end up rightmost:
    // result = tn · … · t2 · t1. Fold over the reversed list, multiplying the
    // accumulator on the right. Swapping this order inverts every pipeline.
    ts.iter()
        .rev()
        .fold(identity(), |acc, t| V2Transform { m: acc.m * t.m })
}

/// Apply `t` to `v`.
#[inline]
pub fn transform(v: V2, t: &V2Transform) -> V2 {
    let m = &t.m;
    V2::new(
        m[(0, 0)] * v.x + m[(0, 1)] * v.y + m[(0, 2)],
        m[(1, 0)] * v.x + m[(1, 1)] * v.y + m[(1, 2)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: V2, b: V2, tol: f64) -> bool {
        (a - b).norm() <= tol
    }

    #[test]
    fn from_row_major_rejects_perspective_row() {
        let err = V2Transform::from_row_major([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.5, 0.0, 1.0])
            .unwrap_err();
        assert_eq!(
            err,
            GeomError::NotAffine {
                bottom_row: [0.5, 0.0, 1.0]
            }
        );
        let t = translating(V2::new(3.0, -2.0));
        assert_eq!(V2Transform::from_row_major(t.row_major()).unwrap(), t);
    }

    #[test]
    fn row_major_layout() {
        let t = translating(V2::new(3.0, -2.0));
        assert_eq!(
            t.row_major(),
            [1.0, 0.0, 3.0, 0.0, 1.0, -2.0, 0.0, 0.0, 1.0]
        );
        let r = rotation(0.3).row_major();
        assert_eq!(r[1], -(0.3f64.sin()));
        assert_eq!(r[3], 0.3f64.sin());
    }

    #[test]
    fn combining_order_is_first_listed_first() {
        // translate then scale != scale then translate
        let tr = translating(V2::new(1.0, 0.0));
        let sc = scaling(2.0, None);
        let p = V2::new(1.0, 1.0);
        assert_eq!(transform(p, &combining(&[tr, sc])), V2::new(4.0, 2.0));
        assert_eq!(transform(p, &combining(&[sc, tr])), V2::new(3.0, 2.0));
        assert_eq!(tr.then(&sc), combining(&[tr, sc]));
        assert_eq!(combining(&[]), identity());
        assert_eq!(combining(&[tr]), tr);
    }

    #[test]
    fn orientation_and_determinant() {
        assert!(rotation(1.0).is_orientation_preserving());
        assert!(!mirroring(true, false).is_orientation_preserving());
        assert!(mirroring(true, true).is_orientation_preserving());
        assert!((scaling(2.0, Some(3.0)).determinant() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_undoes_and_singular_is_none() {
        let t = combining(&[
            scaling(2.0, Some(0.5)),
            rotation(0.7),
            translating(V2::new(-3.0, 4.0)),
        ]);
        let inv = t.inverse().unwrap();
        let p = V2::new(1.25, -0.5);
        assert!(close(inv.apply(t.apply(p)), p, 1e-12));
        assert!(scaling(0.0, Some(1.0)).inverse().is_none());
    }

    proptest! {
        #[test]
        fn identity_is_exact(x in -1.0e6f64..1.0e6, y in -1.0e6f64..1.0e6) {
            let v = V2::new(x, y);
            prop_assert_eq!(transform(v, &identity()), v);
        }

        #[test]
        fn rotations_compose_additively(
            a in -10.0f64..10.0,
            b in -10.0f64..10.0,
            x in -100.0f64..100.0,
            y in -100.0f64..100.0,
        ) {
            let v = V2::new(x, y);
            let composed = transform(v, &combining(&[rotation(a), rotation(b)]));
            let direct = transform(v, &rotation(a + b));
            prop_assert!(close(composed, direct, 1e-9));
        }

        #[test]
        fn combining_matches_sequential_application(
            a in -3.0f64..3.0,
            s in 0.1f64..4.0,
            tx in -5.0f64..5.0,
            ty in -5.0f64..5.0,
        ) {
            let ts = [rotation(a), scaling(s, Some(1.0 / s)), translating(V2::new(tx, ty))];
            let v = V2::new(0.75, -1.5);
            let step = ts.iter().fold(v, |p, t| transform(p, t));
            prop_assert!(close(transform(v, &combining(&ts)), step, 1e-9));
        }
    }
}
