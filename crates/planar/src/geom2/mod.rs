//! 2D geometry: vectors, affine transforms, boxes, lines, and vertex shapes.
//!
//! Purpose
//! - Provide plain `Copy` value types plus free pure functions over them.
//! - Keep degenerate-input policy explicit: `unit`, `center` and
//!   `bounding_box` return `Result`, everything else is total.
//!
//! Conventions
//! - `V2` is `nalgebra::Vector2<f64>`; equality is componentwise.
//! - `V2Transform` is a 3×3 row-major affine matrix, bottom row `(0, 0, 1)`.
//! - Angles are radians, counter-clockwise positive.

pub mod affine;
mod bbox;
mod line;
mod shapes;
pub mod vector;

pub use affine::V2Transform;
pub use bbox::BoundingBox;
pub use line::{Line, Ray};
pub use shapes::{Polygon, Polyline};

/// 2D vector (point or displacement).
pub type V2 = nalgebra::Vector2<f64>;
