//! Planar geometry kernel: scalar helpers, 2D vectors, affine transforms.
//!
//! Layout
//! - `scalar`: clamp, lerp, angle conversion, and the `TAU`/`EPSILON` constants.
//! - `geom2`: vector algebra, affine transforms, bounding boxes, lines, shapes.
//! - `error`: the typed failures of the few partial operations.
//!
//! Every operation is a pure function of its inputs; nothing here holds state.

pub mod error;
pub mod geom2;
pub mod scalar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use geom2::{BoundingBox, Line, Polygon, Polyline, Ray, V2Transform, V2};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GeomError;
    pub use crate::geom2::affine::{
        combining, identity, mirroring, rotation, scaling, skewing, transform, translating,
    };
    pub use crate::geom2::vector::{
        add, bounding_box, center, cross, distance, dot, length, normal, origin, scale,
        square_length, subtract, t_parameter_on_ray, three_point_angle, unit, vector_angle,
        x_axis, y_axis,
    };
    pub use crate::geom2::{BoundingBox, Line, Polygon, Polyline, Ray, V2Transform, V2};
    pub use crate::scalar::{clamp, degrees, lerp, radians, EPSILON, TAU};
}
