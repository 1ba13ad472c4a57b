//! Linear algebra type aliases and engine tolerances.

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The scalar type used throughout this crate.
#[cfg(feature = "f32")]
pub type Real = f32;

/// The point type.
pub type Point = na::Point2<Real>;

/// The vector type.
pub type Vector = na::Vector2<Real>;

/// The unit vector type.
pub type UnitVector = na::UnitVector2<Real>;

/// The rigid transformation type.
pub type Isometry = na::Isometry2<Real>;

/// The rotation type.
pub type Rotation = na::UnitComplex<Real>;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The maximum number of points a contact manifold can hold.
pub const MAX_MANIFOLD_POINTS: usize = 2;

/// The maximum number of vertices of a convex polygon shape.
pub const MAX_POLYGON_VERTICES: usize = 8;

/// Below this distance, a position constraint is considered satisfied.
///
/// This is a length, in meters. It keeps position correction from jittering
/// around an exact solution that floating-point arithmetic cannot hold.
pub const LINEAR_SLOP: Real = 0.005;

/// Angular tolerance, in radians (2 degrees).
pub const ANGULAR_SLOP: Real = 2.0 / 180.0 * core::f64::consts::PI as Real;

/// The largest position correction applied by a single solver iteration.
pub const MAX_LINEAR_CORRECTION: Real = 0.2;

/// The collision skin of polygons and edges.
///
/// Manifolds are generated up to this distance apart so that contacts form
/// slightly before shapes touch and persist slightly after they separate.
pub const POLYGON_RADIUS: Real = 2.0 * LINEAR_SLOP;
