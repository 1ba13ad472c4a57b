//! Geometric queries between pairs of shapes.
//!
//! The main entry points are:
//!
//! * [`contact_manifold()`] to compute the contact manifold between two
//!   shapes, dispatched on their kinds.
//! * [`intersection_test()`] to determine if two shapes are overlapping or
//!   not.
//! * [`point_states()`] to classify the points of two successive manifolds
//!   of the same pair as added, persisted, or removed.
//!
//! The functions exported by the `details` submodule are more specific
//! versions of the ones above, of the form
//! `contact_manifold_[shape1]_[shape2]()` where the shape kinds are known at
//! compile-time. They are less convenient to use than the dispatched version
//! but avoid the kind match.

pub use self::clip::{clip_segment_to_line, ClipVertex};
pub use self::contact_manifolds::{
    contact_manifold_circle_circle, contact_manifold_edge_circle, contact_manifold_edge_polygon,
    contact_manifold_polygon_circle, contact_manifold_polygon_polygon, point_states, ContactId,
    FeatureKind, Manifold, ManifoldPoint, ManifoldType, PointState, WorldManifold,
    WorldManifoldPoint,
};
pub use self::dispatch::contact_manifold;
pub use self::distance::{distance, DistanceOutput, DistanceProxy};
pub use self::error::Unsupported;
pub use self::intersection_test::intersection_test;

mod clip;
mod contact_manifolds;
mod dispatch;
mod distance;
mod error;
mod intersection_test;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::clip::*;
    pub use super::contact_manifolds::*;
    pub use super::distance::*;
    pub use super::sat::*;
}
