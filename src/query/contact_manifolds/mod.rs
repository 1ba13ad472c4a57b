pub use self::contact_id::{ContactId, FeatureKind};
pub use self::contact_manifold::{Manifold, ManifoldPoint, ManifoldType};
pub use self::contact_manifold_circle_circle::contact_manifold_circle_circle;
pub use self::contact_manifold_edge_circle::contact_manifold_edge_circle;
pub use self::contact_manifold_edge_polygon::contact_manifold_edge_polygon;
pub use self::contact_manifold_polygon_circle::contact_manifold_polygon_circle;
pub use self::contact_manifold_polygon_polygon::contact_manifold_polygon_polygon;
pub use self::point_states::{point_states, PointState};
pub use self::world_manifold::{WorldManifold, WorldManifoldPoint};

mod contact_id;
mod contact_manifold;
mod contact_manifold_circle_circle;
mod contact_manifold_edge_circle;
mod contact_manifold_edge_polygon;
mod contact_manifold_polygon_circle;
mod contact_manifold_polygon_polygon;
mod point_states;
mod world_manifold;
