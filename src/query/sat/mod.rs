//! Separating-axis tests used by the polygonal colliders.

pub use self::sat_polygon_polygon::polygon_polygon_find_max_separation;

mod sat_polygon_polygon;
