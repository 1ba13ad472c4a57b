use crate::math::{Point, Real, POLYGON_RADIUS};

/// A line segment, usually one link of a chain of edges.
///
/// Besides its two endpoints an edge may carry the neighboring vertices of
/// the adjacent links (`v0` before `v1`, `v3` after `v2`). These *ghost
/// vertices* are never collided against; they only tell the narrow-phase
/// which of two adjacent edges owns a contact near a shared vertex, and
/// whether the chain turns inward or outward there. Without them a shape
/// sliding along a chain of collinear edges would snag on every interior
/// vertex.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Edge {
    /// The first endpoint of the edge.
    pub v1: Point,
    /// The second endpoint of the edge.
    pub v2: Point,
    /// The vertex preceding `v1` in the containing chain, if any.
    pub v0: Option<Point>,
    /// The vertex following `v2` in the containing chain, if any.
    pub v3: Option<Point>,
    /// The collision skin thickness of this edge.
    pub radius: Real,
}

impl Edge {
    /// Creates a free-standing edge with no chain adjacency.
    #[inline]
    pub fn new(v1: Point, v2: Point) -> Edge {
        debug_assert!(v1 != v2, "edge endpoints must be distinct");
        Edge {
            v1,
            v2,
            v0: None,
            v3: None,
            radius: POLYGON_RADIUS,
        }
    }

    /// Creates an edge with the ghost vertices of its adjacent chain links.
    #[inline]
    pub fn with_adjacency(v0: Option<Point>, v1: Point, v2: Point, v3: Option<Point>) -> Edge {
        debug_assert!(v1 != v2, "edge endpoints must be distinct");
        Edge {
            v1,
            v2,
            v0,
            v3,
            radius: POLYGON_RADIUS,
        }
    }
}
