use crate::shape::{Circle, Edge, Polygon};

/// A tagged union over the supported shape kinds.
///
/// The pairwise queries of this crate are dispatched by matching on the
/// `(kind, kind)` pair, swapping arguments where only one ordering is
/// implemented.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Shape {
    /// A circle.
    Circle(Circle),
    /// A convex polygon.
    Polygon(Polygon),
    /// One edge of a chain.
    Edge(Edge),
}

impl Shape {
    /// A reference to the underlying circle, if this shape is one.
    #[inline]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// A reference to the underlying polygon, if this shape is one.
    #[inline]
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            _ => None,
        }
    }

    /// A reference to the underlying edge, if this shape is one.
    #[inline]
    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Shape::Edge(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}

impl From<Edge> for Shape {
    fn from(e: Edge) -> Self {
        Shape::Edge(e)
    }
}
