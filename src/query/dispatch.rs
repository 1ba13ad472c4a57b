use crate::math::Isometry;
use crate::query::{
    contact_manifold_circle_circle, contact_manifold_edge_circle, contact_manifold_edge_polygon,
    contact_manifold_polygon_circle, contact_manifold_polygon_polygon, Manifold, Unsupported,
};
use crate::shape::Shape;

/// Computes the contact manifold between two shapes of any supported kinds.
///
/// `pos12` maps `shape2`'s local coordinates into `shape1`'s frame. Each
/// unordered pair of kinds is implemented once; for the reversed orderings
/// the arguments are swapped and the resulting manifold is
/// [flipped](Manifold::flip) so that its feature IDs and face labels still
/// refer to `shape1` as the first shape.
///
/// Edge–edge pairs are not supported (edges are meant to collide with the
/// compact shapes riding on them, chains are never tested against chains)
/// and report [`Unsupported`].
pub fn contact_manifold(
    pos12: &Isometry,
    shape1: &Shape,
    shape2: &Shape,
    manifold: &mut Manifold,
) -> Result<(), Unsupported> {
    match (shape1, shape2) {
        (Shape::Circle(c1), Shape::Circle(c2)) => {
            contact_manifold_circle_circle(pos12, c1, c2, manifold)
        }
        (Shape::Polygon(p1), Shape::Circle(c2)) => {
            contact_manifold_polygon_circle(pos12, p1, c2, manifold)
        }
        (Shape::Circle(c1), Shape::Polygon(p2)) => {
            contact_manifold_polygon_circle(&pos12.inverse(), p2, c1, manifold);
            manifold.flip();
        }
        (Shape::Polygon(p1), Shape::Polygon(p2)) => {
            contact_manifold_polygon_polygon(pos12, p1, p2, manifold)
        }
        (Shape::Edge(e1), Shape::Circle(c2)) => {
            contact_manifold_edge_circle(pos12, e1, c2, manifold)
        }
        (Shape::Circle(c1), Shape::Edge(e2)) => {
            contact_manifold_edge_circle(&pos12.inverse(), e2, c1, manifold);
            manifold.flip();
        }
        (Shape::Edge(e1), Shape::Polygon(p2)) => {
            contact_manifold_edge_polygon(pos12, e1, p2, manifold)
        }
        (Shape::Polygon(p1), Shape::Edge(e2)) => {
            contact_manifold_edge_polygon(&pos12.inverse(), e2, p1, manifold);
            manifold.flip();
        }
        (Shape::Edge(_), Shape::Edge(_)) => return Err(Unsupported),
    }

    Ok(())
}
