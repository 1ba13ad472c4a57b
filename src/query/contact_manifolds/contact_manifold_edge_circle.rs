use crate::math::{Isometry, Point, Vector};
use crate::query::{ContactId, FeatureKind, Manifold, ManifoldPoint, ManifoldType};
use crate::shape::{Circle, Edge};

/// Computes the contact manifold between one edge of a chain and a circle.
///
/// `pos12` maps the circle's local coordinates into the edge's frame. The
/// circle center is classified against the Voronoi regions of the segment:
///
/// * interior region: a face contact with the segment's normal oriented
///   toward the circle;
/// * endpoint regions: a circle-vs-point contact against that endpoint —
///   *unless* a ghost vertex shows that the circle actually lies over the
///   neighboring chain link, in which case the contact belongs to that
///   neighbor and this edge reports nothing. Exactly one of two adjacent
///   edges owns a contact near their shared vertex; without this rule a
///   shape sliding along the chain would collide with every interior vertex.
pub fn contact_manifold_edge_circle(
    pos12: &Isometry,
    edge1: &Edge,
    circle2: &Circle,
    manifold: &mut Manifold,
) {
    manifold.clear();

    let q = pos12 * circle2.center;

    let a = edge1.v1;
    let b = edge1.v2;
    let e = b - a;

    // Barycentric coordinates of the projection of `q` onto the segment.
    let u = e.dot(&(b - q));
    let v = e.dot(&(q - a));

    let radius = edge1.radius + circle2.radius;

    // Region A.
    if v <= 0.0 {
        let p = a;
        if na::distance_squared(&q, &p) > radius * radius {
            return;
        }

        // Defer to the previous edge when the circle is in its interior region.
        if let Some(v0) = edge1.v0 {
            let e1 = a - v0;
            if e1.dot(&(a - q)) > 0.0 {
                return;
            }
        }

        manifold.kind = ManifoldType::Circles;
        manifold.local_normal = na::zero();
        manifold.local_point = p;
        manifold.points.push(ManifoldPoint::new(
            circle2.center,
            ContactId::new(0, FeatureKind::Vertex, 0, FeatureKind::Vertex),
        ));
        return;
    }

    // Region B.
    if u <= 0.0 {
        let p = b;
        if na::distance_squared(&q, &p) > radius * radius {
            return;
        }

        // Defer to the next edge when the circle is in its interior region.
        if let Some(v3) = edge1.v3 {
            let e2 = v3 - b;
            if e2.dot(&(q - b)) > 0.0 {
                return;
            }
        }

        manifold.kind = ManifoldType::Circles;
        manifold.local_normal = na::zero();
        manifold.local_point = p;
        manifold.points.push(ManifoldPoint::new(
            circle2.center,
            ContactId::new(1, FeatureKind::Vertex, 0, FeatureKind::Vertex),
        ));
        return;
    }

    // Region AB.
    let den = e.norm_squared();
    debug_assert!(den > 0.0);
    let p = Point::from((u * a.coords + v * b.coords) / den);
    if na::distance_squared(&q, &p) > radius * radius {
        return;
    }

    let mut n = Vector::new(-e.y, e.x);
    if n.dot(&(q - a)) < 0.0 {
        n = -n;
    }

    manifold.kind = ManifoldType::FaceA;
    manifold.local_normal = n.normalize();
    manifold.local_point = a;
    manifold.points.push(ManifoldPoint::new(
        circle2.center,
        ContactId::new(0, FeatureKind::Face, 0, FeatureKind::Vertex),
    ));
}
