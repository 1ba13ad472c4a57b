use approx::assert_relative_eq;
use manifold2d::math::{Isometry, Point, Vector};
use manifold2d::query::{self, Manifold, ManifoldType};
use manifold2d::shape::{Circle, Polygon};

#[test]
fn test_concentric_unit_circles() {
    let c1 = Circle::new(Point::origin(), 1.0);
    let c2 = Circle::new(Point::origin(), 1.0);
    let mut manifold = Manifold::new();

    query::contact_manifold_circle_circle(&Isometry::identity(), &c1, &c2, &mut manifold);

    assert_eq!(manifold.points.len(), 1);
    assert_eq!(manifold.kind, ManifoldType::Circles);
    assert_eq!(manifold.local_normal, Vector::zeros());
    assert_eq!(manifold.local_point, Point::origin());
}

#[test]
fn test_overlapping_unit_circles() {
    let c1 = Circle::new(Point::origin(), 1.0);
    let c2 = Circle::new(Point::origin(), 1.0);
    let mut manifold = Manifold::new();

    query::contact_manifold_circle_circle(
        &Isometry::translation(1.5, 0.0),
        &c1,
        &c2,
        &mut manifold,
    );

    assert_eq!(manifold.points.len(), 1);
    assert_eq!(manifold.kind, ManifoldType::Circles);
    // The point is circle 2's center, in circle 2's own frame.
    assert_eq!(manifold.points[0].local_point, Point::origin());
    assert_eq!(manifold.points[0].id, manifold2d::query::ContactId::ZERO);
}

#[test]
fn test_disjoint_circles_make_no_manifold() {
    let c1 = Circle::new(Point::origin(), 1.0);
    let c2 = Circle::new(Point::origin(), 1.0);
    let mut manifold = Manifold::new();

    query::contact_manifold_circle_circle(
        &Isometry::translation(2.5, 0.0),
        &c1,
        &c2,
        &mut manifold,
    );
    assert!(manifold.points.is_empty());

    // Touching circles still collide.
    query::contact_manifold_circle_circle(
        &Isometry::translation(2.0, 0.0),
        &c1,
        &c2,
        &mut manifold,
    );
    assert_eq!(manifold.points.len(), 1);
}

#[test]
fn test_polygon_circle_face_region() {
    let square = Polygon::rectangle(0.5, 0.5);
    let circle = Circle::new(Point::origin(), 0.5);
    let mut manifold = Manifold::new();

    query::contact_manifold_polygon_circle(
        &Isometry::translation(0.8, 0.0),
        &square,
        &circle,
        &mut manifold,
    );

    assert_eq!(manifold.points.len(), 1);
    assert_eq!(manifold.kind, ManifoldType::FaceA);
    assert_relative_eq!(manifold.local_normal, Vector::new(1.0, 0.0));
    assert_relative_eq!(manifold.local_point, Point::new(0.5, 0.0));
    assert_eq!(manifold.points[0].local_point, Point::origin());
}

#[test]
fn test_polygon_circle_vertex_region() {
    let square = Polygon::rectangle(0.5, 0.5);
    let circle = Circle::new(Point::origin(), 0.5);
    let mut manifold = Manifold::new();

    query::contact_manifold_polygon_circle(
        &Isometry::translation(0.8, 0.8),
        &square,
        &circle,
        &mut manifold,
    );

    assert_eq!(manifold.points.len(), 1);
    assert_eq!(manifold.kind, ManifoldType::FaceA);
    // The normal points from the closest corner toward the circle center.
    let expected = Vector::new(1.0, 1.0).normalize();
    assert_relative_eq!(manifold.local_normal, expected, epsilon = 1.0e-9);
    assert_relative_eq!(manifold.local_point, Point::new(0.5, 0.5));
}

#[test]
fn test_polygon_circle_interior_center() {
    let square = Polygon::rectangle(0.5, 0.5);
    let circle = Circle::new(Point::origin(), 0.5);
    let mut manifold = Manifold::new();

    query::contact_manifold_polygon_circle(
        &Isometry::translation(0.2, 0.0),
        &square,
        &circle,
        &mut manifold,
    );

    // Deepest face is the +x one; its true normal is kept.
    assert_eq!(manifold.points.len(), 1);
    assert_eq!(manifold.kind, ManifoldType::FaceA);
    assert_relative_eq!(manifold.local_normal, Vector::new(1.0, 0.0));
    assert_relative_eq!(manifold.local_point, Point::new(0.5, 0.0));
}

#[test]
fn test_polygon_circle_disjoint() {
    let square = Polygon::rectangle(0.5, 0.5);
    let circle = Circle::new(Point::origin(), 0.5);
    let mut manifold = Manifold::new();

    query::contact_manifold_polygon_circle(
        &Isometry::translation(3.0, 0.0),
        &square,
        &circle,
        &mut manifold,
    );
    assert!(manifold.points.is_empty());
}
