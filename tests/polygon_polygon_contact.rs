use approx::assert_relative_eq;
use manifold2d::math::{Isometry, Point, Vector, LINEAR_SLOP};
use manifold2d::query::{self, FeatureKind, Manifold, ManifoldType};
use manifold2d::shape::Polygon;

#[test]
fn test_overlapping_unit_squares() {
    let square = Polygon::rectangle(0.5, 0.5);
    let mut manifold = Manifold::new();

    query::contact_manifold_polygon_polygon(
        &Isometry::translation(0.9, 0.0),
        &square,
        &square,
        &mut manifold,
    );

    assert_eq!(manifold.points.len(), 2);
    assert_eq!(manifold.kind, ManifoldType::FaceA);
    assert_relative_eq!(manifold.local_normal, Vector::new(1.0, 0.0), epsilon = 1.0e-9);

    // Both points sit on the incident (left) face of the second square, in
    // its own frame.
    for pt in &manifold.points {
        assert_relative_eq!(pt.local_point.x, -0.5, epsilon = 1.0e-9);
        assert_relative_eq!(pt.local_point.y.abs(), 0.5, epsilon = 1.0e-9);
    }

    // The two feature pairs are distinct vertices of the incident face
    // against the same reference face.
    assert_ne!(manifold.points[0].id, manifold.points[1].id);
    for pt in &manifold.points {
        assert_eq!(pt.id.kind_a(), FeatureKind::Face);
        assert_eq!(pt.id.kind_b(), FeatureKind::Vertex);
    }
}

#[test]
fn test_feature_ids_persist_under_small_motion() {
    let square = Polygon::rectangle(0.5, 0.5);

    let mut before = Manifold::new();
    query::contact_manifold_polygon_polygon(
        &Isometry::translation(0.9, 0.0),
        &square,
        &square,
        &mut before,
    );

    let mut after = Manifold::new();
    query::contact_manifold_polygon_polygon(
        &Isometry::translation(0.905, 0.002),
        &square,
        &square,
        &mut after,
    );

    assert_eq!(before.points.len(), 2);
    assert_eq!(after.points.len(), 2);
    for (b, a) in before.points.iter().zip(after.points.iter()) {
        assert_eq!(b.id, a.id);
    }
}

#[test]
fn test_reference_face_hysteresis() {
    let square = Polygon::rectangle(0.5, 0.5);

    // Both SAT separations are equal up to rounding; the reference must
    // stick with the first shape for any perturbation below the tolerance.
    let tol = 0.1 * LINEAR_SLOP;
    for perturbation in [0.0, tol * 0.1, -tol * 0.1, tol * 0.5, -tol * 0.5] {
        let mut manifold = Manifold::new();
        query::contact_manifold_polygon_polygon(
            &Isometry::translation(0.9, perturbation),
            &square,
            &square,
            &mut manifold,
        );
        assert_eq!(manifold.kind, ManifoldType::FaceA);
    }
}

#[test]
fn test_clearly_better_axis_flips_the_reference() {
    // A diamond poking its corner into the flat side of a square: the
    // square's face is by far the better reference, so the manifold is
    // anchored on the second shape.
    let half_diag = 0.5 * core::f64::consts::SQRT_2;
    let diamond = Polygon::new(&[
        Point::new(half_diag, 0.0),
        Point::new(0.0, half_diag),
        Point::new(-half_diag, 0.0),
        Point::new(0.0, -half_diag),
    ])
    .unwrap();
    let square = Polygon::rectangle(0.5, 0.5);

    let mut manifold = Manifold::new();
    query::contact_manifold_polygon_polygon(
        &Isometry::translation(1.2, 0.0),
        &diamond,
        &square,
        &mut manifold,
    );

    assert_eq!(manifold.kind, ManifoldType::FaceB);
    // Reference face data lives in the square's (second shape's) frame.
    assert_relative_eq!(manifold.local_normal, Vector::new(-1.0, 0.0), epsilon = 1.0e-9);
    assert_eq!(manifold.points.len(), 1);
    // The surviving point is the diamond's right corner, in the diamond's
    // (incident shape's) frame.
    assert_relative_eq!(
        manifold.points[0].local_point,
        Point::new(half_diag, 0.0),
        epsilon = 1.0e-9
    );
}

#[test]
fn test_disjoint_squares_make_no_manifold() {
    let square = Polygon::rectangle(0.5, 0.5);
    let mut manifold = Manifold::new();

    query::contact_manifold_polygon_polygon(
        &Isometry::translation(1.2, 0.0),
        &square,
        &square,
        &mut manifold,
    );
    assert!(manifold.points.is_empty());
}

#[test]
fn test_rotated_square_contact_normal_is_unit() {
    let square = Polygon::rectangle(0.5, 0.5);
    let pos12 = Isometry::new(Vector::new(0.8, 0.3), 0.4);
    let mut manifold = Manifold::new();

    query::contact_manifold_polygon_polygon(&pos12, &square, &square, &mut manifold);

    assert!(!manifold.points.is_empty());
    assert_relative_eq!(manifold.local_normal.norm(), 1.0, epsilon = 1.0e-9);
}
