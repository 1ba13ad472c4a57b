use crate::math::{Isometry, Real};
use crate::shape::Polygon;

/// Finds the face of `p1` with the largest separation from `p2`.
///
/// `pos12` maps `p2`'s local coordinates into `p1`'s frame. For each face
/// normal of `p1` the deepest vertex of `p2` along that normal is found with
/// a support query; the face whose deepest vertex is least penetrating gives
/// the SAT separation. Returns `(separation, face_index)`; a positive
/// separation larger than the radius sum proves the polygons disjoint.
pub fn polygon_polygon_find_max_separation(
    p1: &Polygon,
    p2: &Polygon,
    pos12: &Isometry,
) -> (Real, usize) {
    let mut max_separation = -Real::MAX;
    let mut best_face = 0;

    for (i, (v1, n1)) in p1.vertices().iter().zip(p1.normals().iter()).enumerate() {
        let j = p2.support_point(&pos12.inverse_transform_vector(&-n1));
        let dpt = pos12 * p2.vertices()[j] - v1;
        let separation = dpt.dot(n1);

        if separation > max_separation {
            max_separation = separation;
            best_face = i;
        }
    }

    (max_separation, best_face)
}

#[cfg(test)]
mod test {
    use super::polygon_polygon_find_max_separation;
    use crate::math::Isometry;
    use crate::shape::Polygon;

    #[test]
    fn test_separated_squares() {
        let a = Polygon::rectangle(0.5, 0.5);
        let b = Polygon::rectangle(0.5, 0.5);
        let pos12 = Isometry::translation(3.0, 0.0);

        let (sep, face) = polygon_polygon_find_max_separation(&a, &b, &pos12);
        assert_relative_eq!(sep, 2.0, epsilon = 1.0e-9);
        assert_eq!(face, 1); // the +x face of `a`
    }

    #[test]
    fn test_overlapping_squares_report_penetration() {
        let a = Polygon::rectangle(0.5, 0.5);
        let b = Polygon::rectangle(0.5, 0.5);
        let pos12 = Isometry::translation(0.9, 0.0);

        let (sep, face) = polygon_polygon_find_max_separation(&a, &b, &pos12);
        assert_relative_eq!(sep, -0.1, epsilon = 1.0e-9);
        assert_eq!(face, 1);
    }
}
