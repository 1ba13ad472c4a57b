use crate::math::{Isometry, Real, DEFAULT_EPSILON};
use crate::query::{ContactId, Manifold, ManifoldPoint, ManifoldType};
use crate::shape::{Circle, Polygon};

/// Computes the contact manifold between a polygon and a circle.
///
/// `pos12` maps the circle's local coordinates into the polygon's frame.
/// The face of the polygon with the least penetration of the circle center
/// is the candidate feature; the circle center is then classified against
/// the Voronoi regions of that face (interior, first vertex, second vertex)
/// to pick the final normal.
pub fn contact_manifold_polygon_circle(
    pos12: &Isometry,
    polygon1: &Polygon,
    circle2: &Circle,
    manifold: &mut Manifold,
) {
    manifold.clear();

    let c_local = pos12 * circle2.center;
    let radius = polygon1.radius() + circle2.radius;

    let vertices = polygon1.vertices();
    let normals = polygon1.normals();

    // Face of least penetration of the circle center.
    let mut normal_index = 0;
    let mut separation = -Real::MAX;

    for i in 0..polygon1.count() {
        let s = normals[i].dot(&(c_local - vertices[i]));

        if s > radius {
            return;
        }
        if s > separation {
            separation = s;
            normal_index = i;
        }
    }

    let v1 = vertices[normal_index];
    let v2 = vertices[(normal_index + 1) % polygon1.count()];

    // Center inside the polygon: the face normal is reliable as-is.
    if separation < DEFAULT_EPSILON {
        manifold.kind = ManifoldType::FaceA;
        manifold.local_normal = normals[normal_index];
        manifold.local_point = na::center(&v1, &v2);
        manifold
            .points
            .push(ManifoldPoint::new(circle2.center, ContactId::ZERO));
        return;
    }

    // Voronoi regions of the face.
    let u1 = (c_local - v1).dot(&(v2 - v1));
    let u2 = (c_local - v2).dot(&(v1 - v2));

    if u1 <= 0.0 {
        if na::distance_squared(&c_local, &v1) > radius * radius {
            return;
        }
        manifold.kind = ManifoldType::FaceA;
        manifold.local_normal = (c_local - v1).normalize();
        manifold.local_point = v1;
    } else if u2 <= 0.0 {
        if na::distance_squared(&c_local, &v2) > radius * radius {
            return;
        }
        manifold.kind = ManifoldType::FaceA;
        manifold.local_normal = (c_local - v2).normalize();
        manifold.local_point = v2;
    } else {
        let face_center = na::center(&v1, &v2);
        if (c_local - face_center).dot(&normals[normal_index]) > radius {
            return;
        }
        manifold.kind = ManifoldType::FaceA;
        manifold.local_normal = normals[normal_index];
        manifold.local_point = face_center;
    }

    manifold
        .points
        .push(ManifoldPoint::new(circle2.center, ContactId::ZERO));
}
