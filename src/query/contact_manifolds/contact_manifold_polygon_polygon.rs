use crate::math::{Isometry, Real, Vector, LINEAR_SLOP};
use crate::query::sat;
use crate::query::{
    clip_segment_to_line, ClipVertex, ContactId, FeatureKind, Manifold, ManifoldPoint,
    ManifoldType,
};
use crate::shape::Polygon;

/// Computes the contact manifold between two convex polygons.
///
/// `pos12` maps `polygon2`'s local coordinates into `polygon1`'s frame.
///
/// Classic SAT + clipping: the face of largest separation over both polygons
/// becomes the reference face, the most anti-parallel face of the other
/// polygon becomes the incident edge, and the incident edge is clipped
/// against the side planes of the reference face. Reference selection is
/// hysteretic (a small bias toward `polygon1`) so that near-symmetric
/// stacks do not flip their reference face from frame to frame, which would
/// reset the solver's warm-start state.
pub fn contact_manifold_polygon_polygon(
    pos12: &Isometry,
    polygon1: &Polygon,
    polygon2: &Polygon,
    manifold: &mut Manifold,
) {
    manifold.clear();

    let total_radius = polygon1.radius() + polygon2.radius();
    let pos21 = pos12.inverse();

    let (separation1, face1) = sat::polygon_polygon_find_max_separation(polygon1, polygon2, pos12);
    if separation1 > total_radius {
        return;
    }

    let (separation2, face2) = sat::polygon_polygon_find_max_separation(polygon2, polygon1, &pos21);
    if separation2 > total_radius {
        return;
    }

    let k_tol = 0.1 * LINEAR_SLOP;
    let (reference, incident, ref_edge, flip) = if separation2 > separation1 + k_tol {
        (polygon2, polygon1, face2, true)
    } else {
        (polygon1, polygon2, face1, false)
    };

    // All the clipping below happens in polygon1's frame.
    let identity = Isometry::identity();
    let (pos_ref, pos_inc) = if flip {
        (pos12, &identity)
    } else {
        (&identity, pos12)
    };

    let incident_edge = find_incident_edge(reference, ref_edge, pos_ref, incident, pos_inc);

    let iv1 = ref_edge;
    let iv2 = (ref_edge + 1) % reference.count();
    let v11_local = reference.vertices()[iv1];
    let v12_local = reference.vertices()[iv2];

    let local_tangent = (v12_local - v11_local).normalize();
    let local_normal = Vector::new(local_tangent.y, -local_tangent.x);
    let plane_point = na::center(&v11_local, &v12_local);

    let tangent = pos_ref * local_tangent;
    let normal = Vector::new(tangent.y, -tangent.x);

    let v11 = pos_ref * v11_local;
    let v12 = pos_ref * v12_local;

    let front_offset = normal.dot(&v11.coords);

    // Side planes, extruded by the skin so grazing contacts survive the clip.
    let side_offset1 = -tangent.dot(&v11.coords) + total_radius;
    let side_offset2 = tangent.dot(&v12.coords) + total_radius;

    let clip1 = clip_segment_to_line(&incident_edge, &-tangent, side_offset1, iv1 as u8);
    if clip1.len() < 2 {
        return;
    }

    let clip2 = clip_segment_to_line(&[clip1[0], clip1[1]], &tangent, side_offset2, iv2 as u8);
    if clip2.len() < 2 {
        return;
    }

    manifold.kind = if flip {
        ManifoldType::FaceB
    } else {
        ManifoldType::FaceA
    };
    manifold.local_normal = local_normal;
    manifold.local_point = plane_point;

    for cv in &clip2 {
        let separation = normal.dot(&cv.point.coords) - front_offset;

        if separation <= total_radius {
            let id = if flip { cv.id.flip() } else { cv.id };
            manifold.points.push(ManifoldPoint::new(
                pos_inc.inverse_transform_point(&cv.point),
                id,
            ));
        }
    }
}

/// Finds the edge of `incident` most anti-parallel to the reference face
/// normal, as two clip vertices tagged with the feature pair they come from.
fn find_incident_edge(
    reference: &Polygon,
    ref_edge: usize,
    pos_ref: &Isometry,
    incident: &Polygon,
    pos_inc: &Isometry,
) -> [ClipVertex; 2] {
    // Reference normal expressed in the incident polygon's frame.
    let ref_normal =
        pos_inc.inverse_transform_vector(&(pos_ref * reference.normals()[ref_edge]));

    let mut index = 0;
    let mut min_dot = Real::MAX;
    for (i, n) in incident.normals().iter().enumerate() {
        let dot = ref_normal.dot(n);
        if dot < min_dot {
            min_dot = dot;
            index = i;
        }
    }

    let i1 = index;
    let i2 = (i1 + 1) % incident.count();

    [
        ClipVertex {
            point: pos_inc * incident.vertices()[i1],
            id: ContactId::new(
                ref_edge as u8,
                FeatureKind::Face,
                i1 as u8,
                FeatureKind::Vertex,
            ),
        },
        ClipVertex {
            point: pos_inc * incident.vertices()[i2],
            id: ContactId::new(
                ref_edge as u8,
                FeatureKind::Face,
                i2 as u8,
                FeatureKind::Vertex,
            ),
        },
    ]
}
