use crate::math::{Isometry, Point, Real, Vector, ANGULAR_SLOP, MAX_POLYGON_VERTICES};
use crate::query::{
    clip_segment_to_line, ClipVertex, ContactId, FeatureKind, Manifold, ManifoldPoint,
    ManifoldType,
};
use crate::shape::{Edge, Polygon};

/// Computes the contact manifold between one edge of a chain and a polygon.
///
/// `pos12` maps the polygon's local coordinates into the edge's frame.
///
/// This is a SAT between a single segment (augmented with its chain
/// adjacency) and a convex polygon. The ghost vertices restrict which
/// collision normals the edge may produce: at a convex corner the admissible
/// normals open up toward the neighbor's normal, at a concave corner they
/// pinch down to the edge normal alone. Polygon axes whose normal falls
/// outside that cone are discarded, which is what keeps a polygon from
/// snagging on the interior vertices of a chain.
pub fn contact_manifold_edge_polygon(
    pos12: &Isometry,
    edge1: &Edge,
    polygon2: &Polygon,
    manifold: &mut Manifold,
) {
    EdgePolygonCollider::new(pos12, edge1, polygon2).collide(pos12, polygon2, manifold)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum AxisKind {
    EdgeA,
    PolygonB,
}

#[derive(Copy, Clone, Debug)]
struct Axis {
    kind: AxisKind,
    index: usize,
    separation: Real,
}

/// Which of the three adjacency normals (±) an admissibility bound uses.
#[derive(Copy, Clone, Debug)]
enum Limit {
    /// `normal0` (previous edge).
    N0,
    /// `normal1` (this edge).
    N1,
    /// `normal2` (next edge).
    N2,
    /// `-normal0`.
    NegN0,
    /// `-normal1`.
    NegN1,
    /// `-normal2`.
    NegN2,
}

/// One row of the adjacency table: how to orient the edge normal and bound
/// the admissible collision normals, given which side of the edge the
/// polygon centroid is on.
struct NormalLimits {
    /// Decides the front side from the centroid offsets past the three planes.
    front: fn(o0: Real, o1: Real, o2: Real) -> bool,
    /// `[normal, lower limit, upper limit]` when the polygon is in front.
    front_axes: [Limit; 3],
    /// `[normal, lower limit, upper limit]` when the polygon is behind.
    back_axes: [Limit; 3],
}

fn front_any3(o0: Real, o1: Real, o2: Real) -> bool {
    o0 >= 0.0 || o1 >= 0.0 || o2 >= 0.0
}
fn front_o0_or_both12(o0: Real, o1: Real, o2: Real) -> bool {
    o0 >= 0.0 || (o1 >= 0.0 && o2 >= 0.0)
}
fn front_o2_or_both01(o0: Real, o1: Real, o2: Real) -> bool {
    o2 >= 0.0 || (o0 >= 0.0 && o1 >= 0.0)
}
fn front_all3(o0: Real, o1: Real, o2: Real) -> bool {
    o0 >= 0.0 && o1 >= 0.0 && o2 >= 0.0
}
fn front_any01(o0: Real, o1: Real, _o2: Real) -> bool {
    o0 >= 0.0 || o1 >= 0.0
}
fn front_all01(o0: Real, o1: Real, _o2: Real) -> bool {
    o0 >= 0.0 && o1 >= 0.0
}
fn front_any12(_o0: Real, o1: Real, o2: Real) -> bool {
    o1 >= 0.0 || o2 >= 0.0
}
fn front_all12(_o0: Real, o1: Real, o2: Real) -> bool {
    o1 >= 0.0 && o2 >= 0.0
}
fn front_o1(_o0: Real, o1: Real, _o2: Real) -> bool {
    o1 >= 0.0
}

/// The adjacency table, indexed by
/// `has_v0 << 3 | has_v3 << 2 | convex1 << 1 | convex2`.
///
/// Rows whose ghost is absent ignore the corresponding convexity bit (the
/// entries are duplicated) and never select the missing normal. Each row is
/// an independent statement about one corner configuration of the chain,
/// which keeps them individually testable.
static NORMAL_LIMITS: [NormalLimits; 16] = {
    use self::Limit::*;

    [
        // has_v0 = false, has_v3 = false: a free-standing edge collides on
        // either side with its own normal only.
        NormalLimits { front: front_o1, front_axes: [N1, NegN1, NegN1], back_axes: [NegN1, N1, N1] },
        NormalLimits { front: front_o1, front_axes: [N1, NegN1, NegN1], back_axes: [NegN1, N1, N1] },
        NormalLimits { front: front_o1, front_axes: [N1, NegN1, NegN1], back_axes: [NegN1, N1, N1] },
        NormalLimits { front: front_o1, front_axes: [N1, NegN1, NegN1], back_axes: [NegN1, N1, N1] },
        // has_v0 = false, has_v3 = true, concave at v2.
        NormalLimits { front: front_all12, front_axes: [N1, NegN1, N1], back_axes: [NegN1, NegN2, N1] },
        // has_v0 = false, has_v3 = true, convex at v2.
        NormalLimits { front: front_any12, front_axes: [N1, NegN1, N2], back_axes: [NegN1, NegN1, N1] },
        NormalLimits { front: front_all12, front_axes: [N1, NegN1, N1], back_axes: [NegN1, NegN2, N1] },
        NormalLimits { front: front_any12, front_axes: [N1, NegN1, N2], back_axes: [NegN1, NegN1, N1] },
        // has_v0 = true, has_v3 = false, concave at v1.
        NormalLimits { front: front_all01, front_axes: [N1, N1, NegN1], back_axes: [NegN1, N1, NegN0] },
        NormalLimits { front: front_all01, front_axes: [N1, N1, NegN1], back_axes: [NegN1, N1, NegN0] },
        // has_v0 = true, has_v3 = false, convex at v1.
        NormalLimits { front: front_any01, front_axes: [N1, N0, NegN1], back_axes: [NegN1, N1, NegN1] },
        NormalLimits { front: front_any01, front_axes: [N1, N0, NegN1], back_axes: [NegN1, N1, NegN1] },
        // has_v0 = true, has_v3 = true, concave at both corners.
        NormalLimits { front: front_all3, front_axes: [N1, N1, N1], back_axes: [NegN1, NegN2, NegN0] },
        // has_v0 = true, has_v3 = true, concave at v1, convex at v2.
        NormalLimits { front: front_o2_or_both01, front_axes: [N1, N1, N2], back_axes: [NegN1, NegN1, NegN0] },
        // has_v0 = true, has_v3 = true, convex at v1, concave at v2.
        NormalLimits { front: front_o0_or_both12, front_axes: [N1, N0, N1], back_axes: [NegN1, NegN2, NegN1] },
        // has_v0 = true, has_v3 = true, convex at both corners.
        NormalLimits { front: front_any3, front_axes: [N1, N0, N2], back_axes: [NegN1, NegN1, NegN1] },
    ]
};

/// Scratch state for one edge-vs-polygon collision. All storage is inline;
/// an instance lives on the stack for the duration of one `collide` call.
struct EdgePolygonCollider {
    v1: Point,
    v2: Point,
    front: bool,
    normal: Vector,
    normal1: Vector,
    lower_limit: Vector,
    upper_limit: Vector,
    radius: Real,
    // The polygon, moved into the edge's frame.
    vertices2: [Point; MAX_POLYGON_VERTICES],
    normals2: [Vector; MAX_POLYGON_VERTICES],
    count2: usize,
}

impl EdgePolygonCollider {
    fn new(pos12: &Isometry, edge1: &Edge, polygon2: &Polygon) -> Self {
        let centroid2 = pos12 * polygon2.centroid();

        let v1 = edge1.v1;
        let v2 = edge1.v2;

        let edge_dir = (v2 - v1).normalize();
        let normal1 = Vector::new(edge_dir.y, -edge_dir.x);
        let offset1 = normal1.dot(&(centroid2 - v1));

        let mut normal0 = Vector::zeros();
        let mut normal2 = Vector::zeros();
        let mut offset0 = 0.0;
        let mut offset2 = 0.0;
        let mut convex1 = false;
        let mut convex2 = false;

        if let Some(v0) = edge1.v0 {
            let edge0 = (v1 - v0).normalize();
            normal0 = Vector::new(edge0.y, -edge0.x);
            convex1 = edge0.perp(&edge_dir) >= 0.0;
            offset0 = normal0.dot(&(centroid2 - v0));
        }

        if let Some(v3) = edge1.v3 {
            let edge2 = (v3 - v2).normalize();
            normal2 = Vector::new(edge2.y, -edge2.x);
            convex2 = edge_dir.perp(&edge2) > 0.0;
            offset2 = normal2.dot(&(centroid2 - v2));
        }

        let row = &NORMAL_LIMITS[(edge1.v0.is_some() as usize) << 3
            | (edge1.v3.is_some() as usize) << 2
            | (convex1 as usize) << 1
            | convex2 as usize];

        let front = (row.front)(offset0, offset1, offset2);
        let axes = if front { &row.front_axes } else { &row.back_axes };

        let select = |limit: Limit| match limit {
            Limit::N0 => normal0,
            Limit::N1 => normal1,
            Limit::N2 => normal2,
            Limit::NegN0 => -normal0,
            Limit::NegN1 => -normal1,
            Limit::NegN2 => -normal2,
        };

        let mut vertices2 = [Point::origin(); MAX_POLYGON_VERTICES];
        let mut normals2 = [Vector::zeros(); MAX_POLYGON_VERTICES];
        for i in 0..polygon2.count() {
            vertices2[i] = pos12 * polygon2.vertices()[i];
            normals2[i] = pos12 * polygon2.normals()[i];
        }

        EdgePolygonCollider {
            v1,
            v2,
            front,
            normal: select(axes[0]),
            normal1,
            lower_limit: select(axes[1]),
            upper_limit: select(axes[2]),
            radius: edge1.radius + polygon2.radius(),
            vertices2,
            normals2,
            count2: polygon2.count(),
        }
    }

    /// Deepest polygon vertex along the active edge normal.
    fn compute_edge_separation(&self) -> Axis {
        let mut axis = Axis {
            kind: AxisKind::EdgeA,
            index: if self.front { 0 } else { 1 },
            separation: Real::MAX,
        };

        for v in &self.vertices2[..self.count2] {
            let s = self.normal.dot(&(v - self.v1));
            if s < axis.separation {
                axis.separation = s;
            }
        }

        axis
    }

    /// Best polygon face axis whose normal lies inside the admissible cone.
    ///
    /// Returns `None` when every polygon axis was discarded by the cone.
    /// If a separating axis is found (separation beyond the radius sum) it is
    /// returned immediately, cone or not: disjoint is disjoint.
    fn compute_polygon_separation(&self) -> Option<Axis> {
        let mut axis: Option<Axis> = None;
        let perp = Vector::new(-self.normal.y, self.normal.x);

        for i in 0..self.count2 {
            let n = -self.normals2[i];

            let s1 = n.dot(&(self.vertices2[i] - self.v1));
            let s2 = n.dot(&(self.vertices2[i] - self.v2));
            let s = s1.min(s2);

            if s > self.radius {
                return Some(Axis {
                    kind: AxisKind::PolygonB,
                    index: i,
                    separation: s,
                });
            }

            // Discard axes whose normal falls outside [lower_limit, upper_limit].
            if n.dot(&perp) >= 0.0 {
                if (n - self.upper_limit).dot(&self.normal) < -ANGULAR_SLOP {
                    continue;
                }
            } else if (n - self.lower_limit).dot(&self.normal) < -ANGULAR_SLOP {
                continue;
            }

            match axis {
                Some(best) if s <= best.separation => {}
                _ => {
                    axis = Some(Axis {
                        kind: AxisKind::PolygonB,
                        index: i,
                        separation: s,
                    });
                }
            }
        }

        axis
    }

    fn collide(&self, pos12: &Isometry, polygon2: &Polygon, manifold: &mut Manifold) {
        manifold.clear();

        let edge_axis = self.compute_edge_separation();
        if edge_axis.separation > self.radius {
            return;
        }

        let polygon_axis = self.compute_polygon_separation();
        if let Some(axis) = polygon_axis {
            if axis.separation > self.radius {
                return;
            }
        }

        // Hysteresis: stick with the edge axis unless the polygon axis is
        // clearly better, so the reference face doesn't flicker.
        const K_RELATIVE_TOL: Real = 0.98;
        const K_ABSOLUTE_TOL: Real = 0.001;

        let primary_axis = match polygon_axis {
            Some(axis)
                if axis.separation > K_RELATIVE_TOL * edge_axis.separation + K_ABSOLUTE_TOL =>
            {
                axis
            }
            _ => edge_axis,
        };

        // Reference face and incident edge.
        let (incident, ref_i1, ref_i2, ref_v1, ref_v2, ref_normal);

        if primary_axis.kind == AxisKind::EdgeA {
            manifold.kind = ManifoldType::FaceA;

            // Incident edge: the polygon face most anti-parallel to the edge normal.
            let mut best = 0;
            let mut best_dot = self.normal.dot(&self.normals2[0]);
            for i in 1..self.count2 {
                let dot = self.normal.dot(&self.normals2[i]);
                if dot < best_dot {
                    best_dot = dot;
                    best = i;
                }
            }

            let i1 = best;
            let i2 = (i1 + 1) % self.count2;

            incident = [
                ClipVertex {
                    point: self.vertices2[i1],
                    id: ContactId::new(0, FeatureKind::Face, i1 as u8, FeatureKind::Vertex),
                },
                ClipVertex {
                    point: self.vertices2[i2],
                    id: ContactId::new(0, FeatureKind::Face, i2 as u8, FeatureKind::Vertex),
                },
            ];

            if self.front {
                ref_i1 = 0;
                ref_i2 = 1;
                ref_v1 = self.v1;
                ref_v2 = self.v2;
                ref_normal = self.normal1;
            } else {
                ref_i1 = 1;
                ref_i2 = 0;
                ref_v1 = self.v2;
                ref_v2 = self.v1;
                ref_normal = -self.normal1;
            }
        } else {
            manifold.kind = ManifoldType::FaceB;

            incident = [
                ClipVertex {
                    point: self.v1,
                    id: ContactId::new(
                        0,
                        FeatureKind::Vertex,
                        primary_axis.index as u8,
                        FeatureKind::Face,
                    ),
                },
                ClipVertex {
                    point: self.v2,
                    id: ContactId::new(
                        0,
                        FeatureKind::Vertex,
                        primary_axis.index as u8,
                        FeatureKind::Face,
                    ),
                },
            ];

            ref_i1 = primary_axis.index;
            ref_i2 = (ref_i1 + 1) % self.count2;
            ref_v1 = self.vertices2[ref_i1];
            ref_v2 = self.vertices2[ref_i2];
            ref_normal = self.normals2[ref_i1];
        }

        let side_normal1 = Vector::new(ref_normal.y, -ref_normal.x);
        let side_normal2 = -side_normal1;
        let side_offset1 = side_normal1.dot(&ref_v1.coords);
        let side_offset2 = side_normal2.dot(&ref_v2.coords);

        let clip1 = clip_segment_to_line(&incident, &side_normal1, side_offset1, ref_i1 as u8);
        if clip1.len() < 2 {
            return;
        }

        let clip2 = clip_segment_to_line(
            &[clip1[0], clip1[1]],
            &side_normal2,
            side_offset2,
            ref_i2 as u8,
        );
        if clip2.len() < 2 {
            return;
        }

        if primary_axis.kind == AxisKind::EdgeA {
            manifold.local_normal = ref_normal;
            manifold.local_point = ref_v1;
        } else {
            // The reference face belongs to the polygon: anchor the manifold
            // in the polygon's own frame, not in our edge-frame copy.
            manifold.local_normal = polygon2.normals()[ref_i1];
            manifold.local_point = polygon2.vertices()[ref_i1];
        }

        for cv in &clip2 {
            let separation = ref_normal.dot(&(cv.point - ref_v1));

            if separation <= self.radius {
                if primary_axis.kind == AxisKind::EdgeA {
                    manifold.points.push(ManifoldPoint::new(
                        pos12.inverse_transform_point(&cv.point),
                        cv.id,
                    ));
                } else {
                    manifold
                        .points
                        .push(ManifoldPoint::new(cv.point, cv.id.flip()));
                }
            }
        }
    }
}
