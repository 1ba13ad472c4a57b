use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON, MAX_MANIFOLD_POINTS};
use crate::query::{Manifold, ManifoldType};
use arrayvec::ArrayVec;

/// One world-space contact point derived from a [`Manifold`].
#[derive(Copy, Clone, Debug)]
pub struct WorldManifoldPoint {
    /// The contact point, halfway between the two shape surfaces.
    pub point: Point,
    /// Signed distance between the surfaces along the normal (negative when
    /// penetrating).
    pub separation: Real,
}

/// The world-space view of a [`Manifold`], given the current shape poses.
///
/// This is what a contact solver consumes each step: the manifold itself
/// stays in shape-local coordinates so it survives motion, and this view is
/// recomputed from the current transforms whenever world quantities are
/// needed.
#[derive(Clone, Debug)]
pub struct WorldManifold {
    /// The contact normal in world space, pointing from the first shape
    /// toward the second.
    pub normal: Vector,
    /// The world-space contact points.
    pub points: ArrayVec<WorldManifoldPoint, MAX_MANIFOLD_POINTS>,
}

impl WorldManifold {
    /// Unpacks `manifold` into world space.
    ///
    /// `pos1` and `pos2` are the current poses of the two shapes and
    /// `radius1`/`radius2` their collision skins (zero for a polygon core,
    /// the full radius for a circle).
    pub fn new(
        manifold: &Manifold,
        pos1: &Isometry,
        radius1: Real,
        pos2: &Isometry,
        radius2: Real,
    ) -> Self {
        let mut result = WorldManifold {
            normal: Vector::x(),
            points: ArrayVec::new(),
        };

        if manifold.points.is_empty() {
            return result;
        }

        match manifold.kind {
            ManifoldType::Circles => {
                let point1 = pos1 * manifold.local_point;
                let point2 = pos2 * manifold.points[0].local_point;

                if na::distance_squared(&point1, &point2) > DEFAULT_EPSILON * DEFAULT_EPSILON {
                    result.normal = (point2 - point1).normalize();
                }

                let c1 = point1 + result.normal * radius1;
                let c2 = point2 - result.normal * radius2;
                result.points.push(WorldManifoldPoint {
                    point: na::center(&c1, &c2),
                    separation: (c2 - c1).dot(&result.normal),
                });
            }
            ManifoldType::FaceA => {
                result.normal = pos1 * manifold.local_normal;
                let plane_point = pos1 * manifold.local_point;

                for pt in &manifold.points {
                    let clip_point = pos2 * pt.local_point;
                    let c1 = clip_point
                        + result.normal * (radius1 - (clip_point - plane_point).dot(&result.normal));
                    let c2 = clip_point - result.normal * radius2;
                    result.points.push(WorldManifoldPoint {
                        point: na::center(&c1, &c2),
                        separation: (c2 - c1).dot(&result.normal),
                    });
                }
            }
            ManifoldType::FaceB => {
                result.normal = pos2 * manifold.local_normal;
                let plane_point = pos2 * manifold.local_point;

                for pt in &manifold.points {
                    let clip_point = pos1 * pt.local_point;
                    let c2 = clip_point
                        + result.normal * (radius2 - (clip_point - plane_point).dot(&result.normal));
                    let c1 = clip_point - result.normal * radius1;
                    result.points.push(WorldManifoldPoint {
                        point: na::center(&c1, &c2),
                        separation: (c1 - c2).dot(&result.normal),
                    });
                }

                // Keep the convention that the normal points from shape 1 to shape 2.
                result.normal = -result.normal;
            }
        }

        result
    }
}
