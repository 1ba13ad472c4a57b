use crate::math::Isometry;
use crate::query::{ContactId, Manifold, ManifoldPoint, ManifoldType};
use crate::shape::Circle;

/// Computes the contact manifold between two circles.
///
/// `pos12` maps `circle2`'s local coordinates into `circle1`'s frame. The
/// manifold stores the two local centers; the world-space normal is
/// recomputed from the current transforms by the consumer, so this manifold
/// never goes stale under rotation.
pub fn contact_manifold_circle_circle(
    pos12: &Isometry,
    circle1: &Circle,
    circle2: &Circle,
    manifold: &mut Manifold,
) {
    manifold.clear();

    let center2_1 = pos12 * circle2.center;
    let d = center2_1 - circle1.center;
    let sum_radius = circle1.radius + circle2.radius;

    if d.norm_squared() > sum_radius * sum_radius {
        return;
    }

    manifold.kind = ManifoldType::Circles;
    manifold.local_point = circle1.center;
    manifold.local_normal = na::zero();
    manifold
        .points
        .push(ManifoldPoint::new(circle2.center, ContactId::ZERO));
}
