use crate::math::{Isometry, DEFAULT_EPSILON};
use crate::query::{distance, DistanceProxy};
use crate::shape::Shape;

/// Tests whether two shapes overlap, skins included.
///
/// `pos12` maps `shape2`'s local coordinates into `shape1`'s frame. This is
/// a plain yes/no oracle on top of [`distance()`]; it produces no contact
/// information and is symmetric in its arguments.
pub fn intersection_test(pos12: &Isometry, shape1: &Shape, shape2: &Shape) -> bool {
    let proxy1 = DistanceProxy::from_shape(shape1);
    let proxy2 = DistanceProxy::from_shape(shape2);

    distance(pos12, &proxy1, &proxy2, true).distance < 10.0 * DEFAULT_EPSILON
}
