use crate::math::{Point, Real};

/// A circle shape.
///
/// The circle is allowed to be off-center in its own coordinate frame: a
/// fixture attached to a rigid body commonly places the circle away from the
/// body origin, so the local `center` is part of the shape rather than of the
/// transform.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Circle {
    /// The center of the circle in its own coordinate frame.
    pub center: Point,
    /// The radius of the circle.
    pub radius: Real,
}

impl Circle {
    /// Creates a new circle with the given local center and radius.
    #[inline]
    pub fn new(center: Point, radius: Real) -> Circle {
        Circle { center, radius }
    }
}
