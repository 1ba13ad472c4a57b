use crate::math::MAX_MANIFOLD_POINTS;
use crate::query::Manifold;

/// What happened to one manifold point slot between two successive frames.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PointState {
    /// The slot holds no point.
    #[default]
    Empty,
    /// The point appeared this frame.
    Added,
    /// The point exists in both frames.
    Persisted,
    /// The point existed last frame but is gone this frame.
    Removed,
}

/// Classifies the points of two successive manifolds of the same shape pair.
///
/// Points are matched by [`ContactId`](crate::query::ContactId) equality.
/// The first returned array describes the points of `manifold1` (each is
/// either `Persisted` or `Removed`), the second the points of `manifold2`
/// (`Persisted` or `Added`); unused slots stay `Empty`.
pub fn point_states(
    manifold1: &Manifold,
    manifold2: &Manifold,
) -> (
    [PointState; MAX_MANIFOLD_POINTS],
    [PointState; MAX_MANIFOLD_POINTS],
) {
    let mut state1 = [PointState::Empty; MAX_MANIFOLD_POINTS];
    let mut state2 = [PointState::Empty; MAX_MANIFOLD_POINTS];

    for (i, pt) in manifold1.points.iter().enumerate() {
        state1[i] = if manifold2.points.iter().any(|other| other.id == pt.id) {
            PointState::Persisted
        } else {
            PointState::Removed
        };
    }

    for (i, pt) in manifold2.points.iter().enumerate() {
        state2[i] = if manifold1.points.iter().any(|other| other.id == pt.id) {
            PointState::Persisted
        } else {
            PointState::Added
        };
    }

    (state1, state2)
}
