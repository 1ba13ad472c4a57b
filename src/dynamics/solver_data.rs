use crate::math::{Point, Real, Vector};

/// The position state of one body inside an island solve.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    /// The world position of the body's center of mass.
    pub c: Point,
    /// The body's rotation angle.
    pub a: Real,
}

/// The velocity state of one body inside an island solve.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Velocity {
    /// The linear velocity of the body's center of mass.
    pub v: Vector,
    /// The angular velocity.
    pub w: Real,
}

/// Step metadata shared by every constraint of an island solve.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeStep {
    /// The time step, in seconds.
    pub dt: Real,
    /// The inverse time step (zero for a zero step).
    pub inv_dt: Real,
    /// `dt / previous dt`: accumulated impulses are rescaled by this before
    /// warm-starting so that a variable step does not over- or under-apply
    /// last frame's forces.
    pub dt_ratio: Real,
    /// Whether constraints should start from last frame's impulses.
    pub warm_starting: bool,
}

/// The island solver's view of the bodies a constraint acts on.
///
/// Positions and velocities are indexed by
/// [`SolverBody::island_index`]; the constraint mutates them in place and
/// the solver writes them back to the bodies once the island converges.
#[derive(Debug)]
pub struct SolverData<'a> {
    /// Step metadata.
    pub step: TimeStep,
    /// The position of every body in the island.
    pub positions: &'a mut [Position],
    /// The velocity of every body in the island.
    pub velocities: &'a mut [Velocity],
}

/// What a constraint needs to know about one of its bodies.
///
/// Bodies live outside this crate; a constraint only keeps this handle,
/// and reaches the actual state through [`SolverData`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverBody {
    /// The body's slot in the island's position/velocity arrays.
    pub island_index: usize,
    /// The body's mass.
    pub mass: Real,
    /// The body's inverse mass (zero for a static body).
    pub inv_mass: Real,
}
