use core::fmt;

/// Error raised when a constraint is constructed from inconsistent inputs.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ConstraintError {
    /// A ring constraint needs at least three bodies.
    TooFewBodies {
        /// The number of bodies that were supplied.
        found: usize,
    },
    /// A supplied distance-joint ring does not match the body ring.
    DistanceJointMismatch {
        /// The number of distance joints that were supplied.
        joints: usize,
        /// The number of bodies in the ring.
        bodies: usize,
    },
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintError::TooFewBodies { found } => {
                write!(f, "a ring constraint needs at least 3 bodies, got {found}")
            }
            ConstraintError::DistanceJointMismatch { joints, bodies } => {
                write!(
                    f,
                    "expected one distance joint per ring edge ({bodies}), got {joints}"
                )
            }
        }
    }
}

impl std::error::Error for ConstraintError {}
