//! Constraints iterated by an island solver.

pub use self::constant_volume_joint::ConstantVolumeJoint;
pub use self::distance_joint::DistanceJoint;
pub use self::error::ConstraintError;
pub use self::solver_data::{Position, SolverBody, SolverData, TimeStep, Velocity};

mod constant_volume_joint;
mod distance_joint;
mod error;
mod solver_data;
