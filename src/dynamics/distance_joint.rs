use crate::math::{Real, Vector, LINEAR_SLOP, MAX_LINEAR_CORRECTION};
use crate::dynamics::{SolverBody, SolverData};

/// A constraint holding two body centers at a fixed distance.
///
/// In rigid mode (`frequency == 0`) the rest length is enforced exactly by
/// the position solver. With a positive frequency the constraint becomes a
/// damped spring solved entirely at the velocity level; the position solver
/// then leaves it alone, since a soft constraint has no position error to
/// resolve.
///
/// The constraint is anchored at the centers of mass, so it exchanges no
/// angular momentum with its bodies.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct DistanceJoint {
    body1: SolverBody,
    body2: SolverBody,
    rest_length: Real,
    frequency: Real,
    damping_ratio: Real,
    impulse: Real,
    // Solver state, valid between init and the end of the step.
    u: Vector,
    mass: Real,
    gamma: Real,
    bias: Real,
}

impl DistanceJoint {
    /// Creates a rigid distance constraint between two body centers.
    pub fn new(body1: SolverBody, body2: SolverBody, rest_length: Real) -> Self {
        DistanceJoint {
            body1,
            body2,
            rest_length,
            frequency: 0.0,
            damping_ratio: 0.0,
            impulse: 0.0,
            u: Vector::zeros(),
            mass: 0.0,
            gamma: 0.0,
            bias: 0.0,
        }
    }

    /// Turns the constraint into a damped spring.
    pub fn with_spring(mut self, frequency: Real, damping_ratio: Real) -> Self {
        self.frequency = frequency;
        self.damping_ratio = damping_ratio;
        self
    }

    /// The rest length of this constraint.
    #[inline]
    pub fn rest_length(&self) -> Real {
        self.rest_length
    }

    /// The impulse accumulated along the constraint axis.
    #[inline]
    pub fn accumulated_impulse(&self) -> Real {
        self.impulse
    }

    /// Prepares the velocity constraint and applies the warm-start impulse.
    pub fn init_velocity_constraints(&mut self, data: &mut SolverData) {
        let c1 = data.positions[self.body1.island_index].c;
        let c2 = data.positions[self.body2.island_index].c;

        self.u = c2 - c1;
        let length = self.u.norm();
        if length > LINEAR_SLOP {
            self.u /= length;
        } else {
            self.u = Vector::zeros();
        }

        let mut inv_mass = self.body1.inv_mass + self.body2.inv_mass;
        self.mass = if inv_mass != 0.0 { 1.0 / inv_mass } else { 0.0 };

        if self.frequency > 0.0 {
            let c = length - self.rest_length;
            let omega = 2.0 * core::f64::consts::PI as Real * self.frequency;
            let d = 2.0 * self.mass * self.damping_ratio * omega;
            let k = self.mass * omega * omega;

            let h = data.step.dt;
            self.gamma = h * (d + h * k);
            self.gamma = if self.gamma != 0.0 { 1.0 / self.gamma } else { 0.0 };
            self.bias = c * h * k * self.gamma;

            inv_mass += self.gamma;
            self.mass = if inv_mass != 0.0 { 1.0 / inv_mass } else { 0.0 };
        } else {
            self.gamma = 0.0;
            self.bias = 0.0;
        }

        if data.step.warm_starting {
            self.impulse *= data.step.dt_ratio;
            let p = self.impulse * self.u;
            data.velocities[self.body1.island_index].v -= self.body1.inv_mass * p;
            data.velocities[self.body2.island_index].v += self.body2.inv_mass * p;
        } else {
            self.impulse = 0.0;
        }
    }

    /// One sequential-impulse iteration at the velocity level.
    pub fn solve_velocity_constraints(&mut self, data: &mut SolverData) {
        let v1 = data.velocities[self.body1.island_index].v;
        let v2 = data.velocities[self.body2.island_index].v;

        let cdot = self.u.dot(&(v2 - v1));
        let impulse = -self.mass * (cdot + self.bias + self.gamma * self.impulse);
        self.impulse += impulse;

        let p = impulse * self.u;
        data.velocities[self.body1.island_index].v -= self.body1.inv_mass * p;
        data.velocities[self.body2.island_index].v += self.body2.inv_mass * p;
    }

    /// One clamped position correction; returns `true` once the length error
    /// is within [`LINEAR_SLOP`].
    pub fn solve_position_constraints(&mut self, data: &mut SolverData) -> bool {
        if self.frequency > 0.0 {
            // Springs never fight the position solver.
            return true;
        }

        let c1 = data.positions[self.body1.island_index].c;
        let c2 = data.positions[self.body2.island_index].c;

        let mut u = c2 - c1;
        let length = u.norm();
        if length > 0.0 {
            u /= length;
        }

        let c = num::clamp(
            length - self.rest_length,
            -MAX_LINEAR_CORRECTION,
            MAX_LINEAR_CORRECTION,
        );

        let impulse = -self.mass * c;
        let p = impulse * u;

        data.positions[self.body1.island_index].c -= self.body1.inv_mass * p;
        data.positions[self.body2.island_index].c += self.body2.inv_mass * p;

        c.abs() < LINEAR_SLOP
    }
}

#[cfg(test)]
mod test {
    use super::DistanceJoint;
    use crate::dynamics::{Position, SolverBody, SolverData, TimeStep, Velocity};
    use crate::math::{Point, Vector};

    fn body(index: usize) -> SolverBody {
        SolverBody {
            island_index: index,
            mass: 1.0,
            inv_mass: 1.0,
        }
    }

    fn step() -> TimeStep {
        TimeStep {
            dt: 1.0 / 60.0,
            inv_dt: 60.0,
            dt_ratio: 1.0,
            warm_starting: true,
        }
    }

    #[test]
    fn test_rigid_position_solve_restores_length() {
        let mut joint = DistanceJoint::new(body(0), body(1), 1.0);
        let mut positions = [
            Position { c: Point::origin(), a: 0.0 },
            Position { c: Point::new(1.3, 0.0), a: 0.0 },
        ];
        let mut velocities = [Velocity { v: Vector::zeros(), w: 0.0 }; 2];

        let mut data = SolverData {
            step: step(),
            positions: &mut positions,
            velocities: &mut velocities,
        };

        joint.init_velocity_constraints(&mut data);
        for _ in 0..10 {
            if joint.solve_position_constraints(&mut data) {
                break;
            }
        }

        let d = data.positions[1].c - data.positions[0].c;
        assert_relative_eq!(d.norm(), 1.0, epsilon = crate::math::LINEAR_SLOP);
    }

    #[test]
    fn test_warm_start_scales_with_dt_ratio() {
        let mut joint = DistanceJoint::new(body(0), body(1), 1.0);
        let mut positions = [
            Position { c: Point::origin(), a: 0.0 },
            Position { c: Point::new(1.0, 0.0), a: 0.0 },
        ];
        // Bodies separating: the joint must pull them back.
        let mut velocities = [
            Velocity { v: Vector::new(-1.0, 0.0), w: 0.0 },
            Velocity { v: Vector::new(1.0, 0.0), w: 0.0 },
        ];

        {
            let mut data = SolverData {
                step: step(),
                positions: &mut positions,
                velocities: &mut velocities,
            };
            joint.init_velocity_constraints(&mut data);
            joint.solve_velocity_constraints(&mut data);
        }
        let accumulated = joint.accumulated_impulse();
        assert!(accumulated != 0.0);

        // Next step runs at half the dt: the carried impulse halves too.
        let mut half_step = step();
        half_step.dt_ratio = 0.5;
        let mut data = SolverData {
            step: half_step,
            positions: &mut positions,
            velocities: &mut velocities,
        };
        joint.init_velocity_constraints(&mut data);
        assert_relative_eq!(joint.accumulated_impulse(), accumulated * 0.5);
    }
}
