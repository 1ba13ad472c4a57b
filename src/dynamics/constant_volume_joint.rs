use crate::dynamics::{ConstraintError, DistanceJoint, Position, SolverBody, SolverData};
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON, LINEAR_SLOP, MAX_LINEAR_CORRECTION};

/// A constraint keeping the signed area of a ring of bodies constant.
///
/// The bodies form a closed polygon (in ring order); the joint maintains the
/// polygon's signed area at its creation-time value with a single nonlinear
/// constraint, while a ring of internal [`DistanceJoint`]s keeps the edge
/// lengths near their creation-time values. Together they make the ring
/// behave like an incompressible soft body: pressing one side in bulges the
/// others out.
///
/// The area constraint is solved by sequential impulses like everything
/// else in the island: one scalar impulse, warm-started across steps,
/// applied to every body along the outward direction of its ring
/// neighborhood.
#[derive(Clone, Debug)]
pub struct ConstantVolumeJoint {
    bodies: Vec<SolverBody>,
    target_lengths: Vec<Real>,
    target_volume: Real,
    distance_joints: Vec<DistanceJoint>,
    impulse: Real,
    // Scratch reused every solver call, one entry per body.
    normals: Vec<Vector>,
    deltas: Vec<Vector>,
}

impl ConstantVolumeJoint {
    /// Creates the joint over `bodies` (in ring order), whose centers of
    /// mass are currently at `centers`.
    ///
    /// The current edge lengths and signed area become the targets. One
    /// rigid distance joint is created per ring edge; use
    /// [`with_spring`](Self::with_spring) afterwards to soften them, or
    /// [`with_distance_joints`](Self::with_distance_joints) to supply a
    /// pre-built ring.
    pub fn new(bodies: Vec<SolverBody>, centers: &[Point]) -> Result<Self, ConstraintError> {
        assert_eq!(
            bodies.len(),
            centers.len(),
            "one center per ring body is required"
        );

        if bodies.len() < 3 {
            return Err(ConstraintError::TooFewBodies {
                found: bodies.len(),
            });
        }

        let n = bodies.len();
        let mut target_lengths = Vec::with_capacity(n);
        let mut distance_joints = Vec::with_capacity(n);

        for i in 0..n {
            let next = (i + 1) % n;
            let length = na::distance(&centers[i], &centers[next]);
            target_lengths.push(length);
            distance_joints.push(DistanceJoint::new(bodies[i], bodies[next], length));
        }

        Ok(ConstantVolumeJoint {
            target_volume: signed_area(centers.iter().copied()),
            impulse: 0.0,
            normals: vec![Vector::zeros(); n],
            deltas: vec![Vector::zeros(); n],
            bodies,
            target_lengths,
            distance_joints,
        })
    }

    /// Like [`new`](Self::new), but with a caller-supplied distance-joint
    /// ring (joint `i` spanning edge `(i, i + 1)`).
    pub fn with_distance_joints(
        bodies: Vec<SolverBody>,
        centers: &[Point],
        joints: Vec<DistanceJoint>,
    ) -> Result<Self, ConstraintError> {
        if joints.len() != bodies.len() {
            return Err(ConstraintError::DistanceJointMismatch {
                joints: joints.len(),
                bodies: bodies.len(),
            });
        }

        let mut result = Self::new(bodies, centers)?;
        result.distance_joints = joints;
        Ok(result)
    }

    /// Softens every edge joint into a damped spring.
    pub fn with_spring(mut self, frequency: Real, damping_ratio: Real) -> Self {
        self.distance_joints = self
            .distance_joints
            .into_iter()
            .map(|j| j.with_spring(frequency, damping_ratio))
            .collect();
        self
    }

    /// Scales the target area by `factor`.
    ///
    /// Factors above one make the ring push outward until it has grown by
    /// that ratio; below one it contracts.
    pub fn inflate(&mut self, factor: Real) {
        self.target_volume *= factor;
    }

    /// The signed area the joint drives the ring toward.
    #[inline]
    pub fn target_volume(&self) -> Real {
        self.target_volume
    }

    /// The rest length of ring edge `(i, i + 1)`.
    #[inline]
    pub fn target_lengths(&self) -> &[Real] {
        &self.target_lengths
    }

    /// The impulse accumulated by the area constraint.
    #[inline]
    pub fn accumulated_impulse(&self) -> Real {
        self.impulse
    }

    /// The internal distance joints, one per ring edge `(i, i + 1)`.
    #[inline]
    pub fn distance_joints(&self) -> &[DistanceJoint] {
        &self.distance_joints
    }

    /// The signed area currently enclosed by the ring.
    pub fn current_volume(&self, positions: &[Position]) -> Real {
        signed_area(
            self.bodies
                .iter()
                .map(|b| positions[b.island_index].c),
        )
    }

    // d[i] = c[next] - c[prev]: the gradient of the ring area with respect
    // to body i is perpendicular to this chord, with magnitude |d| / 2.
    fn compute_chords(&mut self, positions: &[Position]) {
        let n = self.bodies.len();
        for i in 0..n {
            let prev = if i == 0 { n - 1 } else { i - 1 };
            let next = if i == n - 1 { 0 } else { i + 1 };
            self.deltas[i] = positions[self.bodies[next].island_index].c
                - positions[self.bodies[prev].island_index].c;
        }
    }

    /// Prepares the velocity constraints and applies the warm-start impulses.
    pub fn init_velocity_constraints(&mut self, data: &mut SolverData) {
        for joint in &mut self.distance_joints {
            joint.init_velocity_constraints(data);
        }

        self.compute_chords(data.positions);

        if data.step.warm_starting {
            self.impulse *= data.step.dt_ratio;
            for (body, d) in self.bodies.iter().zip(self.deltas.iter()) {
                let v = &mut data.velocities[body.island_index].v;
                v.x += body.inv_mass * d.y * 0.5 * self.impulse;
                v.y += body.inv_mass * -d.x * 0.5 * self.impulse;
            }
        } else {
            self.impulse = 0.0;
        }
    }

    /// One Gauss–Seidel iteration of the area-rate constraint (plus one per
    /// edge joint).
    pub fn solve_velocity_constraints(&mut self, data: &mut SolverData) {
        for joint in &mut self.distance_joints {
            joint.solve_velocity_constraints(data);
        }

        self.compute_chords(data.positions);

        let mut dot_mass_sum = 0.0;
        let mut cross_mass_sum = 0.0;

        for (body, d) in self.bodies.iter().zip(self.deltas.iter()) {
            dot_mass_sum += d.norm_squared() / body.mass;
            cross_mass_sum += data.velocities[body.island_index].v.perp(d);
        }

        let lambda = -2.0 * cross_mass_sum / dot_mass_sum;
        self.impulse += lambda;

        for (body, d) in self.bodies.iter().zip(self.deltas.iter()) {
            let v = &mut data.velocities[body.island_index].v;
            v.x += body.inv_mass * d.y * 0.5 * lambda;
            v.y += body.inv_mass * -d.x * 0.5 * lambda;
        }
    }

    /// One pass of position correction; returns `true` when both the area
    /// error and every edge length are within tolerance.
    pub fn solve_position_constraints(&mut self, data: &mut SolverData) -> bool {
        let mut done = self.constrain_edges(data.positions);

        for joint in &mut self.distance_joints {
            done &= joint.solve_position_constraints(data);
        }

        done
    }

    // Distributes the area error along the outward edge normals, clamped per
    // body, and reports convergence.
    fn constrain_edges(&mut self, positions: &mut [Position]) -> bool {
        let n = self.bodies.len();

        let mut perimeter = 0.0;
        for i in 0..n {
            let next = if i == n - 1 { 0 } else { i + 1 };
            let d = positions[self.bodies[next].island_index].c
                - positions[self.bodies[i].island_index].c;
            let mut dist = d.norm();
            if dist < DEFAULT_EPSILON {
                // Coincident neighbors would blow up the normalization;
                // pretend the edge has unit length and keep going.
                log::debug!("degenerate ring edge {i} while solving a constant-volume joint");
                dist = 1.0;
            }
            self.normals[i] = Vector::new(d.y, -d.x) / dist;
            perimeter += dist;
        }

        let delta_area = self.target_volume - self.current_volume(positions);
        let to_extrude = 0.5 * delta_area / perimeter;

        let mut done = true;
        for i in 0..n {
            let next = if i == n - 1 { 0 } else { i + 1 };
            let mut delta = to_extrude * (self.normals[i] + self.normals[next]);

            let norm_sqr = delta.norm_squared();
            if norm_sqr > MAX_LINEAR_CORRECTION * MAX_LINEAR_CORRECTION {
                delta *= MAX_LINEAR_CORRECTION / norm_sqr.sqrt();
            }
            if norm_sqr > LINEAR_SLOP * LINEAR_SLOP {
                done = false;
            }

            positions[self.bodies[next].island_index].c += delta;
        }

        done
    }
}

// Shoelace formula over the ring of centers.
fn signed_area(centers: impl Iterator<Item = Point> + Clone) -> Real {
    let shifted = centers.clone().cycle().skip(1);
    0.5 * centers
        .zip(shifted)
        .map(|(c, next)| c.x * next.y - next.x * c.y)
        .sum::<Real>()
}

#[cfg(test)]
mod test {
    use super::signed_area;
    use crate::math::Point;

    #[test]
    fn test_signed_area_of_ccw_square() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        assert_relative_eq!(signed_area(square.iter().copied()), 4.0);
    }

    #[test]
    fn test_signed_area_is_negative_clockwise() {
        let square = [
            Point::new(0.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 0.0),
        ];
        assert_relative_eq!(signed_area(square.iter().copied()), -4.0);
    }
}
