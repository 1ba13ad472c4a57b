use crate::math::{Point, Real, Vector, MAX_MANIFOLD_POINTS};
use crate::query::ContactId;
use arrayvec::ArrayVec;

/// A single contact point between two shapes.
///
/// The position is stored in the local space of the *incident* shape (the
/// shape that is not the reference of the manifold): under the small
/// per-frame motions of a stepping simulation, that is the frame in which
/// the point moves the least, so a warm-started solver can reuse it across
/// frames with minimal drift.
///
/// The impulse accumulators belong to the solver; colliders always leave
/// them at zero and [`Manifold::match_points`] carries them over from the
/// previous frame.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ManifoldPoint {
    /// The contact point, in the incident shape's coordinate frame.
    pub local_point: Point,
    /// Accumulated impulse along the contact normal (solver-owned).
    pub normal_impulse: Real,
    /// Accumulated impulse along the contact tangent (solver-owned).
    pub tangent_impulse: Real,
    /// The feature pair identifying this point across frames.
    pub id: ContactId,
}

impl ManifoldPoint {
    /// Creates a contact point with zeroed impulse accumulators.
    #[inline]
    pub fn new(local_point: Point, id: ContactId) -> Self {
        ManifoldPoint {
            local_point,
            normal_impulse: 0.0,
            tangent_impulse: 0.0,
            id,
        }
    }
}

/// How the contact region of a [`Manifold`] is anchored to its two shapes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ManifoldType {
    /// Two circular features; `local_point` is the center of the first
    /// circle in its own frame and the normal is recomputed from the two
    /// centers each step.
    #[default]
    Circles,
    /// The reference face belongs to the first shape; `local_normal` and
    /// `local_point` are expressed in its frame.
    FaceA,
    /// The reference face belongs to the second shape.
    FaceB,
}

/// A contact manifold between two shapes.
///
/// The manifold describes the contact region in shape-local coordinates so
/// that it stays meaningful while both bodies move by small amounts: the
/// reference face (normal and anchor point) lives in the reference shape's
/// frame, and each contact point lives in the incident shape's frame. World
/// space quantities are recovered with [`WorldManifold`](crate::query::WorldManifold).
///
/// An empty `points` vector is the (only) encoding of "no contact".
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Manifold {
    /// The contact points. At most [`MAX_MANIFOLD_POINTS`]; empty when the
    /// shapes do not touch.
    pub points: ArrayVec<ManifoldPoint, MAX_MANIFOLD_POINTS>,
    /// The outward normal of the reference face, in the reference shape's
    /// frame. Zero for [`ManifoldType::Circles`] manifolds.
    pub local_normal: Vector,
    /// The anchor of the contact region on the reference shape, in its own
    /// frame (see [`ManifoldType`]).
    pub local_point: Point,
    /// How the manifold is anchored to the two shapes.
    pub kind: ManifoldType,
}

impl Default for ManifoldPoint {
    fn default() -> Self {
        ManifoldPoint::new(Point::origin(), ContactId::ZERO)
    }
}

impl Default for Manifold {
    fn default() -> Self {
        Manifold {
            points: ArrayVec::new(),
            local_normal: Vector::zeros(),
            local_point: Point::origin(),
            kind: ManifoldType::Circles,
        }
    }
}

impl Manifold {
    /// Creates an empty manifold.
    pub fn new() -> Self {
        Manifold::default()
    }

    /// Removes all contact points.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Swaps the roles of the two shapes described by this manifold.
    ///
    /// The reference face keeps its coordinates (they are relative to the
    /// reference *shape*, whichever side it is on); only the side labels and
    /// the feature IDs change.
    pub fn flip(&mut self) {
        self.kind = match self.kind {
            ManifoldType::Circles => ManifoldType::Circles,
            ManifoldType::FaceA => ManifoldType::FaceB,
            ManifoldType::FaceB => ManifoldType::FaceA,
        };

        for pt in &mut self.points {
            pt.id = pt.id.flip();
        }
    }

    /// Copies the impulse accumulators of `old_points` into the points of
    /// `self` whose contact ID matches.
    ///
    /// Points with no match keep zero impulses; this is exactly the
    /// warm-starting rule, since an unmatched point is a brand new contact.
    pub fn match_points(&mut self, old_points: &[ManifoldPoint]) {
        for pt in &mut self.points {
            for old in old_points {
                if old.id == pt.id {
                    pt.normal_impulse = old.normal_impulse;
                    pt.tangent_impulse = old.tangent_impulse;
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Manifold, ManifoldPoint, ManifoldType};
    use crate::math::Point;
    use crate::query::{ContactId, FeatureKind};

    #[test]
    fn test_match_points_transfers_impulses() {
        let id0 = ContactId::new(0, FeatureKind::Face, 1, FeatureKind::Vertex);
        let id1 = ContactId::new(0, FeatureKind::Face, 2, FeatureKind::Vertex);

        let mut old = ManifoldPoint::new(Point::origin(), id0);
        old.normal_impulse = 1.5;
        old.tangent_impulse = -0.25;

        let mut manifold = Manifold::new();
        manifold.points.push(ManifoldPoint::new(Point::new(1.0, 0.0), id0));
        manifold.points.push(ManifoldPoint::new(Point::new(2.0, 0.0), id1));
        manifold.match_points(&[old]);

        assert_eq!(manifold.points[0].normal_impulse, 1.5);
        assert_eq!(manifold.points[0].tangent_impulse, -0.25);
        assert_eq!(manifold.points[1].normal_impulse, 0.0);
    }

    #[test]
    fn test_flip_swaps_sides() {
        let mut manifold = Manifold::new();
        manifold.kind = ManifoldType::FaceA;
        manifold
            .points
            .push(ManifoldPoint::new(Point::origin(), ContactId::new(3, FeatureKind::Face, 7, FeatureKind::Vertex)));

        manifold.flip();
        assert_eq!(manifold.kind, ManifoldType::FaceB);
        assert_eq!(manifold.points[0].id.index_a(), 7);
        assert_eq!(manifold.points[0].id.kind_a(), FeatureKind::Vertex);
    }
}
