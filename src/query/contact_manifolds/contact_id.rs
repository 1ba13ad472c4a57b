/// The kind of shape feature taking part in a contact: a corner vertex or a face.
///
/// In 2D a "face" is an edge of a polygon (or the interior of an edge
/// shape); a "vertex" is an endpoint or polygon corner.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Default)]
pub enum FeatureKind {
    /// A corner point of the shape.
    #[default]
    Vertex = 0,
    /// An edge of the shape's boundary.
    Face = 1,
}

/// The identity of one contact point, packed into a single `u32`.
///
/// A contact point is identified by the pair of features it lies on: an
/// index and a kind for each shape. Two manifolds produced on successive
/// frames for the same shape pair describe the *same physical contact*
/// exactly when these IDs compare equal, which is what lets the solver carry
/// accumulated impulses from one frame to the next.
///
/// The four fields are packed into the four bytes of a `u32`:
///
/// ```text
/// ┌────────┬────────┬────────┬────────┐
/// │ kind B │ kind A │ index B│ index A│
/// │ 31..24 │ 23..16 │ 15..8  │ 7..0   │
/// └────────┴────────┴────────┴────────┘
/// ```
///
/// so that equality is a single word compare and the ID can be stored and
/// hashed cheaply.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Default)]
pub struct ContactId(pub u32);

impl ContactId {
    /// The all-zero contact ID, used by single-point manifolds that have no
    /// feature ambiguity (circle against circle, or a circle against one
    /// feature of another shape).
    pub const ZERO: Self = ContactId(0);

    /// Packs the feature pair `(index_a, kind_a, index_b, kind_b)` into an ID.
    #[inline]
    pub fn new(index_a: u8, kind_a: FeatureKind, index_b: u8, kind_b: FeatureKind) -> Self {
        ContactId(
            index_a as u32
                | (index_b as u32) << 8
                | (kind_a as u32) << 16
                | (kind_b as u32) << 24,
        )
    }

    /// The feature index on the first shape.
    #[inline]
    pub fn index_a(self) -> u8 {
        self.0 as u8
    }

    /// The feature index on the second shape.
    #[inline]
    pub fn index_b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The feature kind on the first shape.
    #[inline]
    pub fn kind_a(self) -> FeatureKind {
        if self.0 & (1 << 16) != 0 {
            FeatureKind::Face
        } else {
            FeatureKind::Vertex
        }
    }

    /// The feature kind on the second shape.
    #[inline]
    pub fn kind_b(self) -> FeatureKind {
        if self.0 & (1 << 24) != 0 {
            FeatureKind::Face
        } else {
            FeatureKind::Vertex
        }
    }

    /// Swaps the roles of the two shapes in this ID.
    #[inline]
    #[must_use]
    pub fn flip(self) -> Self {
        ContactId::new(self.index_b(), self.kind_b(), self.index_a(), self.kind_a())
    }
}

#[cfg(test)]
mod test {
    use super::{ContactId, FeatureKind};

    #[test]
    fn test_pack_unpack() {
        let id = ContactId::new(3, FeatureKind::Face, 250, FeatureKind::Vertex);
        assert_eq!(id.index_a(), 3);
        assert_eq!(id.index_b(), 250);
        assert_eq!(id.kind_a(), FeatureKind::Face);
        assert_eq!(id.kind_b(), FeatureKind::Vertex);
    }

    #[test]
    fn test_flip_swaps_sides() {
        let id = ContactId::new(1, FeatureKind::Vertex, 2, FeatureKind::Face);
        let flipped = id.flip();
        assert_eq!(flipped.index_a(), 2);
        assert_eq!(flipped.index_b(), 1);
        assert_eq!(flipped.kind_a(), FeatureKind::Face);
        assert_eq!(flipped.kind_b(), FeatureKind::Vertex);
        assert_eq!(flipped.flip(), id);
    }

    #[test]
    fn test_equality_is_word_compare() {
        let a = ContactId::new(0, FeatureKind::Vertex, 0, FeatureKind::Vertex);
        assert_eq!(a, ContactId::ZERO);
    }
}
