use crate::math::{Point, Real, Vector, DEFAULT_EPSILON, MAX_POLYGON_VERTICES, POLYGON_RADIUS};
use crate::utils;

/// A convex polygon with at most [`MAX_POLYGON_VERTICES`] vertices.
///
/// Vertices are stored in counter-clockwise order; `normals[i]` is the
/// outward unit normal of the edge joining vertex `i` to vertex
/// `(i + 1) % count`. The polygon carries a small collision skin
/// ([`POLYGON_RADIUS`]) so that manifolds form slightly before the cores
/// touch.
///
/// Vertex and normal storage is inline. Polygons of this size are copied
/// around freely by the narrow-phase, so no allocation is involved anywhere.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Polygon {
    vertices: [Point; MAX_POLYGON_VERTICES],
    normals: [Vector; MAX_POLYGON_VERTICES],
    count: usize,
    centroid: Point,
    radius: Real,
}

impl Polygon {
    /// Creates a polygon from vertices describing a counter-clockwise convex polyline.
    ///
    /// Convexity is only checked in debug builds. Returns `None` if the
    /// vertex count is out of `[3, MAX_POLYGON_VERTICES]` or if two
    /// successive vertices coincide.
    pub fn new(points: &[Point]) -> Option<Self> {
        if points.len() < 3 || points.len() > MAX_POLYGON_VERTICES {
            return None;
        }

        let mut vertices = [Point::origin(); MAX_POLYGON_VERTICES];
        let mut normals = [Vector::zeros(); MAX_POLYGON_VERTICES];
        let count = points.len();
        vertices[..count].copy_from_slice(points);

        for i1 in 0..count {
            let i2 = (i1 + 1) % count;
            normals[i1] = *utils::ccw_face_normal([&vertices[i1], &vertices[i2]])?;
        }

        for i in 0..count {
            let j = (i + 1) % count;
            let e1 = vertices[j] - vertices[i];
            let e2 = vertices[(j + 1) % count] - vertices[j];
            debug_assert!(e1.perp(&e2) >= 0.0, "polygon vertices must be convex and CCW");
        }

        Some(Polygon {
            vertices,
            normals,
            count,
            centroid: Self::compute_centroid(&vertices[..count]),
            radius: POLYGON_RADIUS,
        })
    }

    /// Creates an axis-aligned rectangle centered at the origin with the given half-extents.
    pub fn rectangle(half_width: Real, half_height: Real) -> Self {
        let pts = [
            Point::new(-half_width, -half_height),
            Point::new(half_width, -half_height),
            Point::new(half_width, half_height),
            Point::new(-half_width, half_height),
        ];
        // A rectangle with positive half-extents can't fail validation.
        Self::new(&pts).unwrap()
    }

    // Triangle-fan accumulation relative to an interior reference point.
    fn compute_centroid(points: &[Point]) -> Point {
        let mut c = Vector::zeros();
        let mut area = 0.0;
        let reference = points[0];

        for i in 0..points.len() {
            let p2 = points[i] - reference;
            let p3 = points[(i + 1) % points.len()] - reference;
            let triangle_area = 0.5 * p2.perp(&p3);
            area += triangle_area;
            c += triangle_area * (p2 + p3) / 3.0;
        }

        debug_assert!(area > DEFAULT_EPSILON);
        reference + c / area
    }

    /// The vertices of this polygon, in counter-clockwise order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices[..self.count]
    }

    /// The outward unit normals of the edges of this polygon.
    #[inline]
    pub fn normals(&self) -> &[Vector] {
        &self.normals[..self.count]
    }

    /// The number of vertices of this polygon.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The centroid of this polygon, in its own coordinate frame.
    #[inline]
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// The collision skin thickness of this polygon.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The index of the vertex that maximizes the dot product with `dir`.
    #[inline]
    pub fn support_point(&self, dir: &Vector) -> usize {
        let mut best = 0;
        let mut best_dot = self.vertices[0].coords.dot(dir);
        for i in 1..self.count {
            let dot = self.vertices[i].coords.dot(dir);
            if dot > best_dot {
                best_dot = dot;
                best = i;
            }
        }
        best
    }
}

#[cfg(test)]
mod test {
    use super::Polygon;
    use crate::math::Point;

    #[test]
    fn test_rectangle_normals() {
        let poly = Polygon::rectangle(0.5, 0.5);
        assert_eq!(poly.count(), 4);
        assert_relative_eq!(poly.normals()[0].y, -1.0);
        assert_relative_eq!(poly.normals()[1].x, 1.0);
        assert_relative_eq!(poly.normals()[2].y, 1.0);
        assert_relative_eq!(poly.normals()[3].x, -1.0);
        assert_relative_eq!(poly.centroid(), Point::origin());
    }

    #[test]
    fn test_degenerate_polygon_is_rejected() {
        let flat = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 0.0),
        ];
        assert!(Polygon::new(&flat).is_none());
        assert!(Polygon::new(&[Point::origin(); 2]).is_none());
    }
}
