use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON, MAX_POLYGON_VERTICES};
use crate::shape::Shape;
use arrayvec::ArrayVec;

/// A shape reduced to the convex hull of a few vertices plus a radius.
///
/// This is the only view of a shape the distance query needs: a circle is
/// one vertex with its radius, an edge is its two endpoints with the skin
/// radius, and a polygon is its vertex ring with the skin radius.
#[derive(Clone, Debug)]
pub struct DistanceProxy {
    /// The vertices of the proxy hull.
    pub vertices: ArrayVec<Point, MAX_POLYGON_VERTICES>,
    /// The radius inflating the hull.
    pub radius: Real,
}

impl DistanceProxy {
    /// Builds the proxy of any supported shape.
    pub fn from_shape(shape: &Shape) -> Self {
        let mut vertices = ArrayVec::new();
        let radius;

        match shape {
            Shape::Circle(c) => {
                vertices.push(c.center);
                radius = c.radius;
            }
            Shape::Edge(e) => {
                vertices.push(e.v1);
                vertices.push(e.v2);
                radius = e.radius;
            }
            Shape::Polygon(p) => {
                vertices.extend(p.vertices().iter().copied());
                radius = p.radius();
            }
        }

        DistanceProxy { vertices, radius }
    }

    /// The index of the proxy vertex that maximizes the dot product with `dir`.
    #[inline]
    pub fn support(&self, dir: &Vector) -> usize {
        let mut best = 0;
        let mut best_dot = self.vertices[0].coords.dot(dir);
        for (i, v) in self.vertices.iter().enumerate().skip(1) {
            let dot = v.coords.dot(dir);
            if dot > best_dot {
                best_dot = dot;
                best = i;
            }
        }
        best
    }
}

/// The result of a [`distance()`] query.
#[derive(Copy, Clone, Debug)]
pub struct DistanceOutput {
    /// The witness point on the first proxy, in the first shape's frame.
    pub point1: Point,
    /// The witness point on the second proxy, in the first shape's frame.
    pub point2: Point,
    /// The distance between the witness points (zero when overlapping).
    pub distance: Real,
    /// The number of GJK iterations used.
    pub iterations: u32,
}

const MAX_ITERATIONS: u32 = 20;

#[derive(Copy, Clone)]
struct SimplexVertex {
    wa: Point,     // support on proxy 1, frame 1
    wb: Point,     // support on proxy 2, mapped into frame 1
    w: Vector,     // wb - wa
    a: Real,       // barycentric coordinate
    index1: usize, // support index on proxy 1
    index2: usize, // support index on proxy 2
}

/// Computes the distance and closest points between two convex proxies.
///
/// `pos12` maps the second proxy's coordinates into the first one's frame;
/// both witness points are reported in that frame. With `use_radii` the hull
/// radii are subtracted from the result and the witness points land on the
/// inflated surfaces; overlapping inflated hulls report a distance of zero
/// with both witness points collapsed to their midpoint.
pub fn distance(
    pos12: &Isometry,
    proxy1: &DistanceProxy,
    proxy2: &DistanceProxy,
    use_radii: bool,
) -> DistanceOutput {
    // Seed the simplex with an arbitrary support pair.
    let mut simplex: ArrayVec<SimplexVertex, 3> = ArrayVec::new();
    simplex.push(make_vertex(pos12, proxy1, proxy2, 0, 0));

    let mut iterations = 0;
    while iterations < MAX_ITERATIONS {
        let saved: ArrayVec<(usize, usize), 3> =
            simplex.iter().map(|v| (v.index1, v.index2)).collect();

        match simplex.len() {
            1 => {}
            2 => solve2(&mut simplex),
            3 => solve3(&mut simplex),
            _ => unreachable!(),
        }

        // The origin is inside the triangle: overlap.
        if simplex.len() == 3 {
            break;
        }

        let d = search_direction(&simplex);
        if d.norm_squared() < DEFAULT_EPSILON * DEFAULT_EPSILON {
            // The origin sits on the simplex. Termination here keeps the
            // witness points valid; a zero direction would only produce
            // garbage supports.
            break;
        }

        let index1 = proxy1.support(&-d);
        let index2 = proxy2.support(&pos12.inverse_transform_vector(&d));

        iterations += 1;

        if saved.iter().any(|s| *s == (index1, index2)) {
            // Repeating a support pair means no further progress is possible.
            break;
        }

        simplex.push(make_vertex(pos12, proxy1, proxy2, index1, index2));
    }

    if iterations == MAX_ITERATIONS {
        log::debug!("GJK did not converge within {MAX_ITERATIONS} iterations");
    }

    let (point1, point2) = witness_points(&simplex);
    let mut output = DistanceOutput {
        point1,
        point2,
        distance: na::distance(&point1, &point2),
        iterations,
    };

    if use_radii {
        let r1 = proxy1.radius;
        let r2 = proxy2.radius;

        if output.distance > r1 + r2 && output.distance > DEFAULT_EPSILON {
            output.distance -= r1 + r2;
            let normal = (output.point2 - output.point1).normalize();
            output.point1 += r1 * normal;
            output.point2 -= r2 * normal;
        } else {
            let p = na::center(&output.point1, &output.point2);
            output.point1 = p;
            output.point2 = p;
            output.distance = 0.0;
        }
    }

    output
}

fn make_vertex(
    pos12: &Isometry,
    proxy1: &DistanceProxy,
    proxy2: &DistanceProxy,
    index1: usize,
    index2: usize,
) -> SimplexVertex {
    let wa = proxy1.vertices[index1];
    let wb = pos12 * proxy2.vertices[index2];
    SimplexVertex {
        wa,
        wb,
        w: wb - wa,
        a: 1.0,
        index1,
        index2,
    }
}

fn search_direction(simplex: &[SimplexVertex]) -> Vector {
    match simplex.len() {
        1 => -simplex[0].w,
        2 => {
            let e12 = simplex[1].w - simplex[0].w;
            if e12.perp(&-simplex[0].w) > 0.0 {
                // Origin is left of e12.
                Vector::new(-e12.y, e12.x)
            } else {
                Vector::new(e12.y, -e12.x)
            }
        }
        _ => unreachable!(),
    }
}

fn witness_points(simplex: &[SimplexVertex]) -> (Point, Point) {
    match simplex.len() {
        1 => (simplex[0].wa, simplex[0].wb),
        2 => {
            let (v1, v2) = (&simplex[0], &simplex[1]);
            (
                Point::from(v1.wa.coords * v1.a + v2.wa.coords * v2.a),
                Point::from(v1.wb.coords * v1.a + v2.wb.coords * v2.a),
            )
        }
        3 => {
            let (v1, v2, v3) = (&simplex[0], &simplex[1], &simplex[2]);
            let p = Point::from(
                v1.wa.coords * v1.a + v2.wa.coords * v2.a + v3.wa.coords * v3.a,
            );
            (p, p)
        }
        _ => unreachable!(),
    }
}

// Closest point of a 1-simplex (segment) to the origin, expressed with
// barycentric coordinates and Voronoi region tests.
fn solve2(simplex: &mut ArrayVec<SimplexVertex, 3>) {
    let w1 = simplex[0].w;
    let w2 = simplex[1].w;
    let e12 = w2 - w1;

    let d12_2 = -w1.dot(&e12);
    if d12_2 <= 0.0 {
        simplex[0].a = 1.0;
        simplex.truncate(1);
        return;
    }

    let d12_1 = w2.dot(&e12);
    if d12_1 <= 0.0 {
        simplex[0] = simplex[1];
        simplex[0].a = 1.0;
        simplex.truncate(1);
        return;
    }

    let inv_d12 = 1.0 / (d12_1 + d12_2);
    simplex[0].a = d12_1 * inv_d12;
    simplex[1].a = d12_2 * inv_d12;
}

// Closest point of a 2-simplex (triangle) to the origin.
fn solve3(simplex: &mut ArrayVec<SimplexVertex, 3>) {
    let w1 = simplex[0].w;
    let w2 = simplex[1].w;
    let w3 = simplex[2].w;

    let e12 = w2 - w1;
    let d12_1 = w2.dot(&e12);
    let d12_2 = -w1.dot(&e12);

    let e13 = w3 - w1;
    let d13_1 = w3.dot(&e13);
    let d13_2 = -w1.dot(&e13);

    let e23 = w3 - w2;
    let d23_1 = w3.dot(&e23);
    let d23_2 = -w2.dot(&e23);

    let n123 = e12.perp(&e13);
    let d123_1 = n123 * w2.perp(&w3);
    let d123_2 = n123 * w3.perp(&w1);
    let d123_3 = n123 * w1.perp(&w2);

    // Vertex regions.
    if d12_2 <= 0.0 && d13_2 <= 0.0 {
        simplex[0].a = 1.0;
        simplex.truncate(1);
        return;
    }

    // Edge regions.
    if d12_1 > 0.0 && d12_2 > 0.0 && d123_3 <= 0.0 {
        let inv_d12 = 1.0 / (d12_1 + d12_2);
        simplex[0].a = d12_1 * inv_d12;
        simplex[1].a = d12_2 * inv_d12;
        simplex.truncate(2);
        return;
    }

    if d13_1 > 0.0 && d13_2 > 0.0 && d123_2 <= 0.0 {
        let inv_d13 = 1.0 / (d13_1 + d13_2);
        simplex[0].a = d13_1 * inv_d13;
        simplex[1] = simplex[2];
        simplex[1].a = d13_2 * inv_d13;
        simplex.truncate(2);
        return;
    }

    if d12_1 <= 0.0 && d23_2 <= 0.0 {
        simplex[0] = simplex[1];
        simplex[0].a = 1.0;
        simplex.truncate(1);
        return;
    }

    if d13_1 <= 0.0 && d23_1 <= 0.0 {
        simplex[0] = simplex[2];
        simplex[0].a = 1.0;
        simplex.truncate(1);
        return;
    }

    if d23_1 > 0.0 && d23_2 > 0.0 && d123_1 <= 0.0 {
        let inv_d23 = 1.0 / (d23_1 + d23_2);
        simplex[0] = simplex[2];
        simplex[0].a = d23_2 * inv_d23;
        simplex[1].a = d23_1 * inv_d23;
        simplex.truncate(2);
        return;
    }

    // Interior: the hulls overlap.
    let inv_d123 = 1.0 / (d123_1 + d123_2 + d123_3);
    simplex[0].a = d123_1 * inv_d123;
    simplex[1].a = d123_2 * inv_d123;
    simplex[2].a = d123_3 * inv_d123;
}

#[cfg(test)]
mod test {
    use super::{distance, DistanceProxy};
    use crate::math::{Isometry, Point};
    use crate::shape::{Circle, Polygon, Shape};

    #[test]
    fn test_separated_circles() {
        let c1 = Shape::from(Circle::new(Point::origin(), 1.0));
        let c2 = Shape::from(Circle::new(Point::origin(), 0.5));
        let p1 = DistanceProxy::from_shape(&c1);
        let p2 = DistanceProxy::from_shape(&c2);

        let out = distance(&Isometry::translation(4.0, 0.0), &p1, &p2, true);
        assert_relative_eq!(out.distance, 2.5, epsilon = 1.0e-9);
        assert_relative_eq!(out.point1, Point::new(1.0, 0.0), epsilon = 1.0e-9);
        assert_relative_eq!(out.point2, Point::new(3.5, 0.0), epsilon = 1.0e-9);
    }

    #[test]
    fn test_overlapping_squares_report_zero() {
        let s = Shape::from(Polygon::rectangle(0.5, 0.5));
        let p = DistanceProxy::from_shape(&s);

        let out = distance(&Isometry::translation(0.9, 0.0), &p, &p, true);
        assert_eq!(out.distance, 0.0);
    }

    #[test]
    fn test_separated_squares() {
        let s = Shape::from(Polygon::rectangle(0.5, 0.5));
        let p = DistanceProxy::from_shape(&s);

        let out = distance(&Isometry::translation(3.0, 0.0), &p, &p, false);
        assert_relative_eq!(out.distance, 2.0, epsilon = 1.0e-9);
    }
}
