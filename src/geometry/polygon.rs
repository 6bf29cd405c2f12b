// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use num_traits::Zero;

use crate::geometry::{Point2, Turn, turn};
use crate::numeric::scalar::Scalar;

/// Point-in-convex-polygon test; points on the boundary count as inside.
///
/// The first edge that is not collinear with `point` fixes the reference
/// side, every later edge must agree with it. If `point` is collinear with
/// every edge the polygon has no area and the point is inside iff it lies
/// within the polygon's bounding box.
pub fn contains<T: Scalar>(point: &Point2<T>, polygon: &[Point2<T>]) -> bool {
    let n = polygon.len();
    if n == 0 {
        return false;
    }

    let mut reference: Option<Turn> = None;
    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        match (turn(a, b, point), reference) {
            (Turn::Collinear, _) => continue,
            (side, None) => reference = Some(side),
            (side, Some(r)) if side != r => return false,
            _ => {}
        }
    }

    if reference.is_some() {
        return true;
    }
    within_bounds(point, polygon)
}

fn within_bounds<T: Scalar>(point: &Point2<T>, polygon: &[Point2<T>]) -> bool {
    let min_x = polygon.iter().map(|p| &p.x).min();
    let max_x = polygon.iter().map(|p| &p.x).max();
    let min_y = polygon.iter().map(|p| &p.y).min();
    let max_y = polygon.iter().map(|p| &p.y).max();
    match (min_x, max_x, min_y, max_y) {
        (Some(x0), Some(x1), Some(y0), Some(y1)) => {
            &point.x >= x0 && &point.x <= x1 && &point.y >= y0 && &point.y <= y1
        }
        _ => false,
    }
}

/// Twice the signed area (shoelace); positive for counter-clockwise order.
pub fn signed_area2<T: Scalar>(polygon: &[Point2<T>]) -> T {
    let n = polygon.len();
    let mut acc = T::zero();
    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        acc = acc + (a.x.clone() * b.y.clone() - b.x.clone() * a.y.clone());
    }
    acc
}

/// Winding of a polygon from the sign of its area.
pub fn winding<T: Scalar>(polygon: &[Point2<T>]) -> Turn {
    Turn::from_sign(signed_area2(polygon).sign())
}

#[cfg(test)]
mod tests {
    use super::{contains, signed_area2, winding};
    use crate::geometry::{Point2, Turn};
    use crate::numeric::real::Real;

    fn square() -> Vec<Point2<Real>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn inside_outside_and_boundary() {
        let sq = square();
        assert!(contains(&Point2::new(5.0, 5.0), &sq));
        assert!(contains(&Point2::new(10.0, 5.0), &sq));
        assert!(contains(&Point2::new(0.0, 0.0), &sq));
        assert!(!contains(&Point2::new(11.0, 5.0), &sq));
        assert!(!contains(&Point2::new(-0.5, -0.5), &sq));
    }

    #[test]
    fn leading_collinear_edges_are_skipped() {
        let sq = square();
        // Collinear with the first edge but outside the polygon.
        assert!(!contains(&Point2::new(20.0, 0.0), &sq));
        // Collinear with the first edge, on it.
        assert!(contains(&Point2::new(3.0, 0.0), &sq));
    }

    #[test]
    fn clockwise_polygons_work_too() {
        let mut sq = square();
        sq.reverse();
        assert!(contains(&Point2::new(2.0, 7.0), &sq));
        assert!(!contains(&Point2::new(2.0, 17.0), &sq));
        assert_eq!(winding(&sq), Turn::Right);
    }

    #[test]
    fn degenerate_polygon_uses_bounds() {
        let seg = vec![
            Point2::<Real>::new(0.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(2.0, 2.0),
        ];
        assert!(contains(&Point2::new(1.0, 1.0), &seg));
        assert!(!contains(&Point2::new(5.0, 5.0), &seg));
        assert_eq!(signed_area2(&seg), Real(0.0));
    }
}
