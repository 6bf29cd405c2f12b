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

use crate::geometry::{Point2, Turn, contains, orient2d, turn};
use crate::numeric::scalar::Scalar;

/// Where a point sits relative to a closed triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleLocation {
    Inside,
    OnBoundary,
    Outside,
}

/// A triangle stored in canonical rotation: the lexicographically smallest
/// corner comes first, cyclic order is preserved. Two triangles with the same
/// corners in the same cyclic order are therefore equal and hash equally,
/// which lets them serve as face labels.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triangle2<T>
where
    T: Scalar,
{
    corners: [Point2<T>; 3],
}

impl<T: Scalar> Triangle2<T> {
    pub fn new(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> Self {
        let corners = if a <= b && a <= c {
            [a, b, c]
        } else if b <= a && b <= c {
            [b, c, a]
        } else {
            [c, a, b]
        };
        Self { corners }
    }

    pub fn corners(&self) -> &[Point2<T>; 3] {
        &self.corners
    }

    pub fn orientation(&self) -> Turn {
        let [a, b, c] = &self.corners;
        turn(a, b, c)
    }

    pub fn is_degenerate(&self) -> bool {
        self.orientation() == Turn::Collinear
    }

    /// Twice the signed area.
    pub fn area2(&self) -> T {
        let [a, b, c] = &self.corners;
        orient2d(a, b, c)
    }

    /// Boundary-inclusive containment, as used by query descent.
    pub fn contains(&self, p: &Point2<T>) -> bool {
        contains(p, &self.corners)
    }

    pub fn locate(&self, p: &Point2<T>) -> TriangleLocation {
        let orientation = self.orientation();
        if orientation == Turn::Collinear {
            return if self.contains(p) {
                TriangleLocation::OnBoundary
            } else {
                TriangleLocation::Outside
            };
        }

        let mut on_edge = false;
        for i in 0..3 {
            let side = turn(&self.corners[i], &self.corners[(i + 1) % 3], p);
            if side == orientation.opposite() {
                return TriangleLocation::Outside;
            }
            on_edge |= side == Turn::Collinear;
        }

        if on_edge {
            TriangleLocation::OnBoundary
        } else {
            TriangleLocation::Inside
        }
    }

    /// True iff the interiors of both triangles intersect with positive area.
    /// Triangles that only share an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &Triangle2<T>) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        !self.has_separating_edge(other) && !other.has_separating_edge(self)
    }

    fn has_separating_edge(&self, other: &Triangle2<T>) -> bool {
        let inner = self.orientation();
        (0..3).any(|i| {
            let a = &self.corners[i];
            let b = &self.corners[(i + 1) % 3];
            other.corners.iter().all(|p| turn(a, b, p) != inner)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Triangle2, TriangleLocation};
    use crate::geometry::Point2;
    use crate::numeric::real::Real;

    fn p(x: f64, y: f64) -> Point2<Real> {
        Point2::new(x, y)
    }

    #[test]
    fn canonical_rotation() {
        let t1 = Triangle2::new(p(1.0, 0.0), p(0.0, 1.0), p(0.0, 0.0));
        let t2 = Triangle2::new(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
        let reversed = Triangle2::new(p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0));
        assert_eq!(t1, t2);
        assert_ne!(t1, reversed);
        assert_eq!(t1.corners()[0], p(0.0, 0.0));
    }

    #[test]
    fn locate_point() {
        let t = Triangle2::new(p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0));
        assert_eq!(t.locate(&p(1.0, 1.0)), TriangleLocation::Inside);
        assert_eq!(t.locate(&p(5.0, 5.0)), TriangleLocation::OnBoundary);
        assert_eq!(t.locate(&p(6.0, 6.0)), TriangleLocation::Outside);
    }

    #[test]
    fn overlap_requires_area() {
        let a = Triangle2::new(p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0));
        let shares_edge = Triangle2::new(p(0.0, 0.0), p(10.0, 10.0), p(0.0, 10.0));
        let crossing = Triangle2::new(p(5.0, 5.0), p(0.0, 0.0), p(10.0, 0.0));
        assert!(!a.overlaps(&shares_edge));
        assert!(a.overlaps(&crossing));
        assert!(crossing.overlaps(&a));
    }
}
