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

use std::cmp::Ordering;

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

/// Direction taken when walking a -> b -> c.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Counter-clockwise in a y-up frame.
    Left,
    /// Clockwise in a y-up frame.
    Right,
    Collinear,
}

impl Turn {
    pub fn opposite(self) -> Turn {
        match self {
            Turn::Left => Turn::Right,
            Turn::Right => Turn::Left,
            Turn::Collinear => Turn::Collinear,
        }
    }

    pub fn from_sign(sign: Ordering) -> Turn {
        match sign {
            Ordering::Greater => Turn::Left,
            Ordering::Less => Turn::Right,
            Ordering::Equal => Turn::Collinear,
        }
    }
}

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    let abx = b.x.clone() - a.x.clone();
    let aby = b.y.clone() - a.y.clone();
    let acx = c.x.clone() - a.x.clone();
    let acy = c.y.clone() - a.y.clone();
    abx * acy - aby * acx
}

pub fn turn<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Turn {
    Turn::from_sign(orient2d(a, b, c).sign())
}

#[cfg(test)]
mod tests {
    use super::{Turn, orient2d, turn};
    use crate::geometry::Point2;
    use crate::numeric::real::Real;

    #[test]
    fn ccw_test() {
        let a = Point2::<Real>::new(0.0, 0.0);
        let b = Point2::<Real>::new(1.0, 0.0);
        let c = Point2::<Real>::new(0.0, 1.0);

        assert!(orient2d(&a, &b, &c).0 > 0.0);
        assert_eq!(turn(&a, &b, &c), Turn::Left);
        assert_eq!(turn(&a, &c, &b), Turn::Right);
    }

    #[test]
    fn collinear_points() {
        let a = Point2::<Real>::new(0.0, 0.0);
        let b = Point2::<Real>::new(2.0, 2.0);
        let c = Point2::<Real>::new(5.0, 5.0);
        assert_eq!(turn(&a, &b, &c), Turn::Collinear);
        assert_eq!(Turn::Collinear.opposite(), Turn::Collinear);
    }
}
