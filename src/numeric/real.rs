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

use num_traits::{ToPrimitive, Zero};

use crate::numeric::scalar::Scalar;

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    ops::{Add, Mul, Neg, Sub},
};

/// Plain `f64` coordinate with a total order and a hash consistent with `==`.
#[derive(Clone, Copy, Debug)]
pub struct Real(pub f64);

impl Real {
    // -0.0 and 0.0 compare equal, so they must hash the same way.
    #[inline(always)]
    fn canonical_bits(&self) -> u64 {
        (self.0 + 0.0).to_bits()
    }
}

impl Scalar for Real {
    fn from_num_den(num: i32, den: i32) -> Self {
        Real(num as f64 / den as f64)
    }

    fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    fn approx(&self) -> f64 {
        self.0
    }
}

impl<'a, 'b> Add<&'b Real> for &'a Real {
    type Output = Real;

    fn add(self, rhs: &'b Real) -> Real {
        Real(self.0 + rhs.0)
    }
}

impl Add for Real {
    type Output = Real;
    fn add(self, rhs: Real) -> Real {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b Real> for &'a Real {
    type Output = Real;

    fn sub(self, rhs: &'b Real) -> Real {
        Real(self.0 - rhs.0)
    }
}

impl Sub for Real {
    type Output = Real;
    fn sub(self, rhs: Real) -> Real {
        &self - &rhs
    }
}

impl<'a, 'b> Mul<&'b Real> for &'a Real {
    type Output = Real;

    fn mul(self, rhs: &'b Real) -> Real {
        Real(self.0 * rhs.0)
    }
}

impl Mul for Real {
    type Output = Real;
    fn mul(self, rhs: Real) -> Real {
        &self * &rhs
    }
}

impl Neg for Real {
    type Output = Real;

    fn neg(self) -> Real {
        Real(-self.0)
    }
}

impl Zero for Real {
    fn zero() -> Self {
        Real(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl From<i32> for Real {
    fn from(value: i32) -> Self {
        Real(value as f64)
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Real(value)
    }
}

impl From<Real> for f64 {
    fn from(value: Real) -> Self {
        value.0
    }
}

impl ToPrimitive for Real {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Real) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for Real {}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Real) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Real) -> Ordering {
        (self.0 + 0.0).total_cmp(&(other.0 + 0.0))
    }
}

impl Hash for Real {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::Real;
    use crate::numeric::scalar::Scalar;
    use std::cmp::Ordering;
    use std::collections::HashSet;

    #[test]
    fn signed_zero_is_one_value() {
        let mut set = HashSet::new();
        set.insert(Real(0.0));
        set.insert(Real(-0.0));
        assert_eq!(set.len(), 1);
        assert_eq!(Real(-0.0).sign(), Ordering::Equal);
    }

    #[test]
    fn non_finite_is_reported() {
        assert!(!Real(f64::NAN).is_finite());
        assert!(!Real(f64::INFINITY).is_finite());
        assert!(Real(3.5).is_finite());
    }
}
