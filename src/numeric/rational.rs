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

use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{ToPrimitive, Zero};
use rug::Rational;

use crate::numeric::scalar::Scalar;

/// Exact rational coordinate. Orientation tests over `Exact` never misclassify.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exact(pub Rational);

impl Exact {
    /// Exact conversion of a finite `f64`; `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        Rational::from_f64(value).map(Exact)
    }
}

impl Scalar for Exact {
    fn from_num_den(num: i32, den: i32) -> Self {
        Exact(Rational::from((num, den)))
    }

    fn approx(&self) -> f64 {
        self.0.to_f64()
    }
}

impl<'a, 'b> Add<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn add(self, rhs: &'b Exact) -> Exact {
        let mut result = self.0.clone();
        result += &rhs.0;
        Exact(result)
    }
}

impl Add for Exact {
    type Output = Exact;
    fn add(self, rhs: Exact) -> Exact {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn sub(self, rhs: &'b Exact) -> Exact {
        let mut result = self.0.clone();
        result -= &rhs.0;
        Exact(result)
    }
}

impl Sub for Exact {
    type Output = Exact;
    fn sub(self, rhs: Exact) -> Exact {
        &self - &rhs
    }
}

impl<'a, 'b> Mul<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn mul(self, rhs: &'b Exact) -> Exact {
        let mut result = self.0.clone();
        result *= &rhs.0;
        Exact(result)
    }
}

impl Mul for Exact {
    type Output = Exact;
    fn mul(self, rhs: Exact) -> Exact {
        &self * &rhs
    }
}

impl Neg for Exact {
    type Output = Exact;

    fn neg(self) -> Exact {
        Exact(-self.0)
    }
}

impl Zero for Exact {
    fn zero() -> Self {
        Exact(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == std::cmp::Ordering::Equal
    }
}

impl From<i32> for Exact {
    fn from(value: i32) -> Self {
        Exact(Rational::from(value))
    }
}

impl From<Rational> for Exact {
    fn from(value: Rational) -> Self {
        Exact(value)
    }
}

impl ToPrimitive for Exact {
    fn to_i64(&self) -> Option<i64> {
        self.0.clone().trunc().numer().to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.0.clone().trunc().numer().to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::Exact;
    use crate::numeric::scalar::Scalar;
    use num_traits::ToPrimitive;
    use std::cmp::Ordering;

    #[test]
    fn thirds_are_exact() {
        let third = Exact::from_num_den(1, 3);
        let sum = third.clone() + third.clone() + third;
        assert_eq!(sum, Exact::from(1));
        assert_eq!(Exact::from_num_den(-7, 2).to_i64(), Some(-3));
    }

    #[test]
    fn sign_of_difference() {
        let a = Exact::from_f64(0.1).unwrap();
        let b = Exact::from_num_den(1, 10);
        // 0.1f64 is not exactly one tenth
        assert_ne!((a - b).sign(), Ordering::Equal);
        assert!(Exact::from_f64(f64::NAN).is_none());
    }
}
