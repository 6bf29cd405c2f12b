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

use std::{
    cmp::Ordering,
    fmt::Debug,
    hash::Hash,
    ops::{Add, Mul, Neg, Sub},
};

/// Coordinate type of the planar mesh.
///
/// Equality and hashing must agree exactly: vertices are identified by their
/// coordinates, so two values that compare equal have to hash equally.
pub trait Scalar:
    Clone
    + Debug
    + Eq
    + Ord
    + Hash
    + Zero
    + ToPrimitive
    + From<i32>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    fn from_num_den(num: i32, den: i32) -> Self;

    /// `Less`, `Equal` or `Greater` relative to zero.
    fn sign(&self) -> Ordering {
        self.cmp(&Self::zero())
    }

    fn is_finite(&self) -> bool {
        true
    }

    fn approx(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}
