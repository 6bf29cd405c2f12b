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

use crate::{mesh::basic_types::{FaceLabel, Region}, numeric::scalar::Scalar};

#[derive(Clone, Debug)]
pub struct Face<T: Scalar, R: Region> {
    pub label: FaceLabel<T, R>,
    /// Representative boundary half-edge.
    pub half_edge: usize,
    /// Number of boundary cycles bound under this label.
    pub cycles: usize,
    pub removed: bool,
}

impl<T: Scalar, R: Region> Face<T, R> {
    pub fn new(label: FaceLabel<T, R>) -> Self {
        Self {
            label,
            half_edge: usize::MAX,
            cycles: 0,
            removed: false,
        }
    }

    pub fn is_outer(&self) -> bool {
        self.label.is_outer()
    }
}
