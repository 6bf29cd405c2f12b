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

use smallvec::SmallVec;

use crate::{geometry::Point2, numeric::scalar::Scalar};

#[derive(Clone, Debug)]
pub struct Vertex<T: Scalar> {
    pub position: Point2<T>,
    /// Outgoing half-edges (the star). Back-references only; the mesh owns the edges.
    pub outgoing: SmallVec<[usize; 8]>,
    pub removed: bool,
}

impl<T: Scalar> Vertex<T> {
    pub fn new(position: Point2<T>) -> Self {
        Self {
            position,
            outgoing: SmallVec::new(),
            removed: false,
        }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.outgoing.len()
    }

    pub fn add_edge(&mut self, he: usize) -> bool {
        if self.outgoing.contains(&he) {
            return false;
        }
        self.outgoing.push(he);
        true
    }

    pub fn remove_edge(&mut self, he: usize) -> bool {
        match self.outgoing.iter().position(|&h| h == he) {
            Some(i) => {
                self.outgoing.swap_remove(i);
                true
            }
            None => false,
        }
    }
}
