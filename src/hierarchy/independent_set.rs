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

use ahash::AHashSet;
use rand::{Rng, seq::SliceRandom};

use crate::impl_mesh;

impl_mesh! {
    /// Pairwise non-adjacent interior vertices of degree at most
    /// `max_degree`, maximal among the eligible ones. Visiting order is
    /// drawn from `rng`.
    pub fn independent_set<G: Rng + ?Sized>(&self, max_degree: usize, rng: &mut G) -> Vec<usize> {
        let mut eligible: Vec<usize> = self
            .interior_vertices()
            .filter(|&v| self.degree(v) <= max_degree)
            .collect();
        eligible.shuffle(rng);

        let mut blocked = AHashSet::with_capacity(eligible.len() * 4);
        let mut chosen = Vec::new();
        for v in eligible {
            if !blocked.insert(v) {
                continue;
            }
            chosen.push(v);
            blocked.extend(self.neighbors(v));
        }
        chosen
    }
}
