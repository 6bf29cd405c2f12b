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

use crate::{
    geometry::{Point2, Triangle2},
    hierarchy::Hierarchy,
    mesh::{FaceLabel, Region},
    numeric::scalar::Scalar,
};

/// Result of [`Hierarchy::locate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a, T: Scalar, R> {
    /// Base triangle containing the point.
    pub triangle: &'a Triangle2<T>,
    /// Region the triangle was supplied with, if known.
    pub region: Option<&'a R>,
}

impl<T: Scalar, R: Region> Hierarchy<T, R> {
    /// Base triangle containing `p`, boundary included. When `p` lies on an
    /// edge or vertex shared by several triangles, any one of them may be
    /// returned.
    pub fn query(&self, p: &Point2<T>) -> Option<&Triangle2<T>> {
        let mut index = self.top_index();
        let mut candidates: Vec<&FaceLabel<T, R>> = self.top().mesh.face_labels().collect();

        loop {
            let layer = &self.layers()[index];
            let hit = candidates.iter().copied().find(|label| {
                label
                    .triangle()
                    .is_some_and(|t| !t.is_degenerate() && t.contains(p))
            })?;

            match layer.below {
                None => return hit.triangle(),
                Some(below) => {
                    candidates = layer.links.get(hit)?.iter().collect();
                    index = below;
                }
            }
        }
    }

    pub fn locate(&self, p: &Point2<T>) -> Option<Location<'_, T, R>> {
        let triangle = self.query(p)?;
        Some(Location {
            triangle,
            region: self.region_of(triangle),
        })
    }
}
