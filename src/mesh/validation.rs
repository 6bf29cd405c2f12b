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

use crate::{error::InvariantViolation, impl_mesh};

impl_mesh! {
    /// Checks the structural invariants of the mesh. Removed records are
    /// skipped; a live record linking to a removed one is a violation.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        self.validate_vertices()?;
        self.validate_half_edges()?;
        self.validate_faces()
    }

    fn validate_vertices(&self) -> Result<(), InvariantViolation> {
        let mut seen = AHashSet::new();
        for (vi, v) in self.vertices.iter().enumerate() {
            if v.removed {
                continue;
            }
            if !seen.insert(&v.position) {
                return Err(InvariantViolation::DuplicateCoordinate { position: v.position.approx() });
            }
            if self.vertex_index.get(&v.position) != Some(&vi) {
                return Err(InvariantViolation::StaleVertexIndex {
                    vertex: vi,
                    position: v.position.approx(),
                });
            }
            for &h in &v.outgoing {
                if h >= self.half_edges.len() || self.half_edges[h].removed || self.half_edges[h].origin != vi {
                    return Err(InvariantViolation::StarMismatch { vertex: vi, edge: h });
                }
            }
        }
        for (position, &vi) in &self.vertex_index {
            if vi >= self.vertices.len() || self.vertices[vi].removed {
                return Err(InvariantViolation::StaleVertexIndex { vertex: vi, position: position.approx() });
            }
        }
        Ok(())
    }

    fn validate_half_edges(&self) -> Result<(), InvariantViolation> {
        let live = |i: usize| i < self.half_edges.len() && !self.half_edges[i].removed;
        let mut directed = AHashSet::new();

        for (i, he) in self.half_edges.iter().enumerate() {
            if he.removed {
                continue;
            }
            for target in [he.next, he.prev, he.twin] {
                if !live(target) {
                    return Err(InvariantViolation::DanglingLink { edge: i, target });
                }
            }
            if he.face >= self.faces.len() || self.faces[he.face].removed {
                return Err(InvariantViolation::DanglingLink { edge: i, target: he.face });
            }
            if self.half_edges[he.next].prev != i {
                return Err(InvariantViolation::NextPrevMismatch { edge: i });
            }
            if self.half_edges[he.prev].next != i {
                return Err(InvariantViolation::PrevNextMismatch { edge: i });
            }
            if self.half_edges[he.twin].twin != i {
                return Err(InvariantViolation::TwinMismatch { edge: i });
            }
            if self.half_edges[he.twin].origin != self.half_edges[he.next].origin {
                return Err(InvariantViolation::TwinDestination { edge: i });
            }
            if !self.vertices[he.origin].outgoing.contains(&i) {
                return Err(InvariantViolation::MissingFromStar { edge: i });
            }
            let dst = self.destination(i);
            if !directed.insert((he.origin, dst)) {
                return Err(InvariantViolation::DuplicateHalfEdge {
                    from: self.vertices[he.origin].position.approx(),
                    to: self.vertices[dst].position.approx(),
                });
            }
        }
        Ok(())
    }

    fn validate_faces(&self) -> Result<(), InvariantViolation> {
        let mut outer_count = 0;
        for (fi, face) in self.faces.iter().enumerate() {
            if face.removed {
                continue;
            }
            if face.is_outer() {
                outer_count += 1;
            }
            if self.face_index.get(&face.label) != Some(&fi) {
                return Err(InvariantViolation::StaleFaceIndex { label: format!("{:?}", face.label) });
            }
            let start = face.half_edge;
            if start >= self.half_edges.len() || self.half_edges[start].removed {
                return Err(InvariantViolation::FaceCycle { face: fi });
            }
            let mut cur = start;
            let mut steps = 0;
            loop {
                if self.half_edges[cur].face != fi {
                    return Err(InvariantViolation::FaceCycle { face: fi });
                }
                cur = self.half_edges[cur].next;
                steps += 1;
                if cur == start {
                    break;
                }
                if steps > self.half_edges.len() {
                    return Err(InvariantViolation::FaceCycle { face: fi });
                }
            }
        }
        if outer_count != 1 || self.faces[self.outer].removed || !self.faces[self.outer].is_outer() {
            return Err(InvariantViolation::OuterFaceCount { count: outer_count });
        }
        Ok(())
    }
}
