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

use crate::{
    error::RemovalError,
    geometry::{Point2, Triangle2, Turn},
    impl_mesh,
    mesh::basic_types::{FaceLabel, LabeledPolygon, VertexRing},
};

impl_mesh! {
    #[inline]
    pub fn origin(&self, he: usize) -> usize {
        self.half_edges[he].origin
    }

    #[inline]
    pub fn destination(&self, he: usize) -> usize {
        self.half_edges[self.half_edges[he].next].origin
    }

    #[inline]
    pub fn origin_position(&self, he: usize) -> &Point2<T> {
        &self.vertices[self.half_edges[he].origin].position
    }

    pub fn position(&self, v: usize) -> &Point2<T> {
        &self.vertices[v].position
    }

    /// Winding shared by every bounded face.
    pub fn winding(&self) -> Turn {
        self.winding
    }

    pub fn outer_face(&self) -> usize {
        self.outer
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.iter().filter(|v| !v.removed).count()
    }

    pub fn half_edge_count(&self) -> usize {
        self.half_edges.iter().filter(|h| !h.removed).count()
    }

    /// Live faces, the outer face included.
    pub fn face_count(&self) -> usize {
        self.faces.iter().filter(|f| !f.removed).count()
    }

    pub fn bounding_count(&self) -> usize {
        self.bounding.len()
    }

    pub fn vertex_at(&self, position: &Point2<T>) -> Option<usize> {
        self.vertex_index.get(position).copied()
    }

    pub fn face_by_label(&self, label: &FaceLabel<T, R>) -> Option<usize> {
        self.face_index.get(label).copied()
    }

    pub fn is_bounding_vertex(&self, v: usize) -> bool {
        self.bounding.contains(&v)
    }

    pub fn bounding_vertices(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.bounding.iter().copied().collect();
        out.sort_unstable();
        out
    }

    pub fn live_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertices.len()).filter(move |&v| !self.vertices[v].removed)
    }

    pub fn interior_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.live_vertices().filter(move |v| !self.bounding.contains(v))
    }

    pub fn live_faces(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.faces.len()).filter(move |&f| !self.faces[f].removed)
    }

    pub fn face_labels(&self) -> impl Iterator<Item = &FaceLabel<T, R>> + '_ {
        self.live_faces().map(move |f| &self.faces[f].label)
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.vertices[v].degree()
    }

    pub fn neighbors(&self, v: usize) -> SmallVec<[usize; 8]> {
        self.vertices[v]
            .outgoing
            .iter()
            .map(|&h| self.destination(h))
            .collect()
    }

    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.vertices[a]
            .outgoing
            .iter()
            .any(|&h| self.destination(h) == b)
    }

    /// Half-edges of the representative cycle of `f`, `None` if the cycle
    /// does not close within the number of live half-edges.
    pub fn face_half_edges(&self, f: usize) -> Option<Vec<usize>> {
        let start = self.faces[f].half_edge;
        if start == usize::MAX {
            return None;
        }
        let mut result = Vec::new();
        let mut cur = start;
        loop {
            result.push(cur);
            if result.len() > self.half_edges.len() {
                return None;
            }
            cur = self.half_edges[cur].next;
            if cur == usize::MAX {
                return None;
            }
            if cur == start {
                break;
            }
        }
        Some(result)
    }

    pub fn face_vertices(&self, f: usize) -> Vec<usize> {
        self.face_half_edges(f)
            .unwrap_or_default()
            .into_iter()
            .map(|h| self.half_edges[h].origin)
            .collect()
    }

    pub fn face_polygon(&self, f: usize) -> Vec<Point2<T>> {
        self.face_vertices(f)
            .into_iter()
            .map(|v| self.vertices[v].position.clone())
            .collect()
    }

    /// Geometry of a triangular face, `None` for any other cycle length.
    pub fn face_triangle(&self, f: usize) -> Option<Triangle2<T>> {
        match self.face_polygon(f).as_slice() {
            [a, b, c] => Some(Triangle2::new(a.clone(), b.clone(), c.clone())),
            _ => None,
        }
    }

    /// Every live face with its boundary coordinates, walked from the
    /// representative half-edge.
    pub fn labeled_polys(&self) -> Vec<LabeledPolygon<T, R>> {
        self.live_faces()
            .map(|f| (self.faces[f].label.clone(), self.face_polygon(f)))
            .collect()
    }

    /// Next outgoing half-edge around the origin of `he`, following the
    /// mesh's winding.
    #[inline]
    pub fn rotate_around_origin(&self, he: usize) -> usize {
        self.half_edges[self.half_edges[he].prev].twin
    }

    /// Cyclic neighbor sequence of an interior vertex. Every incident face
    /// must be a bounded triangle.
    pub fn vertex_ring(&self, v: usize) -> Result<VertexRing, RemovalError> {
        let position = || self.vertices[v].position.approx();
        let Some(&start) = self.vertices[v].outgoing.first() else {
            return Err(RemovalError::OpenStar { position: position(), steps: 0 });
        };

        let degree = self.vertices[v].degree();
        let mut ring = VertexRing {
            center: v,
            halfedges: SmallVec::new(),
            neighbors: SmallVec::new(),
            faces: SmallVec::new(),
        };

        let mut cur = start;
        loop {
            let he = &self.half_edges[cur];
            let face = he.face;
            if face == self.outer {
                return Err(RemovalError::NotInterior { position: position() });
            }
            let third = self.half_edges[he.next].next;
            if self.half_edges[third].next != cur {
                return Err(RemovalError::NonTriangularStar { position: position(), face });
            }

            ring.halfedges.push(cur);
            ring.neighbors.push(self.destination(cur));
            ring.faces.push(face);

            cur = self.rotate_around_origin(cur);
            if cur == start {
                break;
            }
            if ring.halfedges.len() >= degree {
                return Err(RemovalError::OpenStar {
                    position: position(),
                    steps: ring.halfedges.len(),
                });
            }
        }
        Ok(ring)
    }
}
