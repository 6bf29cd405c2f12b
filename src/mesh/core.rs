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

use ahash::{AHashMap, AHashSet};
use log::{debug, trace};
use smallvec::SmallVec;

use crate::{
    error::ConstructionError,
    geometry::{Point2, Turn, winding},
    impl_mesh,
    mesh::{basic_types::*, face::Face, half_edge::HalfEdge, vertex::Vertex},
};

impl_mesh! {
    pub fn new() -> Self {
        let mut face_index = AHashMap::new();
        face_index.insert(FaceLabel::Outer, 0);
        Self {
            vertices: Vec::new(),
            half_edges: Vec::new(),
            faces: vec![Face::new(FaceLabel::Outer)],
            vertex_index: AHashMap::new(),
            face_index,
            bounding: AHashSet::new(),
            outer: 0,
            winding: Turn::Left,
        }
    }

    /// Builds a mesh from polygons sharing one winding order.
    ///
    /// `bounding`, if given, is the fixed outer polygon in the same winding;
    /// its half-edges are inserted reversed so that they bound the outer face.
    /// Without it the exterior boundary is discovered during twin resolution
    /// and its vertices become the bounding polygon.
    pub fn from_polygons(
        labeled_polys: &[LabeledPolygon<T, R>],
        bounding: Option<&[Point2<T>]>,
    ) -> Result<Self, ConstructionError> {
        let mut mesh = Self::new();

        let mut common: Option<Turn> = None;
        for (label, poly) in labeled_polys {
            if label.is_outer() {
                return Err(ConstructionError::ReservedOuterLabel);
            }
            let w = Self::check_polygon(label, poly)?;
            match common {
                None => common = Some(w),
                Some(c) if c != w => {
                    return Err(ConstructionError::InconsistentWinding {
                        label: format!("{:?}", label),
                    });
                }
                _ => {}
            }
        }
        mesh.winding = common.unwrap_or(Turn::Left);

        if let Some(bbox) = bounding {
            let w = Self::check_polygon(&FaceLabel::Outer, bbox)?;
            if common.is_some() && w != mesh.winding {
                return Err(ConstructionError::InconsistentWinding {
                    label: "bounding polygon".to_string(),
                });
            }
            let verts: Vec<usize> = bbox
                .iter()
                .rev()
                .map(|p| mesh.add_vertex(p.clone()))
                .collect();
            mesh.bounding.extend(verts.iter().copied());
            let outer = mesh.outer;
            mesh.add_cycle(&verts, outer)?;
        }

        for (label, poly) in labeled_polys {
            let verts: Vec<usize> = poly.iter().map(|p| mesh.add_vertex(p.clone())).collect();
            let face = mesh.face_for_label(label.clone());
            mesh.add_cycle(&verts, face)?;
        }

        mesh.resolve_twins(bounding.is_some())?;
        mesh.validate()?;

        debug!(
            "mesh built: {} vertices, {} half-edges, {} faces, {} bounding vertices, winding {:?}",
            mesh.vertex_count(),
            mesh.half_edge_count(),
            mesh.face_count(),
            mesh.bounding.len(),
            mesh.winding
        );
        Ok(mesh)
    }

    fn check_polygon(label: &FaceLabel<T, R>, poly: &[Point2<T>]) -> Result<Turn, ConstructionError> {
        let name = || format!("{:?}", label);
        if poly.iter().any(|p| !p.is_finite()) {
            return Err(ConstructionError::NonFiniteCoordinate { label: name() });
        }
        let distinct: AHashSet<&Point2<T>> = poly.iter().collect();
        if distinct.len() < 3 {
            return Err(ConstructionError::TooFewVertices { label: name(), len: distinct.len() });
        }
        if distinct.len() != poly.len() {
            return Err(ConstructionError::DegeneratePolygon { label: name() });
        }
        match winding(poly) {
            Turn::Collinear => Err(ConstructionError::DegeneratePolygon { label: name() }),
            w => Ok(w),
        }
    }

    /// Returns the vertex at `position`, creating it if needed.
    pub fn add_vertex(&mut self, position: Point2<T>) -> usize {
        if let Some(&v) = self.vertex_index.get(&position) {
            return v;
        }
        let idx = self.vertices.len();
        self.vertex_index.insert(position.clone(), idx);
        self.vertices.push(Vertex::new(position));
        idx
    }

    pub(crate) fn add_half_edge(&mut self, origin: usize) -> usize {
        let idx = self.half_edges.len();
        self.half_edges.push(HalfEdge::new(origin));
        self.vertices[origin].add_edge(idx);
        idx
    }

    /// Allocates the twinned pair a->b, b->a.
    pub(crate) fn add_edge_pair(&mut self, a: usize, b: usize) -> (usize, usize) {
        let ab = self.add_half_edge(a);
        let ba = self.add_half_edge(b);
        self.link_twins(ab, ba);
        (ab, ba)
    }

    #[inline]
    pub(crate) fn link_twins(&mut self, a: usize, b: usize) {
        self.half_edges[a].twin = b;
        self.half_edges[b].twin = a;
    }

    pub(crate) fn remove_half_edge(&mut self, he: usize) {
        let origin = self.half_edges[he].origin;
        self.vertices[origin].remove_edge(he);
        self.half_edges[he].removed = true;
    }

    pub(crate) fn face_for_label(&mut self, label: FaceLabel<T, R>) -> usize {
        if let Some(&f) = self.face_index.get(&label) {
            return f;
        }
        let idx = self.faces.len();
        self.face_index.insert(label.clone(), idx);
        self.faces.push(Face::new(label));
        idx
    }

    pub(crate) fn remove_face(&mut self, f: usize) {
        self.faces[f].removed = true;
        let label = self.faces[f].label.clone();
        if self.face_index.get(&label) == Some(&f) {
            self.face_index.remove(&label);
        }
    }

    /// Chains `edges` into a next/prev cycle bound to `face`; the first edge
    /// becomes the face's representative.
    pub(crate) fn bind_cycle(&mut self, edges: &[usize], face: usize) {
        let n = edges.len();
        for i in 0..n {
            let he = &mut self.half_edges[edges[i]];
            he.next = edges[(i + 1) % n];
            he.prev = edges[(i + n - 1) % n];
            he.face = face;
        }
        let f = &mut self.faces[face];
        f.half_edge = edges[0];
        f.cycles += 1;
    }

    fn add_cycle(&mut self, verts: &[usize], face: usize) -> Result<(), ConstructionError> {
        let edges: SmallVec<[usize; 4]> = verts.iter().map(|&v| self.add_half_edge(v)).collect();
        self.bind_cycle(&edges, face);

        for (i, &e) in edges.iter().enumerate() {
            let from = verts[i];
            let to = verts[(i + 1) % verts.len()];
            let duplicate = self.vertices[from]
                .outgoing
                .iter()
                .any(|&other| other != e && self.destination(other) == to);
            if duplicate {
                return Err(ConstructionError::DuplicateHalfEdge {
                    from: self.vertices[from].position.approx(),
                    to: self.vertices[to].position.approx(),
                });
            }
        }
        Ok(())
    }

    /// Pairs every half-edge with its reverse, then closes the exterior.
    fn resolve_twins(&mut self, bounded: bool) -> Result<(), ConstructionError> {
        for e in 0..self.half_edges.len() {
            if self.half_edges[e].has_twin() {
                continue;
            }
            let origin = self.half_edges[e].origin;
            let e_next = self.half_edges[e].next;
            let dest = self.half_edges[e_next].origin;

            let found = self.vertices[dest]
                .outgoing
                .iter()
                .copied()
                .find(|&f| f != e_next && self.destination(f) == origin);
            if let Some(f) = found {
                if self.half_edges[f].has_twin() {
                    return Err(ConstructionError::NonManifoldEdge {
                        from: self.vertices[origin].position.approx(),
                        to: self.vertices[dest].position.approx(),
                    });
                }
                self.link_twins(e, f);
            }
        }

        let open: Vec<usize> = (0..self.half_edges.len())
            .filter(|&e| !self.half_edges[e].has_twin())
            .collect();
        let Some(&start) = open.first() else {
            return Ok(());
        };
        if bounded {
            return Err(ConstructionError::DisjointExterior {
                start: self.origin_position(start).approx(),
            });
        }

        self.close_exterior(start, open.len())?;

        if let Some(e) = (0..self.half_edges.len()).find(|&e| !self.half_edges[e].has_twin()) {
            return Err(ConstructionError::DisjointExterior {
                start: self.origin_position(e).approx(),
            });
        }
        Ok(())
    }

    /// Walks the exposed boundary starting at `start`, synthesizing twins
    /// bound to the outer face. `budget` is the number of open edges.
    fn close_exterior(&mut self, start: usize, budget: usize) -> Result<(), ConstructionError> {
        let start_origin = self.half_edges[start].origin;
        let first_origin = self.destination(start);
        let first = self.add_half_edge(first_origin);
        self.link_twins(start, first);

        let mut exterior = vec![first];
        let mut at = first_origin;
        while at != start_origin {
            if exterior.len() >= budget {
                return Err(ConstructionError::OpenExterior {
                    start: self.vertices[start_origin].position.approx(),
                });
            }
            let open: SmallVec<[usize; 2]> = self.vertices[at]
                .outgoing
                .iter()
                .copied()
                .filter(|&h| !self.half_edges[h].has_twin())
                .collect();
            let f = match open.as_slice() {
                [f] => *f,
                [] => {
                    return Err(ConstructionError::OpenExterior {
                        start: self.vertices[start_origin].position.approx(),
                    });
                }
                _ => {
                    return Err(ConstructionError::AmbiguousExterior {
                        vertex: self.vertices[at].position.approx(),
                        candidates: open.len(),
                    });
                }
            };
            let twin_origin = self.destination(f);
            let t = self.add_half_edge(twin_origin);
            self.link_twins(f, t);
            exterior.push(t);
            at = twin_origin;
        }

        // Walk order runs against the outer cycle.
        exterior.reverse();
        let outer = self.outer;
        self.bind_cycle(&exterior, outer);

        let ring: Vec<usize> = exterior.iter().map(|&e| self.half_edges[e].origin).collect();
        trace!("exterior closed with {} synthesized half-edges", ring.len());
        self.bounding.extend(ring);
        Ok(())
    }

    /// Copy of the mesh without removed records. Indices are renumbered;
    /// labels and coordinates are unchanged.
    pub fn compacted(&self) -> Self {
        fn remap<I: Iterator<Item = bool>>(live: I) -> (Vec<usize>, usize) {
            let mut next = 0;
            let map = live
                .map(|alive| {
                    if alive {
                        next += 1;
                        next - 1
                    } else {
                        usize::MAX
                    }
                })
                .collect();
            (map, next)
        }
        let at = |map: &[usize], i: usize| if i == usize::MAX { i } else { map[i] };

        let (vmap, _) = remap(self.vertices.iter().map(|v| !v.removed));
        let (hmap, _) = remap(self.half_edges.iter().map(|h| !h.removed));
        let (fmap, _) = remap(self.faces.iter().map(|f| !f.removed));

        let vertices: Vec<Vertex<T>> = self
            .vertices
            .iter()
            .filter(|v| !v.removed)
            .map(|v| Vertex {
                position: v.position.clone(),
                outgoing: v.outgoing.iter().map(|&h| hmap[h]).collect(),
                removed: false,
            })
            .collect();

        let half_edges: Vec<HalfEdge> = self
            .half_edges
            .iter()
            .filter(|h| !h.removed)
            .map(|h| HalfEdge {
                origin: vmap[h.origin],
                twin: at(&hmap, h.twin),
                next: at(&hmap, h.next),
                prev: at(&hmap, h.prev),
                face: at(&fmap, h.face),
                removed: false,
            })
            .collect();

        let faces: Vec<Face<T, R>> = self
            .faces
            .iter()
            .filter(|f| !f.removed)
            .map(|f| Face {
                label: f.label.clone(),
                half_edge: at(&hmap, f.half_edge),
                cycles: f.cycles,
                removed: false,
            })
            .collect();

        let vertex_index = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.position.clone(), i))
            .collect();
        let face_index = faces
            .iter()
            .enumerate()
            .map(|(i, f)| (f.label.clone(), i))
            .collect();

        Self {
            vertices,
            half_edges,
            faces,
            vertex_index,
            face_index,
            bounding: self.bounding.iter().map(|&v| vmap[v]).collect(),
            outer: fmap[self.outer],
            winding: self.winding,
        }
    }
}
