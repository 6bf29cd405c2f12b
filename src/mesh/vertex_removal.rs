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

use log::{trace, warn};
use smallvec::SmallVec;

use crate::{
    error::RemovalError,
    geometry::{Triangle2, TriangleLocation, Turn, turn},
    impl_mesh,
    mesh::basic_types::{FaceLabel, LinkMap},
};

/// How permissive the ear test is. Tiers are relaxed in order whenever a
/// full pass over the remaining neighbors finds nothing to cut, and reset
/// after every cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EarTier {
    /// Strictly convex corner, removed vertex strictly outside the ear.
    Clear,
    /// Strictly convex corner, removed vertex may lie on the new diagonal.
    Touching,
    /// Collinear corners count as convex and the removed vertex may lie
    /// anywhere on the ear's boundary.
    Collinear,
}

impl EarTier {
    fn relaxed(self) -> Option<EarTier> {
        match self {
            EarTier::Clear => Some(EarTier::Touching),
            EarTier::Touching => Some(EarTier::Collinear),
            EarTier::Collinear => None,
        }
    }
}

impl_mesh! {
    /// Deletes the interior vertex `v` and retriangulates its star by ear
    /// cutting.
    ///
    /// Returns, for every new face, the labels of the faces of the old star
    /// that it overlaps with positive area. A vertex of degree `d` is
    /// replaced by `d - 2` triangles.
    pub fn remove_interior_vertex(&mut self, v: usize) -> Result<LinkMap<T, R>, RemovalError> {
        if v >= self.vertices.len() || self.vertices[v].removed {
            return Err(RemovalError::UnknownVertex { vertex: v });
        }
        let center = self.vertices[v].position.clone();
        if self.bounding.contains(&v) {
            return Err(RemovalError::BoundingVertex { position: center.approx() });
        }

        let ring = self.vertex_ring(v)?;
        for &f in &ring.faces {
            if self.faces[f].cycles != 1 {
                return Err(RemovalError::SharedFace { label: format!("{:?}", self.faces[f].label) });
            }
        }

        let d = ring.neighbors.len();
        let star: SmallVec<[(FaceLabel<T, R>, Triangle2<T>); 8]> = (0..d)
            .map(|i| {
                let a = self.vertices[ring.neighbors[i]].position.clone();
                let b = self.vertices[ring.neighbors[(i + 1) % d]].position.clone();
                (self.faces[ring.faces[i]].label.clone(), Triangle2::new(center.clone(), a, b))
            })
            .collect();

        let mut neighbors = ring.neighbors.clone();
        let mut spokes = ring.halfedges.clone();
        let mut links = LinkMap::default();

        let mut i = 0;
        let mut misses = 0;
        let mut tier = EarTier::Clear;
        while neighbors.len() > 3 {
            let n = neighbors.len();
            let (p, c, q) = (neighbors[(i + n - 1) % n], neighbors[i], neighbors[(i + 1) % n]);

            if self.is_ear(v, p, c, q, tier) {
                let label = self.cut_ear(v, &mut neighbors, &mut spokes, i)?;
                let covered = covered_faces(&star, &label);
                links.insert(label, covered);
                misses = 0;
                tier = EarTier::Clear;
                if i >= neighbors.len() {
                    i = 0;
                }
                continue;
            }

            misses += 1;
            i = (i + 1) % n;
            if misses >= n {
                tier = tier.relaxed().ok_or(RemovalError::NoEar {
                    position: center.approx(),
                    remaining: n,
                })?;
                misses = 0;
            }
        }

        let label = self.close_star(&neighbors, &spokes)?;
        let covered = covered_faces(&star, &label);
        links.insert(label, covered);

        debug_assert!(self.vertices[v].outgoing.is_empty());
        self.vertices[v].removed = true;
        self.vertex_index.remove(&center);

        trace!("removed {:?} (degree {}), {} new faces", center, d, links.len());
        Ok(links)
    }

    fn is_ear(&self, v: usize, p: usize, c: usize, q: usize, tier: EarTier) -> bool {
        let (pp, pc, pq) = (&self.vertices[p].position, &self.vertices[c].position, &self.vertices[q].position);
        let corner = turn(pp, pc, pq);
        let convex = corner == self.winding || (tier == EarTier::Collinear && corner == Turn::Collinear);
        if !convex {
            return false;
        }

        let center = &self.vertices[v].position;
        let ear = Triangle2::new(pp.clone(), pc.clone(), pq.clone());
        match (ear.locate(center), tier) {
            (TriangleLocation::Inside, _) => false,
            (TriangleLocation::Outside, _) => true,
            (TriangleLocation::OnBoundary, EarTier::Clear) => false,
            // Only the new diagonal may pass through the removed vertex.
            (TriangleLocation::OnBoundary, EarTier::Touching) => turn(pp, pq, center) == Turn::Collinear,
            (TriangleLocation::OnBoundary, EarTier::Collinear) => true,
        }
    }

    /// Cuts the ear at `neighbors[i]`: the spoke to it and the two faces
    /// beside that spoke are replaced by the ear (prev, cand, next) and the
    /// remaining star triangle (v, prev, next). Returns the ear's label.
    fn cut_ear(
        &mut self,
        v: usize,
        neighbors: &mut SmallVec<[usize; 8]>,
        spokes: &mut SmallVec<[usize; 8]>,
        i: usize,
    ) -> Result<FaceLabel<T, R>, RemovalError> {
        let n = neighbors.len();
        let (ip, inx) = ((i + n - 1) % n, (i + 1) % n);
        let (p, c, q) = (neighbors[ip], neighbors[i], neighbors[inx]);

        let s_vp = spokes[ip];
        let s_vc = spokes[i];
        let s_cv = self.half_edges[s_vc].twin;
        let e_pc = self.half_edges[s_vp].next;
        let e_cq = self.half_edges[s_vc].next;
        let e_qv = self.half_edges[s_vc].prev;
        let face_a = self.half_edges[s_vp].face;
        let face_b = self.half_edges[s_vc].face;

        let pos = |x: usize| self.vertices[x].position.clone();
        let ear: FaceLabel<T, R> = Triangle2::new(pos(p), pos(c), pos(q)).into();
        let rest: FaceLabel<T, R> = Triangle2::new(pos(v), pos(p), pos(q)).into();
        self.ensure_label_free(&ear)?;
        self.ensure_label_free(&rest)?;

        if turn(&self.vertices[p].position, &self.vertices[c].position, &self.vertices[q].position)
            == Turn::Collinear
        {
            warn!(
                "cutting collinear ear {:?} -> {:?} -> {:?} around {:?}",
                self.vertices[p].position, self.vertices[c].position,
                self.vertices[q].position, self.vertices[v].position
            );
        }

        self.remove_half_edge(s_vc);
        self.remove_half_edge(s_cv);
        self.remove_face(face_a);
        self.remove_face(face_b);

        let (d_pq, d_qp) = self.add_edge_pair(p, q);
        let f_ear = self.face_for_label(ear.clone());
        self.bind_cycle(&[e_pc, e_cq, d_qp], f_ear);
        let f_rest = self.face_for_label(rest);
        self.bind_cycle(&[s_vp, d_pq, e_qv], f_rest);

        neighbors.remove(i);
        spokes.remove(i);

        trace!("ear cut at {:?}, {} neighbors left", self.vertices[c].position, neighbors.len());
        Ok(ear)
    }

    /// Replaces the last three star triangles by the triangle on the three
    /// remaining neighbors.
    fn close_star(&mut self, neighbors: &[usize], spokes: &[usize]) -> Result<FaceLabel<T, R>, RemovalError> {
        let pos = |x: usize| self.vertices[x].position.clone();
        let label: FaceLabel<T, R> =
            Triangle2::new(pos(neighbors[0]), pos(neighbors[1]), pos(neighbors[2])).into();
        self.ensure_label_free(&label)?;

        let boundary: [usize; 3] = [
            self.half_edges[spokes[0]].next,
            self.half_edges[spokes[1]].next,
            self.half_edges[spokes[2]].next,
        ];
        for &s in spokes {
            let t = self.half_edges[s].twin;
            let f = self.half_edges[s].face;
            self.remove_half_edge(s);
            self.remove_half_edge(t);
            self.remove_face(f);
        }

        let f = self.face_for_label(label.clone());
        self.bind_cycle(&boundary, f);
        Ok(label)
    }

    fn ensure_label_free(&self, label: &FaceLabel<T, R>) -> Result<(), RemovalError> {
        if self.face_index.contains_key(label) {
            return Err(RemovalError::LabelCollision { label: format!("{:?}", label) });
        }
        Ok(())
    }
}

/// Labels of the old star faces that `label`'s triangle overlaps.
fn covered_faces<T, R>(
    star: &[(FaceLabel<T, R>, Triangle2<T>)],
    label: &FaceLabel<T, R>,
) -> Vec<FaceLabel<T, R>>
where
    T: crate::numeric::scalar::Scalar,
    R: Clone,
{
    let Some(t) = label.triangle() else {
        return Vec::new();
    };
    star.iter()
        .filter(|(_, old)| old.overlaps(t))
        .map(|(l, _)| l.clone())
        .collect()
}
