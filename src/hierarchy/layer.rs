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

use log::debug;
use rand::Rng;

use crate::{
    error::HierarchyError,
    hierarchy::HierarchyOpts,
    mesh::{FaceLabel, LabeledPolygon, LinkMap, Mesh, Region},
    numeric::scalar::Scalar,
};

/// One level of the hierarchy: a mesh snapshot and, for each of its faces,
/// the faces of the layer below that it covers.
#[derive(Debug, Clone)]
pub struct Layer<T: Scalar, R: Region> {
    pub mesh: Mesh<T, R>,
    pub links: LinkMap<T, R>,
    /// Index of the layer below, `None` for the base.
    pub below: Option<usize>,
}

impl<T: Scalar, R: Region> Layer<T, R> {
    pub fn base(mesh: Mesh<T, R>) -> Self {
        Self {
            mesh,
            links: LinkMap::default(),
            below: None,
        }
    }

    pub fn is_base(&self) -> bool {
        self.below.is_none()
    }

    pub fn labeled_polys(&self) -> Vec<LabeledPolygon<T, R>> {
        self.mesh.labeled_polys()
    }

    /// Builds the next coarser layer on top of `self`, which sits at
    /// `index` in the chain.
    ///
    /// The mesh is copied, an independent set of low-degree interior
    /// vertices is removed from the copy, and every face of the result is
    /// linked to the faces of `self` it overlaps.
    pub fn find_prev_layer<G: Rng + ?Sized>(
        &self,
        index: usize,
        opts: &HierarchyOpts,
        rng: &mut G,
    ) -> Result<Layer<T, R>, HierarchyError> {
        let level = index + 1;
        let mut mesh = self.mesh.compacted();

        let chosen = mesh.independent_set(opts.max_degree, rng);
        if chosen.is_empty() {
            return Err(HierarchyError::Stalled {
                layer: level,
                remaining: mesh.interior_vertices().count(),
            });
        }

        let mut links = LinkMap::default();
        for &v in &chosen {
            links.extend(mesh.remove_interior_vertex(v)?);
        }

        let mut untouched = 0;
        for label in mesh.face_labels() {
            if !links.contains_key(label) {
                links.insert(label.clone(), vec![label.clone()]);
                untouched += 1;
            }
        }

        self.check_links(level, &mesh, &links)?;
        if opts.validate_layers {
            mesh.validate()?;
        }

        debug!(
            "layer {}: removed {} of {} vertices, {} faces ({} carried over)",
            level,
            chosen.len(),
            self.mesh.vertex_count(),
            mesh.face_count(),
            untouched
        );

        Ok(Layer {
            mesh,
            links,
            below: Some(index),
        })
    }

    /// Link keys must be exactly the faces of `mesh`, and every linked
    /// label must be a face of `self`.
    fn check_links(
        &self,
        level: usize,
        mesh: &Mesh<T, R>,
        links: &LinkMap<T, R>,
    ) -> Result<(), HierarchyError> {
        let name = |label: &FaceLabel<T, R>| format!("{:?}", label);

        if let Some(label) = mesh.face_labels().find(|l| !links.contains_key(*l)) {
            return Err(HierarchyError::MissingLink {
                layer: level,
                label: name(label),
            });
        }
        if links.len() != mesh.face_count() {
            return Err(HierarchyError::LinkCoverage {
                layer: level,
                links: links.len(),
                faces: mesh.face_count(),
            });
        }
        for covered in links.values() {
            if let Some(label) = covered.iter().find(|l| self.mesh.face_by_label(l).is_none()) {
                return Err(HierarchyError::DanglingLink {
                    layer: level,
                    label: name(label),
                });
            }
        }
        Ok(())
    }
}
