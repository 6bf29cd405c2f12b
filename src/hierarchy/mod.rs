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

//! Kirkpatrick's point-location hierarchy.
//!
//! The base layer is a triangulation whose faces are labeled by their own
//! triangles. Each layer above it removes an independent set of low-degree
//! interior vertices from a copy of the layer below and links every new
//! face to the faces it covers, until only the bounding polygon is left.

pub mod independent_set;
pub mod layer;
pub mod query;

use ahash::AHashMap;
use log::info;
use rand::{SeedableRng, rngs::StdRng};

pub use layer::Layer;
pub use query::Location;

use crate::{
    error::HierarchyError,
    geometry::{Point2, Triangle2},
    mesh::{FaceLabel, LabeledPolygon, Mesh, Region},
    numeric::scalar::Scalar,
};

#[derive(Debug, Clone)]
pub struct HierarchyOpts {
    /// Only interior vertices of at most this degree are removed.
    pub max_degree: usize,
    /// Seed of the RNG that orders independent-set selection.
    pub seed: u64,
    /// Run the mesh validator on every new layer.
    pub validate_layers: bool,
}

impl Default for HierarchyOpts {
    fn default() -> Self {
        Self {
            max_degree: 8,
            seed: 0x4b1f_2d03,
            validate_layers: cfg!(debug_assertions),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Hierarchy<T: Scalar, R: Region> {
    /// `layers[0]` is the base, the last entry is the top.
    layers: Vec<Layer<T, R>>,
    /// Region each base triangle was supplied with.
    regions: AHashMap<Triangle2<T>, R>,
}

/// Contracts `base` layer by layer until no interior vertex is left.
pub fn produce_hierarchy<T: Scalar, R: Region>(
    base: Mesh<T, R>,
    opts: &HierarchyOpts,
) -> Result<Hierarchy<T, R>, HierarchyError> {
    Hierarchy::produce(base, AHashMap::new(), opts)
}

impl<T: Scalar, R: Region> Hierarchy<T, R> {
    /// Builds the base mesh from region-tagged triangles and contracts it.
    /// `locate` reports the region a point falls in.
    pub fn from_triangles(
        triangles: &[(R, [Point2<T>; 3])],
        bounding: Option<&[Point2<T>]>,
        opts: &HierarchyOpts,
    ) -> Result<Self, HierarchyError> {
        let mut regions = AHashMap::with_capacity(triangles.len());
        let polys: Vec<LabeledPolygon<T, R>> = triangles
            .iter()
            .map(|(region, [a, b, c])| {
                let tri = Triangle2::new(a.clone(), b.clone(), c.clone());
                regions.insert(tri.clone(), region.clone());
                (FaceLabel::Triangle(tri), vec![a.clone(), b.clone(), c.clone()])
            })
            .collect();

        let base = Mesh::from_polygons(&polys, bounding)?;
        Self::produce(base, regions, opts)
    }

    fn produce(
        base: Mesh<T, R>,
        regions: AHashMap<Triangle2<T>, R>,
        opts: &HierarchyOpts,
    ) -> Result<Self, HierarchyError> {
        check_base(&base)?;
        if opts.validate_layers {
            base.validate()?;
        }

        let base_vertices = base.vertex_count();
        let mut rng = StdRng::seed_from_u64(opts.seed);
        let mut layers = vec![Layer::base(base)];
        loop {
            let index = layers.len() - 1;
            let top = &layers[index];
            if top.mesh.vertex_count() <= top.mesh.bounding_count() {
                break;
            }
            let next = top.find_prev_layer(index, opts, &mut rng)?;
            layers.push(next);
        }

        info!(
            "hierarchy built: {} layers, {} base vertices, {} top faces",
            layers.len(),
            base_vertices,
            layers[layers.len() - 1].mesh.face_count()
        );
        Ok(Self { layers, regions })
    }

    pub fn layers(&self) -> &[Layer<T, R>] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer<T, R>> {
        self.layers.get(index)
    }

    pub fn base(&self) -> &Layer<T, R> {
        &self.layers[0]
    }

    pub fn top(&self) -> &Layer<T, R> {
        &self.layers[self.layers.len() - 1]
    }

    pub fn top_index(&self) -> usize {
        self.layers.len() - 1
    }

    /// Number of layers in the chain.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Layers from `index` down to the base, both included.
    pub fn depth_of(&self, index: usize) -> Option<usize> {
        let mut count = 0;
        let mut cur = Some(index);
        while let Some(i) = cur {
            cur = self.layers.get(i)?.below;
            count += 1;
        }
        Some(count)
    }

    pub fn region_of(&self, triangle: &Triangle2<T>) -> Option<&R> {
        self.regions.get(triangle)
    }
}

/// Every bounded face of the base must be a triangle labeled by its own
/// corners.
fn check_base<T: Scalar, R: Region>(base: &Mesh<T, R>) -> Result<(), HierarchyError> {
    for f in base.live_faces() {
        let label = &base.faces[f].label;
        if label.is_outer() {
            continue;
        }
        let matches = match (label.triangle(), base.face_triangle(f)) {
            (Some(expected), Some(actual)) => *expected == actual,
            _ => false,
        };
        if !matches || base.faces[f].cycles != 1 {
            return Err(HierarchyError::UntriangulatedLabel {
                label: format!("{:?}", label),
            });
        }
    }
    Ok(())
}
