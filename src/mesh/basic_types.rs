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

use std::{fmt::Debug, hash::Hash};

use ahash::{AHashMap, AHashSet};
use smallvec::SmallVec;

use crate::{
    geometry::{Point2, Triangle2, Turn},
    mesh::{face::Face, half_edge::HalfEdge, vertex::Vertex},
    numeric::scalar::Scalar,
};

/// Application-supplied region identifier.
pub trait Region: Clone + Debug + Eq + Hash {}

impl<R: Clone + Debug + Eq + Hash> Region for R {}

/// Identity of a face. The label, not the face's index or representative
/// edge, is what links layers together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FaceLabel<T: Scalar, R> {
    /// The unbounded complement of the bounding polygon.
    Outer,
    /// An application region, possibly spanning several input triangles.
    Region(R),
    /// A face identified by its own corners; produced by retriangulation.
    Triangle(Triangle2<T>),
}

impl<T: Scalar, R> FaceLabel<T, R> {
    pub fn is_outer(&self) -> bool {
        matches!(self, FaceLabel::Outer)
    }

    pub fn triangle(&self) -> Option<&Triangle2<T>> {
        match self {
            FaceLabel::Triangle(t) => Some(t),
            _ => None,
        }
    }

    pub fn region(&self) -> Option<&R> {
        match self {
            FaceLabel::Region(r) => Some(r),
            _ => None,
        }
    }
}

impl<T: Scalar, R> From<Triangle2<T>> for FaceLabel<T, R> {
    fn from(value: Triangle2<T>) -> Self {
        FaceLabel::Triangle(value)
    }
}

/// New face label -> labels of the faces it replaced.
pub type LinkMap<T, R> = AHashMap<FaceLabel<T, R>, Vec<FaceLabel<T, R>>>;

/// A face label together with its boundary coordinates, in cycle order.
pub type LabeledPolygon<T, R> = (FaceLabel<T, R>, Vec<Point2<T>>);

/// Cyclic one-ring around an interior vertex, in the mesh's winding order.
/// `faces[i]` is the face on the forward side of `halfedges[i]`, i.e. the
/// triangle (center, neighbors[i], neighbors[i + 1]).
#[derive(Debug, Clone)]
pub struct VertexRing {
    pub center: usize,
    pub halfedges: SmallVec<[usize; 8]>,
    pub neighbors: SmallVec<[usize; 8]>,
    pub faces: SmallVec<[usize; 8]>,
}

#[derive(Debug, Clone)]
pub struct Mesh<T: Scalar, R: Region> {
    pub vertices: Vec<Vertex<T>>,
    pub half_edges: Vec<HalfEdge>,
    pub faces: Vec<Face<T, R>>,

    pub(crate) vertex_index: AHashMap<Point2<T>, usize>,
    pub(crate) face_index: AHashMap<FaceLabel<T, R>, usize>,
    pub(crate) bounding: AHashSet<usize>,
    pub(crate) outer: usize,
    pub(crate) winding: Turn,
}
