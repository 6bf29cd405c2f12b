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

//! Planar point location with Kirkpatrick's triangulation hierarchy.
//!
//! A triangulated planar subdivision is stored as a half-edge mesh
//! ([`mesh::Mesh`]). [`hierarchy::Hierarchy`] repeatedly removes an
//! independent set of low-degree interior vertices, retriangulating the
//! holes, until only the bounding polygon remains; a query then descends
//! from the coarsest layer to the base triangle containing the point.
//!
//! Coordinates are generic over [`numeric::scalar::Scalar`]: use
//! [`numeric::rational::Exact`] when predicates must be exact, or
//! [`numeric::real::Real`] for plain `f64`.

pub mod error;
pub mod geometry;
pub mod hierarchy;
pub mod mesh;
pub mod numeric;

pub use error::{ConstructionError, HierarchyError, InvariantViolation, RemovalError};
pub use geometry::{Point2, Triangle2, Turn};
pub use hierarchy::{Hierarchy, HierarchyOpts, Layer, Location, produce_hierarchy};
pub use mesh::{FaceLabel, LabeledPolygon, LinkMap, Mesh};
pub use numeric::{rational::Exact, real::Real, scalar::Scalar};
