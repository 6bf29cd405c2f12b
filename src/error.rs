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

//! Error types for mesh construction, vertex removal and hierarchy building.
//!
//! Coordinates are reported as lossy `(f64, f64)` pairs and labels as their
//! `Debug` rendering so the error types stay independent of the scalar and
//! label parameters.

use thiserror::Error;

/// A structural invariant of the half-edge mesh does not hold.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvariantViolation {
    #[error("two live vertices share the coordinate {position:?}")]
    DuplicateCoordinate { position: (f64, f64) },
    #[error("vertex table entry for {position:?} points at vertex {vertex}, which is removed or elsewhere")]
    StaleVertexIndex { vertex: usize, position: (f64, f64) },
    #[error("half-edge {edge}: next -> prev does not return to it")]
    NextPrevMismatch { edge: usize },
    #[error("half-edge {edge}: prev -> next does not return to it")]
    PrevNextMismatch { edge: usize },
    #[error("half-edge {edge}: twin -> twin does not return to it")]
    TwinMismatch { edge: usize },
    #[error("half-edge {edge}: twin does not start where next starts")]
    TwinDestination { edge: usize },
    #[error("half-edge {edge} links to removed record {target}")]
    DanglingLink { edge: usize, target: usize },
    #[error("duplicate directed edge {from:?} -> {to:?}")]
    DuplicateHalfEdge { from: (f64, f64), to: (f64, f64) },
    #[error("face {face}: boundary cycle does not close or visits an edge of another face")]
    FaceCycle { face: usize },
    #[error("vertex {vertex}: star entry {edge} is not a live outgoing half-edge")]
    StarMismatch { vertex: usize, edge: usize },
    #[error("half-edge {edge} is missing from the star of its origin")]
    MissingFromStar { edge: usize },
    #[error("expected exactly one outer face, found {count}")]
    OuterFaceCount { count: usize },
    #[error("face table entry for {label} is stale")]
    StaleFaceIndex { label: String },
}

/// The input could not be turned into a half-edge mesh.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConstructionError {
    #[error("polygon {label} has {len} distinct vertices, at least 3 are required")]
    TooFewVertices { label: String, len: usize },
    #[error("polygon {label} has a non-finite coordinate")]
    NonFiniteCoordinate { label: String },
    #[error("polygon {label} has zero area")]
    DegeneratePolygon { label: String },
    #[error("polygon {label} is wound opposite to the rest of the input")]
    InconsistentWinding { label: String },
    #[error("the outer label is reserved for the unbounded face")]
    ReservedOuterLabel,
    #[error("directed edge {from:?} -> {to:?} appears in more than one polygon")]
    DuplicateHalfEdge { from: (f64, f64), to: (f64, f64) },
    #[error("edge {from:?} -> {to:?} is shared by more than two faces")]
    NonManifoldEdge { from: (f64, f64), to: (f64, f64) },
    #[error("exterior walk is ambiguous at {vertex:?} ({candidates} open edges)")]
    AmbiguousExterior { vertex: (f64, f64), candidates: usize },
    #[error("exterior walk starting at {start:?} does not close")]
    OpenExterior { start: (f64, f64) },
    #[error("input has more than one exterior boundary (another starts at {start:?})")]
    DisjointExterior { start: (f64, f64) },
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Removing a vertex from the mesh failed. Errors raised before the first ear
/// is cut leave the mesh untouched; `NoEar` and `LabelCollision` leave a valid
/// mesh whose star has been partially retriangulated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RemovalError {
    #[error("vertex {vertex} does not exist or was already removed")]
    UnknownVertex { vertex: usize },
    #[error("vertex {position:?} belongs to the bounding polygon")]
    BoundingVertex { position: (f64, f64) },
    #[error("vertex {position:?} touches the outer face")]
    NotInterior { position: (f64, f64) },
    #[error("vertex {position:?} has a non-triangular incident face {face}")]
    NonTriangularStar { position: (f64, f64), face: usize },
    #[error("face {label} covers more than one triangle and cannot be retriangulated")]
    SharedFace { label: String },
    #[error("star of {position:?} does not close after {steps} steps")]
    OpenStar { position: (f64, f64), steps: usize },
    #[error("no ear can be cut around {position:?} ({remaining} neighbors left)")]
    NoEar { position: (f64, f64), remaining: usize },
    #[error("retriangulation produced a face {label} that already exists")]
    LabelCollision { label: String },
}

/// Building a layer of the point-location hierarchy failed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HierarchyError {
    #[error("face {label} of the base mesh is not labeled by its triangle")]
    UntriangulatedLabel { label: String },
    #[error("layer {layer}: links miss face {label}")]
    MissingLink { layer: usize, label: String },
    #[error("layer {layer}: link for {label} names a face that is not in the layer below")]
    DanglingLink { layer: usize, label: String },
    #[error("layer {layer}: {links} links for {faces} faces")]
    LinkCoverage {
        layer: usize,
        links: usize,
        faces: usize,
    },
    #[error("layer {layer}: no removable vertex among {remaining} interior vertices")]
    Stalled { layer: usize, remaining: usize },
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Removal(#[from] RemovalError),
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}
