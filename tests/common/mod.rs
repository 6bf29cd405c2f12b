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

// tests/common/mod.rs
#![allow(dead_code)]

use kirkpatrick::{Exact, FaceLabel, LabeledPolygon, Mesh, Point2, Scalar, Triangle2};

pub type P = Point2<Exact>;
pub type TestMesh = Mesh<Exact, u32>;
pub type Poly = LabeledPolygon<Exact, u32>;

pub fn q(num: i32, den: i32) -> Exact {
    Exact::from_num_den(num, den)
}

pub fn pt(x: i32, y: i32) -> P {
    Point2::new(x, y)
}

pub fn ptq(x: Exact, y: Exact) -> P {
    Point2 { x, y }
}

pub fn tri(a: P, b: P, c: P) -> Poly {
    (
        FaceLabel::Triangle(Triangle2::new(a.clone(), b.clone(), c.clone())),
        vec![a, b, c],
    )
}

pub fn square(side: i32) -> Vec<P> {
    vec![pt(0, 0), pt(side, 0), pt(side, side), pt(0, side)]
}

/// Bounding box (0,0)-(10,10) split into four counter-clockwise triangles
/// around (5,5).
pub fn fan() -> Vec<Poly> {
    let c = pt(5, 5);
    let corners = square(10);
    (0..4)
        .map(|i| tri(corners[i].clone(), corners[(i + 1) % 4].clone(), c.clone()))
        .collect()
}

/// Corners of an n x n grid of cells with side `spacing`. `offset` moves
/// interior grid points.
pub fn grid_points<F>(n: usize, spacing: i32, offset: F) -> impl Fn(usize, usize) -> P
where
    F: Fn(usize, usize) -> (i32, i32),
{
    move |i, j| {
        let (dx, dy) = if i > 0 && j > 0 && i < n && j < n {
            offset(i, j)
        } else {
            (0, 0)
        };
        pt(i as i32 * spacing + dx, j as i32 * spacing + dy)
    }
}

/// Cells of the grid, each split along its rising diagonal into two
/// counter-clockwise triangles. Cell (i, j) gets region id `j * n + i`.
pub fn grid_cells<F>(n: usize, spacing: i32, offset: F) -> Vec<(u32, [P; 3])>
where
    F: Fn(usize, usize) -> (i32, i32),
{
    let at = grid_points(n, spacing, offset);
    let mut out = Vec::with_capacity(2 * n * n);
    for j in 0..n {
        for i in 0..n {
            let id = (j * n + i) as u32;
            let (a, b, c, d) = (at(i, j), at(i + 1, j), at(i + 1, j + 1), at(i, j + 1));
            out.push((id, [a.clone(), b, c.clone()]));
            out.push((id, [a, c, d]));
        }
    }
    out
}

pub fn grid<F>(n: usize, spacing: i32, offset: F) -> Vec<Poly>
where
    F: Fn(usize, usize) -> (i32, i32),
{
    grid_cells(n, spacing, offset)
        .into_iter()
        .map(|(_, [a, b, c])| tri(a, b, c))
        .collect()
}

pub fn plain_grid(n: usize) -> Vec<Poly> {
    grid(n, 10, |_, _| (0, 0))
}

/// Twice the area covered by the bounded faces.
pub fn total_area2(mesh: &TestMesh) -> Exact {
    let mut sum = q(0, 1);
    for f in mesh.live_faces() {
        if f == mesh.outer_face() {
            continue;
        }
        if let Some(t) = mesh.face_triangle(f) {
            sum = sum + t.area2();
        }
    }
    sum
}

pub fn centroid(t: &Triangle2<Exact>) -> P {
    let [a, b, c] = t.corners();
    let third = q(1, 3);
    ptq(
        (a.x.clone() + b.x.clone() + c.x.clone()) * third.clone(),
        (a.y.clone() + b.y.clone() + c.y.clone()) * third,
    )
}

/// Same cyclic sequence, possibly rotated.
pub fn same_cycle(a: &[P], b: &[P]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    (0..b.len()).any(|shift| (0..a.len()).all(|i| a[i] == b[(i + shift) % b.len()]))
}
