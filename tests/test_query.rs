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

// tests/test_query.rs
mod common;

use common::*;
use kirkpatrick::{
    Exact, Hierarchy, HierarchyOpts, Point2, Real, Triangle2, geometry::TriangleLocation,
    produce_hierarchy,
};
use proptest::prelude::*;

fn fan_hierarchy() -> Hierarchy<Exact, u32> {
    let base = TestMesh::from_polygons(&fan(), Some(&square(10))).unwrap();
    produce_hierarchy(base, &HierarchyOpts::default()).unwrap()
}

fn base_triangles(h: &Hierarchy<Exact, u32>) -> Vec<Triangle2<Exact>> {
    h.base()
        .mesh
        .face_labels()
        .filter_map(|l| l.triangle().cloned())
        .collect()
}

#[test]
fn fan_points_resolve_to_their_triangle() {
    let h = fan_hierarchy();
    let bottom = Triangle2::new(pt(0, 0), pt(10, 0), pt(5, 5));
    let left = Triangle2::new(pt(0, 10), pt(0, 0), pt(5, 5));

    assert_eq!(h.query(&pt(5, 1)), Some(&bottom));
    assert_eq!(h.query(&pt(1, 5)), Some(&left));
    assert_eq!(h.query(&ptq(q(9, 2), q(1, 3))), Some(&bottom));
}

#[test]
fn shared_boundary_points_resolve_to_a_containing_triangle() {
    let h = fan_hierarchy();
    for p in [pt(5, 5), pt(2, 2), pt(0, 0), pt(10, 5), pt(0, 7)] {
        let t = h.query(&p).unwrap();
        assert!(t.contains(&p), "{:?} answered with {:?}", p, t);
        assert!(base_triangles(&h).contains(t));
    }
}

#[test]
fn outside_points_are_not_found() {
    let h = fan_hierarchy();
    for p in [pt(-1, 5), pt(11, 5), pt(5, -1), pt(5, 11), pt(20, 20)] {
        assert_eq!(h.query(&p), None);
    }
    assert!(h.locate(&pt(-3, -3)).is_none());
}

#[test]
fn every_grid_centroid_is_found() {
    let base = TestMesh::from_polygons(&plain_grid(5), None).unwrap();
    let h = produce_hierarchy(base, &HierarchyOpts::default()).unwrap();
    assert!(h.depth() > 2);

    for t in base_triangles(&h) {
        let c = centroid(&t);
        assert_eq!(h.query(&c), Some(&t));
    }
}

#[test]
fn locate_reports_the_supplied_region() {
    let cells = grid_cells(4, 10, |_, _| (0, 0));
    let h = Hierarchy::from_triangles(&cells, None, &HierarchyOpts::default()).unwrap();

    for (region, [a, b, c]) in &cells {
        let t = Triangle2::new(a.clone(), b.clone(), c.clone());
        let found = h.locate(&centroid(&t)).unwrap();
        assert_eq!(found.triangle, &t);
        assert_eq!(found.region, Some(region));
    }
}

#[test]
fn real_coordinates() {
    let cells: Vec<(u32, [Point2<Real>; 3])> = vec![
        (0, [Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), Point2::new(2.0, 1.5)]),
        (1, [Point2::new(4.0, 0.0), Point2::new(4.0, 4.0), Point2::new(2.0, 1.5)]),
        (2, [Point2::new(4.0, 4.0), Point2::new(0.0, 4.0), Point2::new(2.0, 1.5)]),
        (3, [Point2::new(0.0, 4.0), Point2::new(0.0, 0.0), Point2::new(2.0, 1.5)]),
    ];
    let h = Hierarchy::from_triangles(&cells, None, &HierarchyOpts::default()).unwrap();

    assert_eq!(h.depth(), 2);
    let found = h.locate(&Point2::new(3.5, 2.0)).unwrap();
    assert_eq!(found.region, Some(&1));
    assert!(h.query(&Point2::new(4.5, 2.0)).is_none());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn query_is_sound_on_jittered_grids(
        jitter in prop::collection::vec((-1i32..=1, -1i32..=1), 9),
        seed in any::<u64>(),
        points in prop::collection::vec((0i32..=400, 0i32..=400), 1..12),
    ) {
        let offset = |i: usize, j: usize| jitter[(j - 1) * 3 + (i - 1)];
        let base = TestMesh::from_polygons(&grid(4, 10, offset), None).unwrap();
        let opts = HierarchyOpts { seed, ..Default::default() };
        let h = produce_hierarchy(base, &opts).unwrap();
        let triangles = base_triangles(&h);

        for (x, y) in points {
            let p = ptq(q(x, 10), q(y, 10));
            let found = h.query(&p);
            prop_assert!(found.is_some(), "{:?} not found", p);
            let t = found.unwrap();
            prop_assert!(t.contains(&p));
            prop_assert!(triangles.contains(t));

            let inside: Vec<_> = triangles
                .iter()
                .filter(|c| c.locate(&p) == TriangleLocation::Inside)
                .collect();
            if let [only] = inside.as_slice() {
                prop_assert_eq!(*only, t);
            }
        }
    }
}
