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

// tests/test_vertex_removal.rs
mod common;

use ahash::AHashSet;
use common::*;
use kirkpatrick::{FaceLabel, RemovalError, Triangle2, Turn};

#[test]
fn fan_center_becomes_two_triangles() {
    let mut mesh = TestMesh::from_polygons(&fan(), Some(&square(10))).unwrap();
    let fan_labels: Vec<_> = fan().into_iter().map(|(l, _)| l).collect();
    let area_before = total_area2(&mesh);

    let center = mesh.vertex_at(&pt(5, 5)).unwrap();
    let links = mesh.remove_interior_vertex(center).unwrap();

    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.face_count(), 3);
    assert!(mesh.vertex_at(&pt(5, 5)).is_none());
    assert_eq!(total_area2(&mesh), area_before);

    for corner in square(10) {
        let v = mesh.vertex_at(&corner).unwrap();
        assert!(mesh.is_bounding_vertex(v));
        assert_eq!(mesh.position(v), &corner);
    }

    assert_eq!(links.len(), 2);
    let mut covered = AHashSet::new();
    for (label, old) in &links {
        let t = label.triangle().unwrap();
        assert!(mesh.face_by_label(label).is_some());
        assert!(!t.is_degenerate());
        assert_eq!(t.orientation(), Turn::Left);
        assert!(t.corners().iter().all(|c| square(10).contains(c)));

        assert_eq!(old.len(), 2, "{:?} covers {:?}", label, old);
        for l in old {
            assert!(fan_labels.contains(l));
            assert!(l.triangle().unwrap().overlaps(t));
            covered.insert(l.clone());
        }
    }
    assert_eq!(covered.len(), 4);
}

#[test]
fn clockwise_fan_center_is_removable() {
    let polys: Vec<Poly> = fan()
        .into_iter()
        .map(|(_, poly)| tri(poly[2].clone(), poly[1].clone(), poly[0].clone()))
        .collect();
    let mut mesh = TestMesh::from_polygons(&polys, None).unwrap();
    assert_eq!(mesh.winding(), Turn::Right);

    let center = mesh.vertex_at(&pt(5, 5)).unwrap();
    let links = mesh.remove_interior_vertex(center).unwrap();

    assert!(mesh.validate().is_ok());
    assert_eq!(links.len(), 2);
    for label in links.keys() {
        assert_eq!(label.triangle().unwrap().orientation(), Turn::Right);
    }
    assert_eq!(total_area2(&mesh), q(-200, 1));
}

#[test]
fn reflex_neighbor_is_never_cut() {
    // (2,1) is a reflex corner of the star around the origin.
    let ring = [pt(6, 0), pt(2, 1), pt(0, 6), pt(-6, 0), pt(0, -6)];
    let polys: Vec<Poly> = (0..5)
        .map(|i| tri(pt(0, 0), ring[i].clone(), ring[(i + 1) % 5].clone()))
        .collect();
    let mut mesh = TestMesh::from_polygons(&polys, None).unwrap();
    let area_before = total_area2(&mesh);

    let center = mesh.vertex_at(&pt(0, 0)).unwrap();
    assert_eq!(mesh.degree(center), 5);
    let links = mesh.remove_interior_vertex(center).unwrap();

    assert!(mesh.validate().is_ok());
    assert_eq!(links.len(), 3);
    assert_eq!(mesh.face_count(), 4);
    assert_eq!(total_area2(&mesh), area_before);
    for label in links.keys() {
        let t = label.triangle().unwrap();
        assert_eq!(t.orientation(), Turn::Left);
        assert!(!t.contains(&pt(2, 1)) || t.corners().contains(&pt(2, 1)));
    }
}

#[test]
fn removal_conserves_counts_and_area() {
    let jitter = |i: usize, j: usize| (((i * 7 + j * 3) % 3) as i32 - 1, ((i + j * 5) % 3) as i32 - 1);
    let mut mesh = TestMesh::from_polygons(&grid(5, 10, jitter), None).unwrap();
    let area = total_area2(&mesh);

    let targets: Vec<usize> = mesh.interior_vertices().step_by(2).collect();
    assert!(!targets.is_empty());
    for v in targets {
        let ring = mesh.vertex_ring(v).unwrap();
        let old: AHashSet<FaceLabel<_, _>> = ring.faces.iter().map(|&f| mesh.faces[f].label.clone()).collect();
        let d = ring.neighbors.len();
        let vertices = mesh.vertex_count();
        let faces = mesh.face_count();

        let links = mesh.remove_interior_vertex(v).unwrap();

        assert!(mesh.validate().is_ok());
        assert_eq!(mesh.vertex_count(), vertices - 1);
        assert_eq!(mesh.face_count(), faces - 2);
        assert_eq!(links.len(), d - 2);
        assert_eq!(total_area2(&mesh), area);

        let mut covered = AHashSet::new();
        for (label, replaced) in &links {
            assert!(mesh.face_by_label(label).is_some());
            assert!(!replaced.is_empty());
            for l in replaced {
                assert!(old.contains(l));
                covered.insert(l.clone());
            }
        }
        assert_eq!(covered.len(), old.len());
    }
}

#[test]
fn bounding_vertex_is_rejected() {
    let mut mesh = TestMesh::from_polygons(&fan(), None).unwrap();
    let corner = mesh.vertex_at(&pt(0, 0)).unwrap();

    let err = mesh.remove_interior_vertex(corner).unwrap_err();
    assert!(matches!(err, RemovalError::BoundingVertex { .. }));
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.vertex_count(), 5);
    assert_eq!(mesh.face_count(), 5);
}

#[test]
fn unknown_vertex_is_rejected() {
    let mut mesh = TestMesh::from_polygons(&fan(), None).unwrap();
    assert!(matches!(
        mesh.remove_interior_vertex(99),
        Err(RemovalError::UnknownVertex { vertex: 99 })
    ));

    let center = mesh.vertex_at(&pt(5, 5)).unwrap();
    mesh.remove_interior_vertex(center).unwrap();
    assert!(matches!(
        mesh.remove_interior_vertex(center),
        Err(RemovalError::UnknownVertex { .. })
    ));
}

#[test]
fn region_labeled_faces_are_linked() {
    let mut polys = fan();
    let (_, poly) = polys.remove(0);
    polys.push((FaceLabel::Region(7), poly));
    polys.push((
        FaceLabel::Triangle(Triangle2::new(pt(10, 0), pt(20, 0), pt(10, 10))),
        vec![pt(10, 0), pt(20, 0), pt(10, 10)],
    ));
    let mut mesh = TestMesh::from_polygons(&polys, None).unwrap();

    // (10,0) still touches the exterior.
    let v = mesh.vertex_at(&pt(10, 0)).unwrap();
    assert!(mesh.remove_interior_vertex(v).is_err());

    // One face of the center keeps a region label.
    let center = mesh.vertex_at(&pt(5, 5)).unwrap();
    let links = mesh.remove_interior_vertex(center).unwrap();
    assert!(links.values().flatten().any(|l| l == &FaceLabel::Region(7)));
    assert!(mesh.validate().is_ok());
}
