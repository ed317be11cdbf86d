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

use delaunay2d::{DelaunayError, Edge, Triangle, Vertex};

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn test_distance() {
    let p1 = Vertex::new(0.0, 0.0);
    let p2 = Vertex::new(3.0, 4.0);
    assert_eq!(p1.distance_to(&p2), 5.0);
}

#[test]
fn test_edge_equality_ignores_orientation() {
    let a = Vertex::new(0.0, 0.0);
    let b = Vertex::new(1.0, 2.0);
    let c = Vertex::new(1.0, 2.5);

    assert_eq!(Edge::new(a, b), Edge::new(b, a));
    assert_eq!(Edge::new(a, b).inverse(), Edge::new(a, b));
    assert_ne!(Edge::new(a, b), Edge::new(a, c));
}

#[test]
fn test_edge_inverse_swaps_endpoints() {
    let e = Edge::new(Vertex::new(1.0, 1.0), Vertex::new(2.0, 3.0)).inverse();
    assert_eq!(e.v0, Vertex::new(2.0, 3.0));
    assert_eq!(e.v1, Vertex::new(1.0, 1.0));
}

#[test]
fn test_circumcenter_is_equidistant() {
    let triples = [
        [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)],
        [(-3.5, 2.0), (7.25, 1.0), (0.5, 9.0)],
        [(100.0, 100.0), (100.5, 100.1), (99.8, 100.7)],
        [(1e6, -2e6), (1e6 + 3.0, -2e6), (1e6, -2e6 + 4.0)],
    ];

    for [a, b, c] in triples {
        let t: Triangle = Triangle::new(a.into(), b.into(), c.into()).unwrap();
        assert!(!t.is_collinear());
        for v in t.vertices() {
            let d = t.center().distance_to(&v);
            assert!((d - t.radius()).abs() <= 1e-9 * t.radius().max(1.0));
        }
    }
}

#[test]
fn test_collinear_triple_uses_bounding_box_circle() {
    let t = Triangle::new(
        Vertex::new(0.0, 0.0),
        Vertex::new(2.0, 1.0),
        Vertex::new(4.0, 2.0),
    )
    .unwrap();

    assert!(t.is_collinear());
    assert_eq!(t.center(), Vertex::new(2.0, 1.0));
    assert_close(t.radius(), 5.0_f64.sqrt());
}

#[test]
fn test_collinear_classification_is_scale_free() {
    let tiny = Triangle::new(
        Vertex::new(0.0, 0.0),
        Vertex::new(1e-8, 1e-8),
        Vertex::new(2e-8, 2.0000001e-8),
    )
    .unwrap();
    assert!(!tiny.is_collinear());

    let huge = Triangle::new(
        Vertex::new(0.0, 0.0),
        Vertex::new(1e8, 1e8),
        Vertex::new(2e8, 2e8),
    )
    .unwrap();
    assert!(huge.is_collinear());
}

#[test]
fn test_in_circumcircle_is_boundary_inclusive() {
    let t = Triangle::new(
        Vertex::new(0.0, 0.0),
        Vertex::new(10.0, 0.0),
        Vertex::new(10.0, 10.0),
    )
    .unwrap();

    // fourth corner of the square is exactly on the circle
    assert!(t.in_circumcircle(&Vertex::new(0.0, 10.0)));
    assert!(t.in_circumcircle(&Vertex::new(5.0, 5.0)));
    assert!(t.in_circumcircle(&t.v0()));
    assert!(!t.in_circumcircle(&Vertex::new(-0.5, 10.0)));
}

#[test]
fn test_in_circumcircle_matches_distance() {
    let t = Triangle::new(
        Vertex::new(-1.0, 0.5),
        Vertex::new(3.0, -2.0),
        Vertex::new(2.0, 4.0),
    )
    .unwrap();

    for i in -20..=20 {
        for j in -20..=20 {
            let v = Vertex::new(i as f64 * 0.5, j as f64 * 0.5);
            let expected = t.center().distance_to(&v) <= t.radius();
            assert_eq!(t.in_circumcircle(&v), expected);
        }
    }
}

#[test]
fn test_coincident_triangle_fails() {
    let p = Vertex::new(2.0, -7.0);
    assert!(matches!(
        Triangle::new(p, p, p),
        Err(DelaunayError::DegenerateGeometry(_))
    ));
}

#[test]
fn test_overflowing_circumcircle_fails() {
    let r = Triangle::new(
        Vertex::new(-f64::MAX, 0.0),
        Vertex::new(f64::MAX, 0.0),
        Vertex::new(0.0, f64::MAX),
    );
    assert!(matches!(r, Err(DelaunayError::DegenerateGeometry(_))));
}

#[test]
fn test_triangle_edges() {
    let a = Vertex::new(0.0, 0.0);
    let b = Vertex::new(1.0, 0.0);
    let c = Vertex::new(0.0, 1.0);
    let t = Triangle::new(a, b, c).unwrap();

    let edges = t.edges();
    assert!(edges.contains(&Edge::new(b, a)));
    assert!(edges.contains(&Edge::new(c, b)));
    assert!(edges.contains(&Edge::new(a, c)));
    assert!(t.has_vertex(&c));
    assert!(!t.has_vertex(&Vertex::new(1.0, 1.0)));
}

#[test]
fn test_f32_triangle() {
    let t = Triangle::<f32>::new(
        Vertex::new(0.0, 0.0),
        Vertex::new(4.0, 0.0),
        Vertex::new(0.0, 3.0),
    )
    .unwrap();
    assert!((t.radius() - 2.5).abs() < 1e-6);
}
