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

//! Incremental Bowyer-Watson triangulation.
//!
//! The working mesh stores vertex indices: input vertex `i` keeps index `i`
//! and the three super-triangle corners take `n`, `n + 1` and `n + 2`. The
//! final pass drops faces by index, so an input vertex can never be
//! mistaken for a super-triangle corner.

use std::collections::hash_map::Entry;

use ahash::AHashMap;
use log::{debug, trace, warn};
use smallvec::SmallVec;

use crate::error::{DelaunayError, Result};
use crate::geometry::{Triangle, Vertex};
use crate::kernel::predicates::{bounding_box, orient2d};
use crate::numeric::scalar::Scalar;
use crate::operations::triangulation::{Triangulate2D, Triangulation};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Edge(usize, usize);

impl Edge {
    #[inline]
    fn new(a: usize, b: usize) -> Self {
        if a < b { Edge(a, b) } else { Edge(b, a) }
    }
}

#[derive(Clone, Copy, Debug)]
struct Face<T: Scalar> {
    idx: [usize; 3],
    tri: Triangle<T>,
}

impl<T: Scalar> Face<T> {
    fn new(points: &[Vertex<T>], idx: [usize; 3], tol: T) -> Result<Self> {
        let tri = Triangle::with_tolerance(points[idx[0]], points[idx[1]], points[idx[2]], tol)?;
        Ok(Self { idx, tri })
    }

    #[inline]
    fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.idx;
        [(a, b), (b, c), (c, a)]
    }

    /// Edges paired with the vertex facing them.
    #[inline]
    fn edges_with_apex(&self) -> [(usize, usize, usize); 3] {
        let [a, b, c] = self.idx;
        [(a, b, c), (b, c, a), (c, a, b)]
    }

    /// Closed point-in-triangle test, independent of winding.
    fn contains(&self, points: &[Vertex<T>], p: &Vertex<T>) -> bool {
        let [a, b, c] = self.idx.map(|i| points[i]);
        let d = [orient2d(&a, &b, p), orient2d(&b, &c, p), orient2d(&c, &a, p)];
        let zero = T::zero();
        !(d.iter().any(|&s| s < zero) && d.iter().any(|&s| s > zero))
    }

    /// True when `p` lies strictly on the same side of `ab` as `apex`, so
    /// fanning `ab` to `p` keeps this face's winding.
    fn sees(points: &[Vertex<T>], (a, b, apex): (usize, usize, usize), p: &Vertex<T>) -> bool {
        let inner = orient2d(&points[a], &points[b], &points[apex]);
        let side = orient2d(&points[a], &points[b], p);
        !side.is_zero() && side.signum() == inner.signum()
    }
}

/// Undirected edge to incident faces, as in a half-edge-free adjacency.
struct Adjacency {
    edge2faces: AHashMap<Edge, SmallVec<[usize; 2]>>,
}

impl Adjacency {
    fn build<T: Scalar>(faces: &[Face<T>]) -> Self {
        let mut edge2faces: AHashMap<Edge, SmallVec<[usize; 2]>> =
            AHashMap::with_capacity(faces.len() * 3);
        for (fi, f) in faces.iter().enumerate() {
            for (a, b) in f.edges() {
                edge2faces.entry(Edge::new(a, b)).or_default().push(fi);
            }
        }
        Self { edge2faces }
    }

    /// The face on the other side of `(a, b)` from `fi`, if any.
    #[inline]
    fn across(&self, a: usize, b: usize, fi: usize) -> Option<usize> {
        self.edge2faces
            .get(&Edge::new(a, b))?
            .iter()
            .copied()
            .find(|&other| other != fi)
    }
}

/// Bowyer-Watson triangulator.
///
/// The only setting is the relative tolerance used to classify a vertex
/// triple as collinear when computing circumcircles.
#[derive(Clone, Copy, Debug)]
pub struct BowyerWatson<T: Scalar = f64> {
    tolerance: T,
}

impl<T: Scalar> Default for BowyerWatson<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> BowyerWatson<T> {
    pub fn new() -> Self {
        Self {
            tolerance: T::collinear_tolerance(),
        }
    }

    pub fn with_tolerance(tolerance: T) -> Self {
        Self { tolerance }
    }

    #[inline]
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Inserts `points[vi]` into `faces`.
    ///
    /// The cavity starts at the face holding the vertex and spreads through
    /// shared edges to neighbours whose circumcircle holds it too. It then
    /// absorbs any neighbour across an edge the vertex does not see
    /// strictly from inside, so the cavity stays star-shaped around the
    /// vertex even when rounding splits a tie of cocircular faces. The
    /// cavity boundary is fanned to the vertex.
    fn insert_vertex(
        &self,
        points: &[Vertex<T>],
        vi: usize,
        faces: Vec<Face<T>>,
    ) -> Result<Vec<Face<T>>> {
        let p = points[vi];
        let adj = Adjacency::build(&faces);

        let seed = faces
            .iter()
            .position(|f| f.contains(points, &p))
            .ok_or_else(|| {
                DelaunayError::DegenerateGeometry(format!(
                    "vertex {vi} at ({}, {}) lies outside the working mesh",
                    p.x, p.y
                ))
            })?;

        let mut in_cavity = vec![false; faces.len()];
        in_cavity[seed] = true;
        let mut stack = vec![seed];
        while let Some(fi) = stack.pop() {
            for (a, b) in faces[fi].edges() {
                if let Some(ni) = adj.across(a, b, fi) {
                    if !in_cavity[ni] && faces[ni].tri.in_circumcircle(&p) {
                        in_cavity[ni] = true;
                        stack.push(ni);
                    }
                }
            }
        }

        let mut grown = true;
        while grown {
            grown = false;
            for fi in 0..faces.len() {
                if !in_cavity[fi] {
                    continue;
                }
                for edge in faces[fi].edges_with_apex() {
                    let (a, b, _) = edge;
                    match adj.across(a, b, fi) {
                        Some(ni) if in_cavity[ni] => {}
                        _ if Face::sees(points, edge, &p) => {}
                        Some(ni) => {
                            in_cavity[ni] = true;
                            grown = true;
                        }
                        None => {
                            return Err(DelaunayError::DegenerateGeometry(format!(
                                "vertex {vi} at ({}, {}) is not visible from hull edge ({a}, {b})",
                                p.x, p.y
                            )));
                        }
                    }
                }
            }
        }

        let mut bad = Vec::new();
        let mut good = Vec::with_capacity(faces.len());
        for (fi, f) in faces.into_iter().enumerate() {
            if in_cavity[fi] {
                bad.push(f);
            } else {
                good.push(f);
            }
        }

        let boundary = boundary_edges(&bad)?;
        trace!(
            "vertex {vi}: cavity of {} faces, {} boundary edges",
            bad.len(),
            boundary.len()
        );

        good.reserve(boundary.len());
        for (a, b) in boundary {
            good.push(Face::new(points, [a, b, vi], self.tolerance)?);
        }
        Ok(good)
    }
}

impl<T: Scalar> Triangulate2D<T> for BowyerWatson<T> {
    fn triangulate(&self, vertices: &[Vertex<T>]) -> Result<Triangulation<T>> {
        check_input(vertices)?;

        let n = vertices.len();
        let st = super_triangle(vertices, self.tolerance)?;
        debug!(
            "triangulating {n} vertices, super triangle ({}, {}) ({}, {}) ({}, {})",
            st.v0().x,
            st.v0().y,
            st.v1().x,
            st.v1().y,
            st.v2().x,
            st.v2().y
        );

        let mut points = Vec::with_capacity(n + 3);
        points.extend_from_slice(vertices);
        points.extend(st.vertices());

        let mut faces = vec![Face {
            idx: [n, n + 1, n + 2],
            tri: st,
        }];

        let mut seen = AHashMap::with_capacity(n);
        for (vi, v) in vertices.iter().enumerate() {
            match seen.entry(coord_key(v)) {
                Entry::Occupied(first) => {
                    warn!(
                        "vertex {vi} duplicates vertex {} at ({}, {}), skipped",
                        first.get(),
                        v.x,
                        v.y
                    );
                    continue;
                }
                Entry::Vacant(slot) => {
                    slot.insert(vi);
                }
            }
            faces = self.insert_vertex(&points, vi, faces)?;
        }

        let before = faces.len();
        let (indices, triangles): (Vec<[usize; 3]>, Vec<Triangle<T>>) = faces
            .into_iter()
            .filter(|f| f.idx.iter().all(|&i| i < n))
            .map(|f| (f.idx, f.tri))
            .unzip();

        debug_assert!(
            triangles
                .iter()
                .all(|t| t.center().is_finite() && t.radius().is_finite())
        );
        debug!(
            "triangulation done: {} triangles kept, {} touched the super triangle",
            triangles.len(),
            before - triangles.len()
        );

        Ok(Triangulation::new(vertices.to_vec(), indices, triangles))
    }
}

/// Delaunay triangulation of `vertices` with default settings.
///
/// Fails with [`DelaunayError::InvalidInput`] on an empty sequence or
/// non-finite coordinates, and with [`DelaunayError::DegenerateGeometry`]
/// when every vertex sits at the same point or an insertion cannot keep
/// the mesh a valid triangulation. Collinear input yields an empty list.
pub fn triangulate<T: Scalar>(vertices: &[Vertex<T>]) -> Result<Vec<Triangle<T>>> {
    BowyerWatson::new()
        .triangulate(vertices)
        .map(Triangulation::into_triangles)
}

/// Triangle enclosing every vertex of `vertices`.
///
/// With `(min, max)` the bounding box, `dx = 10 (max.x - min.x)` and
/// `dy = 10 (max.y - min.y)`, the corners are `(min.x - dx, min.y - 3dy)`,
/// `(min.x - dx, max.y + dy)` and `(max.x + 3dx, max.y + dy)`. A zero
/// extent on one axis takes the extent of the other one.
pub fn super_triangle<T: Scalar>(vertices: &[Vertex<T>], tol: T) -> Result<Triangle<T>> {
    let (min, max) = bounding_box(vertices)
        .ok_or_else(|| DelaunayError::InvalidInput("no vertices to enclose".into()))?;

    let ten = T::from_int(10);
    let three = T::from_int(3);
    let mut dx = (max.x - min.x) * ten;
    let mut dy = (max.y - min.y) * ten;

    match (dx.is_zero(), dy.is_zero()) {
        (true, true) => {
            return Err(DelaunayError::DegenerateGeometry(format!(
                "all vertices coincide at ({}, {})",
                min.x, min.y
            )));
        }
        (true, false) => dx = dy,
        (false, true) => dy = dx,
        (false, false) => {}
    }

    Triangle::with_tolerance(
        Vertex::new(min.x - dx, min.y - three * dy),
        Vertex::new(min.x - dx, max.y + dy),
        Vertex::new(max.x + three * dx, max.y + dy),
        tol,
    )
}

fn check_input<T: Scalar>(vertices: &[Vertex<T>]) -> Result<()> {
    if vertices.is_empty() {
        return Err(DelaunayError::InvalidInput("empty vertex sequence".into()));
    }
    if let Some((i, v)) = vertices.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(DelaunayError::InvalidInput(format!(
            "vertex {i} has non-finite coordinates ({}, {})",
            v.x, v.y
        )));
    }
    Ok(())
}

/// Hash key agreeing with `Vertex` equality on finite coordinates.
fn coord_key<T: Scalar>(v: &Vertex<T>) -> [(u64, i16, i8); 2] {
    // -0.0 == 0.0 but decodes differently
    let canon = |c: T| if c.is_zero() { T::zero() } else { c };
    [canon(v.x).integer_decode(), canon(v.y).integer_decode()]
}

/// Edges occurring once across `bad`, in the orientation and order they
/// were first met. An edge shared by two faces is interior to the cavity;
/// one shared by more means the mesh is no longer a triangulation.
fn boundary_edges<T: Scalar>(bad: &[Face<T>]) -> Result<SmallVec<[(usize, usize); 16]>> {
    let mut count: AHashMap<Edge, u32> = AHashMap::with_capacity(bad.len() * 3);
    let mut order: SmallVec<[(usize, usize); 16]> = SmallVec::new();

    for f in bad {
        for (a, b) in f.edges() {
            let c = count.entry(Edge::new(a, b)).or_insert(0);
            if *c == 0 {
                order.push((a, b));
            }
            *c += 1;
        }
    }

    if let Some((e, c)) = count.iter().find(|&(_, &c)| c > 2) {
        return Err(DelaunayError::DegenerateGeometry(format!(
            "edge ({}, {}) shared by {c} cavity faces",
            e.0, e.1
        )));
    }

    order.retain(|&mut (a, b)| count[&Edge::new(a, b)] == 1);
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(points: &[Vertex<f64>], idx: [usize; 3]) -> Face<f64> {
        Face::new(points, idx, f64::collinear_tolerance()).unwrap()
    }

    #[test]
    fn shared_edge_cancels_out_of_the_boundary() {
        let points = [
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.0),
            Vertex::new(1.0, 1.0),
            Vertex::new(0.0, 1.0),
        ];
        let bad = [face(&points, [0, 1, 2]), face(&points, [0, 2, 3])];

        let boundary = boundary_edges(&bad).unwrap();
        assert_eq!(boundary.as_slice(), &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    }

    #[test]
    fn single_face_boundary_is_its_edges() {
        let points = [
            Vertex::new(0.0, 0.0),
            Vertex::new(2.0, 0.0),
            Vertex::new(0.0, 2.0),
        ];
        let boundary = boundary_edges(&[face(&points, [0, 1, 2])]).unwrap();
        assert_eq!(boundary.as_slice(), &[(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn edge_in_three_faces_is_rejected() {
        let points = [
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.0),
            Vertex::new(0.5, 1.0),
            Vertex::new(0.5, -1.0),
            Vertex::new(0.5, 2.0),
        ];
        let bad = [
            face(&points, [0, 1, 2]),
            face(&points, [0, 1, 3]),
            face(&points, [0, 1, 4]),
        ];
        assert!(matches!(
            boundary_edges(&bad),
            Err(DelaunayError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn insert_on_shared_edge_splits_both_faces() {
        let points = [
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.0),
            Vertex::new(1.0, 1.0),
            Vertex::new(0.0, 1.0),
            Vertex::new(0.5, 0.5),
        ];
        let faces = vec![face(&points, [0, 1, 2]), face(&points, [0, 2, 3])];

        let faces = BowyerWatson::<f64>::new()
            .insert_vertex(&points, 4, faces)
            .unwrap();
        assert_eq!(faces.len(), 4);
        assert!(faces.iter().all(|f| f.idx.contains(&4)));

        let area: f64 = faces
            .iter()
            .map(|f| orient2d(&f.tri.v0(), &f.tri.v1(), &f.tri.v2()).abs() * 0.5)
            .sum();
        assert!((area - 1.0).abs() < 1e-12);
    }

    #[test]
    fn vertex_outside_the_mesh_is_an_error() {
        let points = [
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.0),
            Vertex::new(0.0, 1.0),
            Vertex::new(5.0, 5.0),
        ];
        let faces = vec![face(&points, [0, 1, 2])];
        assert!(matches!(
            BowyerWatson::<f64>::new().insert_vertex(&points, 3, faces),
            Err(DelaunayError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn super_triangle_uses_independent_extents() {
        // wide and flat: x spans 100, y spans 1
        let vertices = [
            Vertex::new(0.0, 0.0),
            Vertex::new(100.0, 1.0),
            Vertex::new(50.0, 0.5),
        ];
        let st = super_triangle(&vertices, f64::collinear_tolerance()).unwrap();
        assert_eq!(st.v0(), Vertex::new(-1000.0, -30.0));
        assert_eq!(st.v1(), Vertex::new(-1000.0, 11.0));
        assert_eq!(st.v2(), Vertex::new(3100.0, 11.0));
    }

    #[test]
    fn super_triangle_strictly_encloses_input() {
        let vertices = [
            Vertex::new(-3.0, 7.0),
            Vertex::new(12.0, -1.5),
            Vertex::new(4.0, 40.0),
            Vertex::new(0.25, 0.0),
        ];
        let st = super_triangle(&vertices, f64::collinear_tolerance()).unwrap();
        let [a, b, c] = st.vertices();
        let sign = orient2d(&a, &b, &c).signum();
        for v in &vertices {
            assert_eq!(orient2d(&a, &b, v).signum(), sign);
            assert_eq!(orient2d(&b, &c, v).signum(), sign);
            assert_eq!(orient2d(&c, &a, v).signum(), sign);
        }
    }

    #[test]
    fn super_triangle_of_horizontal_line_is_not_flat() {
        let vertices = [Vertex::new(0.0, 5.0), Vertex::new(2.0, 5.0)];
        let st = super_triangle(&vertices, f64::collinear_tolerance()).unwrap();
        assert!(!st.is_collinear());
        assert_eq!(st.v0(), Vertex::new(-20.0, -55.0));
    }

    #[test]
    fn super_triangle_rejects_a_single_point() {
        let vertices = [Vertex::new(1.0, 1.0), Vertex::new(1.0, 1.0)];
        assert!(matches!(
            super_triangle(&vertices, f64::collinear_tolerance()),
            Err(DelaunayError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn coord_key_matches_vertex_equality() {
        assert_eq!(
            coord_key(&Vertex::new(0.0, 1.5)),
            coord_key(&Vertex::new(-0.0, 1.5))
        );
        assert_ne!(
            coord_key(&Vertex::new(0.1 + 0.2, 1.5)),
            coord_key(&Vertex::new(0.3, 1.5))
        );
    }
}
