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

use crate::geometry::{Triangle, Vertex};
use crate::numeric::scalar::Scalar;

/// First `(triangle, vertex)` pair where the vertex lies strictly inside
/// the triangle's circumcircle.
///
/// "Strictly" leaves a relative slack of `tol * radius`, so vertices that
/// sit on the circle up to rounding are accepted. A triangle's own vertices
/// are skipped.
pub fn find_delaunay_violation<T: Scalar>(
    triangles: &[Triangle<T>],
    vertices: &[Vertex<T>],
    tol: T,
) -> Option<(usize, usize)> {
    for (ti, t) in triangles.iter().enumerate() {
        let limit = t.radius() * (T::one() - tol);
        for (vi, v) in vertices.iter().enumerate() {
            if t.has_vertex(v) {
                continue;
            }
            if t.center().distance_to(v) < limit {
                return Some((ti, vi));
            }
        }
    }
    None
}

pub fn is_delaunay<T: Scalar>(triangles: &[Triangle<T>], vertices: &[Vertex<T>], tol: T) -> bool {
    find_delaunay_violation(triangles, vertices, tol).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipped_diagonal_is_reported() {
        // thin rhombus: the long diagonal breaks the empty-circle property
        let a = Vertex::new(0.0, 0.0);
        let b = Vertex::new(4.0, 1.0);
        let c = Vertex::new(8.0, 0.0);
        let d = Vertex::new(4.0, -1.0);
        let vertices = [a, b, c, d];

        let bad = [
            Triangle::new(a, b, c).unwrap(),
            Triangle::new(a, c, d).unwrap(),
        ];
        assert_eq!(find_delaunay_violation(&bad, &vertices, 1e-9), Some((0, 3)));

        let good = [
            Triangle::new(a, b, d).unwrap(),
            Triangle::new(b, c, d).unwrap(),
        ];
        assert!(is_delaunay(&good, &vertices, 1e-9));
    }
}
