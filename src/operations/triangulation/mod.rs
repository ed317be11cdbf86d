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

use ahash::AHashMap;

use crate::error::Result;
use crate::geometry::{Triangle, Vertex};
use crate::numeric::scalar::Scalar;

pub mod bowyer_watson;
pub mod validate;

pub use bowyer_watson::{BowyerWatson, super_triangle, triangulate};
pub use validate::{find_delaunay_violation, is_delaunay};

pub trait Triangulate2D<T: Scalar> {
    fn triangulate(&self, vertices: &[Vertex<T>]) -> Result<Triangulation<T>>;
}

/// Output of a 2D triangulation.
///
/// `indices` refers into `vertices`, which holds the input sequence as
/// given. Exact duplicates are never referenced past their first copy.
#[derive(Clone, Debug)]
pub struct Triangulation<T: Scalar> {
    pub vertices: Vec<Vertex<T>>,
    pub indices: Vec<[usize; 3]>,
    triangles: Vec<Triangle<T>>,
}

impl<T: Scalar> Triangulation<T> {
    pub(crate) fn new(
        vertices: Vec<Vertex<T>>,
        indices: Vec<[usize; 3]>,
        triangles: Vec<Triangle<T>>,
    ) -> Self {
        debug_assert_eq!(indices.len(), triangles.len());
        Self {
            vertices,
            indices,
            triangles,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Triangles with their circumcircles, parallel to `indices`.
    pub fn triangles(&self) -> &[Triangle<T>] {
        &self.triangles
    }

    pub fn into_triangles(self) -> Vec<Triangle<T>> {
        self.triangles
    }

    /// Edges used by exactly one triangle, in the orientation they have in
    /// that triangle: the boundary of the returned triangles. Triangles lost
    /// to a super-triangle corner can make it differ from the convex hull.
    pub fn hull_edges(&self) -> Vec<[usize; 2]> {
        let mut count: AHashMap<(usize, usize), u32> =
            AHashMap::with_capacity(self.indices.len() * 3);
        for t in &self.indices {
            for (a, b) in [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
                *count.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }

        self.indices
            .iter()
            .flat_map(|t| [[t[0], t[1]], [t[1], t[2]], [t[2], t[0]]])
            .filter(|&[a, b]| count[&(a.min(b), a.max(b))] == 1)
            .collect()
    }
}
