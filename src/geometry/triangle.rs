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

use crate::error::Result;
use crate::geometry::{Edge, Vertex};
use crate::kernel::predicates::{Circumcircle, circumcircle, in_circle};
use crate::numeric::scalar::Scalar;

/// Three vertices and their circumcircle, computed once at construction.
///
/// The fields are read through accessors so the cached circle always
/// matches the vertices it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T: Scalar = f64> {
    v0: Vertex<T>,
    v1: Vertex<T>,
    v2: Vertex<T>,
    circle: Circumcircle<T>,
}

impl<T: Scalar> Triangle<T> {
    /// Builds the triangle with the default collinearity tolerance of `T`.
    pub fn new(v0: Vertex<T>, v1: Vertex<T>, v2: Vertex<T>) -> Result<Self> {
        Self::with_tolerance(v0, v1, v2, T::collinear_tolerance())
    }

    pub fn with_tolerance(v0: Vertex<T>, v1: Vertex<T>, v2: Vertex<T>, tol: T) -> Result<Self> {
        let circle = circumcircle(&v0, &v1, &v2, tol)?;
        Ok(Self { v0, v1, v2, circle })
    }

    #[inline]
    pub fn v0(&self) -> Vertex<T> {
        self.v0
    }

    #[inline]
    pub fn v1(&self) -> Vertex<T> {
        self.v1
    }

    #[inline]
    pub fn v2(&self) -> Vertex<T> {
        self.v2
    }

    #[inline]
    pub fn center(&self) -> Vertex<T> {
        self.circle.center
    }

    #[inline]
    pub fn radius(&self) -> T {
        self.circle.radius
    }

    /// True when the vertices were classified as collinear and `center` /
    /// `radius` come from the bounding-box approximation.
    #[inline]
    pub fn is_collinear(&self) -> bool {
        self.circle.collinear
    }

    pub fn vertices(&self) -> [Vertex<T>; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn edges(&self) -> [Edge<T>; 3] {
        [
            Edge::new(self.v0, self.v1),
            Edge::new(self.v1, self.v2),
            Edge::new(self.v2, self.v0),
        ]
    }

    pub fn has_vertex(&self, v: &Vertex<T>) -> bool {
        self.v0 == *v || self.v1 == *v || self.v2 == *v
    }

    /// `distance(center, v) <= radius`. Points on the circle are inside.
    #[inline]
    pub fn in_circumcircle(&self, v: &Vertex<T>) -> bool {
        in_circle(&self.circle.center, self.circle.radius, v)
    }
}
