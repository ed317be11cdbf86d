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

use crate::geometry::vertex::Vertex;
use crate::numeric::scalar::Scalar;

/// An undirected segment between two vertices.
///
/// `(a, b)` and `(b, a)` compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Edge<T: Scalar = f64> {
    pub v0: Vertex<T>,
    pub v1: Vertex<T>,
}

impl<T: Scalar> Edge<T> {
    pub fn new(v0: Vertex<T>, v1: Vertex<T>) -> Self {
        Self { v0, v1 }
    }

    /// Same edge with its endpoints swapped.
    pub fn inverse(&self) -> Self {
        Self {
            v0: self.v1,
            v1: self.v0,
        }
    }
}

impl<T: Scalar> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.v0 == other.v0 && self.v1 == other.v1)
            || (self.v0 == other.v1 && self.v1 == other.v0)
    }
}
