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

use crate::numeric::scalar::Scalar;

/// A point in the plane.
///
/// Equality compares both coordinates exactly, without any tolerance. Two
/// vertices that differ only by rounding noise are distinct.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vertex<T: Scalar = f64> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vertex<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Self) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Scalar> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<T: Scalar> From<(T, T)> for Vertex<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> From<[T; 2]> for Vertex<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_exact() {
        let a = Vertex::new(0.1 + 0.2, 1.0);
        let b = Vertex::new(0.3, 1.0);
        assert_ne!(a, b);
        assert_eq!(Vertex::new(0.3, 1.0), b);
    }

    #[test]
    fn signed_zero_compares_equal() {
        assert_eq!(Vertex::new(0.0, -0.0), Vertex::new(-0.0, 0.0));
    }
}
