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

use crate::error::{DelaunayError, Result};
use crate::geometry::Vertex;
use crate::numeric::scalar::Scalar;

/// Circle cached on every triangle.
///
/// `collinear` is set when the three points were classified as collinear and
/// the bounding-box approximation stands in for the true circumcircle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle<T: Scalar> {
    pub center: Vertex<T>,
    pub radius: T,
    pub collinear: bool,
}

/// Signed doubled area of `abc`. Positive when counter-clockwise.
#[inline]
pub fn orient2d<T: Scalar>(a: &Vertex<T>, b: &Vertex<T>, c: &Vertex<T>) -> T {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Boundary-inclusive containment: a point exactly on the circle counts as
/// inside.
#[inline]
pub fn in_circle<T: Scalar>(center: &Vertex<T>, radius: T, p: &Vertex<T>) -> bool {
    center.distance_to(p) <= radius
}

/// Axis-aligned bounds of `vertices` as `(min, max)`, or `None` when empty.
pub fn bounding_box<'a, T, I>(vertices: I) -> Option<(Vertex<T>, Vertex<T>)>
where
    T: Scalar,
    I: IntoIterator<Item = &'a Vertex<T>>,
{
    let mut iter = vertices.into_iter();
    let first = iter.next()?;

    let mut min_x = first.x;
    let mut min_y = first.y;
    let mut max_x = first.x;
    let mut max_y = first.y;

    for v in iter {
        min_x = min_x.min(v.x);
        min_y = min_y.min(v.y);
        max_x = max_x.max(v.x);
        max_y = max_y.max(v.y);
    }

    Some((Vertex::new(min_x, min_y), Vertex::new(max_x, max_y)))
}

/// Circle through `v0`, `v1`, `v2`.
///
/// Uses the formulation from the comp.graphics.algorithms FAQ (subject
/// 1.04). With `G` the doubled orientation determinant, the triple is
/// treated as collinear when `|G| <= tol * S`, `S` being the magnitude of
/// the two products that make up `G`. Collinear triples get the circle
/// centred on their bounding box, with radius reaching the box's minimum
/// corner.
///
/// Fails with [`DelaunayError::DegenerateGeometry`] when all three points
/// coincide or when the result is not finite.
pub fn circumcircle<T: Scalar>(
    v0: &Vertex<T>,
    v1: &Vertex<T>,
    v2: &Vertex<T>,
    tol: T,
) -> Result<Circumcircle<T>> {
    if v0 == v1 && v1 == v2 {
        return Err(DelaunayError::DegenerateGeometry(format!(
            "triangle vertices coincide at ({}, {})",
            v0.x, v0.y
        )));
    }

    let a = v1.x - v0.x;
    let b = v1.y - v0.y;
    let c = v2.x - v0.x;
    let d = v2.y - v0.y;

    let e = a * (v0.x + v1.x) + b * (v0.y + v1.y);
    let f = c * (v0.x + v2.x) + d * (v0.y + v2.y);

    let lhs = a * (v2.y - v1.y);
    let rhs = b * (v2.x - v1.x);
    let g = T::two() * (lhs - rhs);
    let scale = T::two() * (lhs.abs() + rhs.abs());

    let (center, radius, collinear) = if g.abs() <= tol * scale {
        let (min, max) = (
            Vertex::new(v0.x.min(v1.x).min(v2.x), v0.y.min(v1.y).min(v2.y)),
            Vertex::new(v0.x.max(v1.x).max(v2.x), v0.y.max(v1.y).max(v2.y)),
        );
        let center = Vertex::new((min.x + max.x) * T::half(), (min.y + max.y) * T::half());
        (center, center.distance_to(&min), true)
    } else {
        let center = Vertex::new((d * e - b * f) / g, (a * f - c * e) / g);
        (center, center.distance_to(v0), false)
    };

    if !center.is_finite() || !radius.is_finite() {
        return Err(DelaunayError::DegenerateGeometry(format!(
            "non-finite circumcircle for ({}, {}), ({}, {}), ({}, {})",
            v0.x, v0.y, v1.x, v1.y, v2.x, v2.y
        )));
    }

    Ok(Circumcircle {
        center,
        radius,
        collinear,
    })
}
