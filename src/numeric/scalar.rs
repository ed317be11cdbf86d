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

use num_traits::Float;

use std::fmt::{Debug, Display};

/// Coordinate type of every vertex, edge and triangle in the crate.
///
/// Only binary floating point is supported; the circumcircle test works on
/// approximate arithmetic and accepts the rounding that comes with it.
pub trait Scalar: Float + Debug + Display + Default + Send + Sync + 'static {
    /// Relative tolerance under which three points are classified as
    /// collinear. Compared against the magnitude of the terms forming the
    /// orientation determinant, so it does not depend on coordinate scale.
    fn collinear_tolerance() -> Self {
        Self::epsilon() * Self::from_int(64)
    }

    /// Small integer constants used by the geometry code.
    fn from_int(v: i32) -> Self;

    fn two() -> Self {
        Self::one() + Self::one()
    }

    fn half() -> Self {
        Self::one() / Self::two()
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_int(v: i32) -> Self {
        v as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_int(v: i32) -> Self {
        f64::from(v)
    }
}
