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

//! Delaunay triangulation of planar point sets with the Bowyer-Watson
//! algorithm.
//!
//! ```
//! use delaunay2d::{Vertex, triangulate};
//!
//! let square = [
//!     Vertex::new(0.0, 0.0),
//!     Vertex::new(10.0, 0.0),
//!     Vertex::new(10.0, 10.0),
//!     Vertex::new(0.0, 10.0),
//! ];
//! let triangles = triangulate(&square).unwrap();
//! assert_eq!(triangles.len(), 2);
//! ```

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod numeric;
pub mod operations;

pub use error::{DelaunayError, Result};
pub use geometry::{Edge, Triangle, Vertex};
pub use numeric::Scalar;
pub use operations::triangulation::{
    BowyerWatson, Triangulate2D, Triangulation, super_triangle, triangulate,
};
