// Copyright 2017 Tristam MacDonald
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A dimension-agnostic marching pipeline: extract iso-surfaces (line
//! segments in 2D, triangles in 3D) from dense rectilinear scalar fields.
//!
//! The pipeline runs in five stages — [`intersect`], [`classify`],
//! [`ambiguity`], [`geometry`], [`remap`] — bound per dimension by
//! [`factory`]'s four operations:
//!
//! ```no_run
//! use marching::factory::{marching_squares, MarchingOptions};
//! use ndarray::arr2;
//!
//! let volume = arr2(&[[1.0, 1.0], [1.0, -1.0]]).into_dyn();
//! let output = marching_squares()
//!     .march(volume.view(), &MarchingOptions::default())
//!     .unwrap();
//! println!("{} vertices, {} segments", output.vertex_count(), output.simplex_count());
//! ```

pub mod ambiguity;
pub mod classify;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod grid;
pub mod intersect;
pub mod interpolation;
pub mod output;
pub mod remap;
pub mod tables;

pub use error::{MarchingError, Result};
pub use factory::{
    marching_cubes_lorensen, marching_squares, marching_triangles, marching_triangles_reversed,
    MarchingOptions,
};
pub use interpolation::Interpolation;
pub use output::MarchingOutput;
