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

//! The result of a marching pass: deduplicated vertices and the simplices
//! that index into them.
//!
//! Adapted from the teacher's `extractor.rs`/`mesh.rs` ergonomics (an
//! indexed vertex/index pair ready for upload) but built on a dense-array
//! contract instead of a half-edge topology: the edge-id scheme already
//! deduplicates vertices, so carrying the teacher's `MeshTopology` forward
//! would solve the same problem twice.

use ndarray::{Array2, Axis};

/// Vertices and simplices produced by a [`crate::factory::Marcher`].
#[derive(Debug, Clone)]
pub struct MarchingOutput {
    pub vertices: Array2<f32>,
    pub simplices: Array2<u32>,
}

impl MarchingOutput {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len_of(Axis(0))
    }

    pub fn simplex_count(&self) -> usize {
        self.simplices.len_of(Axis(0))
    }

    /// Flattens both arrays row-major, for direct upload to a vertex/index
    /// buffer pair.
    pub fn into_flat(self) -> (Vec<f32>, Vec<u32>) {
        let vertices = self.vertices.into_raw_vec();
        let simplices = self.simplices.into_raw_vec();
        (vertices, simplices)
    }
}
