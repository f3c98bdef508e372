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

//! Error types for the marching pipeline.

use thiserror::Error;

/// Errors surfaced by the marching pipeline.
///
/// All are fatal to the call; there is no partial result on error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarchingError {
    /// A shape, size, or enum-value violation at a pipeline boundary.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The integer width chosen for cell types cannot hold every possible
    /// type value for the bound dimension.
    #[error("type too narrow: dtype can hold at most {max_representable}, but the largest cell type is {max_type}")]
    TypeTooNarrow {
        max_type: u32,
        max_representable: u32,
    },

    /// The geometry table's column count is not a multiple of the number
    /// of vertices per simplex.
    #[error("invalid geometry table: {columns} columns is not a multiple of {vertices_per_simplex} vertices per simplex")]
    InvalidTable {
        columns: usize,
        vertices_per_simplex: usize,
    },

    /// An edge-id produced by the geometry lookup has no corresponding
    /// vertex record. Indicates a bug in the bound tables or an upstream
    /// stage, not a caller error.
    #[error("missing vertex for edge id {edge_id}")]
    MissingVertex { edge_id: u64 },
}

/// A specialized `Result` for marching pipeline operations.
pub type Result<T> = std::result::Result<T, MarchingError>;
