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

//! Stage 5: remap sparse edge-ids to dense, 0-based vertex indices.
//!
//! Grounded on `MarchingCuPy/ConvertIndexes.py`: `ndarray_numpy_ordered_lookup`
//! (a scatter array, fast but memory-proportional to the largest edge-id) and
//! `ndarray_dict_ordered_lookup` (a hash map, memory-proportional to the
//! vertex count but slower per lookup).

use crate::error::MarchingError;
use ndarray::Array2;
use std::collections::HashMap;

/// Remaps `geometry`'s edge-ids through a scatter array sized to the
/// largest edge-id in `edge_ids`. Fast, but wasteful when edge-ids are
/// sparse relative to the vertex count.
pub fn remap_dense(geometry: &Array2<u64>, edge_ids: &[u64]) -> Result<Array2<u32>, MarchingError> {
    let max_id = edge_ids.iter().copied().max().unwrap_or(0);
    let mut lookup = vec![u32::MAX; max_id as usize + 1];
    for (ordinal, &id) in edge_ids.iter().enumerate() {
        lookup[id as usize] = ordinal as u32;
    }

    let mut out = Vec::with_capacity(geometry.len());
    for &edge_id in geometry.iter() {
        let ordinal = lookup
            .get(edge_id as usize)
            .copied()
            .filter(|&v| v != u32::MAX)
            .ok_or(MarchingError::MissingVertex { edge_id })?;
        out.push(ordinal);
    }
    Array2::from_shape_vec(geometry.dim(), out)
        .map_err(|_| MarchingError::InvalidInput("remap output shape mismatch".into()))
}

/// Remaps `geometry`'s edge-ids through a hash map keyed by edge-id.
/// Slower per lookup than [`remap_dense`] but memory-proportional to the
/// vertex count, making it the better choice for sparse grids.
pub fn remap_sparse(
    geometry: &Array2<u64>,
    edge_ids: &[u64],
) -> Result<Array2<u32>, MarchingError> {
    let lookup: HashMap<u64, u32> = edge_ids
        .iter()
        .enumerate()
        .map(|(ordinal, &id)| (id, ordinal as u32))
        .collect();

    let mut out = Vec::with_capacity(geometry.len());
    for &edge_id in geometry.iter() {
        let ordinal = *lookup
            .get(&edge_id)
            .ok_or(MarchingError::MissingVertex { edge_id })?;
        out.push(ordinal);
    }
    Array2::from_shape_vec(geometry.dim(), out)
        .map_err(|_| MarchingError::InvalidInput("remap output shape mismatch".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn dense_and_sparse_agree() {
        let edge_ids = vec![10u64, 3, 7];
        let geometry = arr2(&[[10u64, 3], [7, 10]]);
        let dense = remap_dense(&geometry, &edge_ids).unwrap();
        let sparse = remap_sparse(&geometry, &edge_ids).unwrap();
        assert_eq!(dense, sparse);
        assert_eq!(dense, arr2(&[[0u32, 1], [2, 0]]));
    }

    #[test]
    fn missing_vertex_is_reported() {
        let edge_ids = vec![10u64];
        let geometry = arr2(&[[10u64, 99]]);
        let err = remap_dense(&geometry, &edge_ids).unwrap_err();
        assert!(matches!(err, MarchingError::MissingVertex { edge_id: 99 }));
        let err = remap_sparse(&geometry, &edge_ids).unwrap_err();
        assert!(matches!(err, MarchingError::MissingVertex { edge_id: 99 }));
    }
}
