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

//! Stage 4: look up, per cell type, which edges form the output simplices.
//!
//! Grounded on `MarchingCuPy/LookUpGeometry.py`'s `look_up_geometry`: fuse
//! each table edge into a `vertex_id_offset_lookup` (`edge_delta ·
//! size_multiplier + edge_direction`), then gather simplex-slot columns
//! across all cells, stopping once a slot is empty for every cell.

use crate::error::MarchingError;
use ndarray::{Array2, ArrayD, Dimension};

/// A dimension-specific simplex table: for each cell type (row), up to
/// `columns / n_v` simplices, each `n_v` edge-numbers wide, terminated by
/// `-1` where a type contributes fewer simplices than the table's width.
pub struct GeometryTable {
    pub rows: &'static [i16],
    pub columns: usize,
    pub n_v: usize,
    pub edge_delta: &'static [&'static [u8]],
    pub edge_direction: &'static [u8],
}

impl GeometryTable {
    fn row(&self, cell_type: u16) -> &[i16] {
        let start = cell_type as usize * self.columns;
        &self.rows[start..start + self.columns]
    }
}

/// Produces the `(simplex_count, n_v)` array of edge-ids forming the output
/// simplices for every cell.
pub fn look_up_geometry(
    types: &ArrayD<u16>,
    table: &GeometryTable,
    size_multiplier: &[u64],
) -> Result<Array2<u64>, MarchingError> {
    if table.columns % table.n_v != 0 {
        return Err(MarchingError::InvalidTable {
            columns: table.columns,
            vertices_per_simplex: table.n_v,
        });
    }
    if table.edge_delta.len() != table.edge_direction.len() {
        return Err(MarchingError::InvalidInput(
            "edge_delta and edge_direction must have the same length".into(),
        ));
    }

    let vertex_id_offset_lookup: Vec<u64> = table
        .edge_delta
        .iter()
        .zip(table.edge_direction.iter())
        .map(|(delta, &direction)| {
            let offset: u64 = delta
                .iter()
                .zip(size_multiplier.iter())
                .map(|(&d, &s)| d as u64 * s)
                .sum();
            offset + direction as u64
        })
        .collect();

    let mut out = Vec::new();
    let mut simplex_count = 0usize;

    for slot in (0..table.columns).step_by(table.n_v) {
        let mut found_any = false;
        for (idx, &ty) in types.indexed_iter() {
            let row = table.row(ty);
            if row[slot] < 0 {
                continue;
            }
            found_any = true;

            let corner_id: u64 = (0..idx.ndim())
                .map(|axis| idx[axis] as u64 * size_multiplier[axis])
                .sum();

            for v in 0..table.n_v {
                let edge = row[slot + v];
                debug_assert!(edge >= 0, "partial simplex in geometry table row");
                out.push(corner_id + vertex_id_offset_lookup[edge as usize]);
            }
            simplex_count += 1;
        }
        if !found_any {
            break;
        }
    }

    let geometry = Array2::from_shape_vec((simplex_count, table.n_v), out)
        .expect("geometry buffer length must be simplex_count * n_v by construction");
    log::debug!(
        "geometry: {} simplices of {} vertices each",
        simplex_count,
        table.n_v
    );
    Ok(geometry)
}
