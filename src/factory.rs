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

//! Binds the five pipeline stages into the four marching operations and
//! orchestrates a single call to `march`.
//!
//! Grounded on `MarchingNumPy/Marching.py`'s `marching_factory`: striding
//! by `step_size`, zero-referencing the volume against `level` once, then
//! intersect -> classify -> ambiguity -> geometry -> remap in order.

use crate::ambiguity::{AmbiguityResolver, SquareAmbiguityResolver};
use crate::error::MarchingError;
use crate::geometry::{look_up_geometry, GeometryTable};
use crate::grid::{assert_nd_array, size_multiplier};
use crate::intersect::{find_intersects, SlicePair};
use crate::interpolation::Interpolation;
use crate::output::MarchingOutput;
use crate::remap::{remap_dense, remap_sparse};
use crate::tables::{cubes, squares, triangles};
use ndarray::{ArrayD, ArrayViewD};

/// Tuning knobs for a single `march` call, mirroring the keyword arguments
/// of `Marching.py`'s `marching_factory`.
#[derive(Debug, Clone)]
pub struct MarchingOptions {
    /// Scalar subtracted from the volume once before classification.
    pub level: f64,
    pub interpolation: Interpolation,
    /// Stride applied to every axis before processing; `1` means no
    /// striding.
    pub step_size: usize,
    /// Whether the bound ambiguity resolver (if any) runs.
    pub resolve_ambiguous: bool,
    /// Above this many distinct edge-ids, index remapping uses the sparse
    /// (hash map) strategy instead of a dense scatter array.
    pub dense_threshold: u64,
}

impl Default for MarchingOptions {
    fn default() -> Self {
        MarchingOptions {
            level: 0.0,
            interpolation: Interpolation::Linear,
            step_size: 1,
            resolve_ambiguous: true,
            dense_threshold: 1 << 32,
        }
    }
}

/// The static tables and corner/edge conventions bound to one marching
/// operation.
pub struct MarchingTables {
    nd: usize,
    n_edges: usize,
    corners: &'static [&'static [u8]],
    slice_pairs: fn() -> Vec<SlicePair>,
    geometry: GeometryTable,
    resolver: Option<&'static (dyn AmbiguityResolver + Sync)>,
}

/// A bound marching operation, ready to be called with a volume.
pub struct Marcher {
    tables: MarchingTables,
}

impl Marcher {
    /// Runs the full pipeline over `volume`, returning deduplicated
    /// vertices and the simplices that index into them.
    pub fn march(
        &self,
        volume: ArrayViewD<f64>,
        options: &MarchingOptions,
    ) -> Result<MarchingOutput, MarchingError> {
        if options.step_size == 0 {
            return Err(MarchingError::InvalidInput(
                "step_size must be at least 1".into(),
            ));
        }

        let strided = if options.step_size > 1 {
            volume
                .slice_each_axis(|ax| {
                    ndarray::Slice::from(0..ax.len as isize).step_by(options.step_size as isize)
                })
                .to_owned()
                .into_dyn()
        } else {
            volume.to_owned()
        };
        let strided_view = strided.view();

        assert_nd_array(&strided_view, self.tables.nd, 2)?;

        let mut zeroed: ArrayD<f64> = strided_view.to_owned();
        if options.level != 0.0 {
            zeroed.mapv_inplace(|v| v - options.level);
        }

        let volume_test: ArrayD<bool> = zeroed.mapv(|v| v >= 0.0);
        let sm = size_multiplier(zeroed.shape(), self.tables.n_edges as u64);

        let slice_pairs = (self.tables.slice_pairs)();
        let intersects = find_intersects(
            zeroed.view(),
            &volume_test,
            &slice_pairs,
            &sm,
            options.interpolation,
        )?;

        let mut types = crate::classify::classify(&volume_test, self.tables.corners)?;

        if options.resolve_ambiguous {
            if let Some(resolver) = self.tables.resolver {
                resolver.resolve(&mut types, zeroed.view());
            }
        }

        let geometry = look_up_geometry(&types, &self.tables.geometry, &sm)?;

        let use_dense = intersects
            .edge_ids
            .iter()
            .copied()
            .max()
            .unwrap_or(0)
            < options.dense_threshold;
        let simplices = if use_dense {
            remap_dense(&geometry, &intersects.edge_ids)?
        } else {
            remap_sparse(&geometry, &intersects.edge_ids)?
        };

        log::debug!(
            "march: {} vertices, {} simplices (dense remap: {})",
            intersects.vertices.nrows(),
            simplices.nrows(),
            use_dense
        );

        Ok(MarchingOutput {
            vertices: intersects.vertices,
            simplices,
        })
    }
}

fn square_geometry_table() -> GeometryTable {
    GeometryTable {
        rows: &squares::GEOMETRY_LOOKUP,
        columns: squares::COLUMNS,
        n_v: squares::N_V,
        edge_delta: &squares::EDGE_DELTA,
        edge_direction: &squares::EDGE_DIRECTION,
    }
}

static SQUARE_RESOLVER: SquareAmbiguityResolver = SquareAmbiguityResolver;

/// Marching squares: 2D, line-segment output, asymptotic-decider
/// ambiguity resolution enabled.
pub fn marching_squares() -> Marcher {
    Marcher {
        tables: MarchingTables {
            nd: 2,
            n_edges: 2,
            corners: &squares::CORNERS,
            slice_pairs: || SlicePair::axis_aligned(2),
            geometry: square_geometry_table(),
            resolver: Some(&SQUARE_RESOLVER),
        },
    }
}

fn triangles_slice_pairs(reversed: bool) -> Vec<SlicePair> {
    use crate::intersect::Step;
    let mut pairs = SlicePair::axis_aligned(2);
    let diagonal_steps = if reversed {
        vec![Step::Backward, Step::Forward]
    } else {
        vec![Step::Forward, Step::Forward]
    };
    pairs.push(SlicePair {
        direction: 2,
        steps: diagonal_steps,
    });
    pairs
}

/// Marching triangles, "/" diagonal split. No ambiguity resolution: every
/// cell is split into two triangles up front, so there is nothing to
/// disambiguate.
pub fn marching_triangles() -> Marcher {
    Marcher {
        tables: MarchingTables {
            nd: 2,
            n_edges: 3,
            corners: &triangles::CORNERS,
            slice_pairs: || triangles_slice_pairs(false),
            geometry: GeometryTable {
                rows: &triangles::GEOMETRY_LOOKUP_FORWARD,
                columns: triangles::COLUMNS,
                n_v: triangles::N_V,
                edge_delta: &triangles::EDGE_DELTA,
                edge_direction: &triangles::EDGE_DIRECTION,
            },
            resolver: None,
        },
    }
}

/// Marching triangles, "\" diagonal split.
pub fn marching_triangles_reversed() -> Marcher {
    Marcher {
        tables: MarchingTables {
            nd: 2,
            n_edges: 3,
            corners: &triangles::CORNERS,
            slice_pairs: || triangles_slice_pairs(true),
            geometry: GeometryTable {
                rows: &triangles::GEOMETRY_LOOKUP_REVERSED,
                columns: triangles::COLUMNS,
                n_v: triangles::N_V,
                edge_delta: &triangles::EDGE_DELTA,
                edge_direction: &triangles::EDGE_DIRECTION,
            },
            resolver: None,
        },
    }
}

/// Marching cubes (Lorensen & Cline): 3D, triangle output. No ambiguity
/// resolution is bound; the table's known cross-face inconsistency is
/// preserved as-is (see `tables::cubes`).
pub fn marching_cubes_lorensen() -> Marcher {
    Marcher {
        tables: MarchingTables {
            nd: 3,
            n_edges: 3,
            corners: &cubes::CORNERS,
            slice_pairs: || SlicePair::axis_aligned(3),
            geometry: GeometryTable {
                rows: &cubes::GEOMETRY_LOOKUP,
                columns: cubes::COLUMNS,
                n_v: cubes::N_V,
                edge_delta: &cubes::EDGE_DELTA,
                edge_direction: &cubes::EDGE_DIRECTION,
            },
            resolver: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn s1_single_segment() {
        let volume = arr2(&[[1.0, 1.0], [1.0, -1.0]]).into_dyn();
        let out = marching_squares()
            .march(volume.view(), &MarchingOptions::default())
            .unwrap();
        assert_eq!(out.vertex_count(), 2);
        assert_eq!(out.simplex_count(), 1);
    }

    #[test]
    fn s4_single_cube_corner() {
        let mut volume = ArrayD::<f64>::from_elem(ndarray::IxDyn(&[2, 2, 2]), -1.0);
        volume[[0, 0, 0]] = 1.0;
        let out = marching_cubes_lorensen()
            .march(volume.view(), &MarchingOptions::default())
            .unwrap();
        assert_eq!(out.vertex_count(), 3);
        assert_eq!(out.simplex_count(), 1);
    }

    #[test]
    fn step_size_subsamples_before_classification() {
        let volume = ArrayD::<f64>::from_shape_vec(
            ndarray::IxDyn(&[4, 4]),
            vec![
                1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -1.0,
            ],
        )
        .unwrap();
        let mut options = MarchingOptions::default();
        options.step_size = 3;
        let out = marching_squares().march(volume.view(), &options).unwrap();
        // strided volume is 2x2, sampling corners (0,0),(0,3),(3,0),(3,3):
        // only (3,3) is below the level -> single segment.
        assert_eq!(out.simplex_count(), 1);
    }

    #[test]
    fn level_shifts_the_threshold() {
        let volume = arr2(&[[2.0, 2.0], [2.0, 2.0]]).into_dyn();
        let mut options = MarchingOptions::default();
        options.level = 3.0;
        // every corner now reads -1 relative to level: no crossings.
        let out = marching_squares().march(volume.view(), &options).unwrap();
        assert_eq!(out.simplex_count(), 0);
    }

    #[test]
    fn linear_vertex_position_matches_offset_formula() {
        let volume = arr2(&[[1.0, -3.0], [1.0, 1.0]]).into_dyn();
        let out = marching_squares()
            .march(volume.view(), &MarchingOptions::default())
            .unwrap();
        // crossing along the top edge between (0,0)=1 and (0,1)=-3: t=1/4.
        let found = out
            .vertices
            .rows()
            .into_iter()
            .any(|r| (r[1] - 0.25).abs() < 1e-6);
        assert!(found);
    }
}
