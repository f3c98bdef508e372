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

//! Stage 1: locate grid edges whose endpoints straddle the iso-level.
//!
//! Grounded on `MarchingCuPy/FindIntersects.py`'s `find_intersects`. The
//! source computes edge-ids from the *local* index of a pair of
//! overlapping slices, a scheme that is only correct when every axis of
//! every slice-pair has its "from" view start at the canonical low corner
//! of the edge it tests. We make that requirement an explicit per-axis
//! [`Step`] instead of inferring it from slice-start arithmetic, which lets
//! the same code serve axis-aligned edges (squares, cubes) and the
//! diagonal edges used by `marching_triangles` without reproducing the
//! sign-losing `vector_from_slices(..., absolute=True)` interpolation bug
//! the diagonal case hits in the CuPy source.

use crate::error::MarchingError;
use crate::interpolation::Interpolation;
use ndarray::{Array2, ArrayD, ArrayViewD, Slice};

/// How a single axis moves across a slice-pair's edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    /// This axis does not move; both views sample the same coordinate.
    Fixed,
    /// This axis increases by one from the "from" view to the "to" view.
    Forward,
    /// This axis decreases by one from the "from" view to the "to" view.
    Backward,
}

/// One axis (or diagonal) direction that [`find_intersects`] scans.
///
/// `direction` must match the `EdgeDirection` values used by the bound
/// [`crate::geometry::GeometryTable`] so that edge-ids agree between the
/// two stages.
pub struct SlicePair {
    pub direction: usize,
    pub steps: Vec<Step>,
}

impl SlicePair {
    /// The `nD` axis-aligned slice-pairs shared by every dimension: axis
    /// `k` steps forward while every other axis stays fixed, with
    /// `direction == k`. Grounded on `MarchingNumPy/MarchingSquares.py`'s
    /// `INTERSECT_SLICE_INDEXES` and `MarchingCuPy/MarchingSquares.py`'s
    /// 3-axis analogue used for cubes.
    pub fn axis_aligned(nd: usize) -> Vec<SlicePair> {
        (0..nd)
            .map(|axis| SlicePair {
                direction: axis,
                steps: (0..nd)
                    .map(|k| if k == axis { Step::Forward } else { Step::Fixed })
                    .collect(),
            })
            .collect()
    }
}

fn slice_from<'a>(mut view: ArrayViewD<'a, f64>, steps: &[Step], from: bool) -> ArrayViewD<'a, f64> {
    view.slice_each_axis_inplace(|ax| {
        let len = ax.len as isize;
        match (steps[ax.axis.index()], from) {
            (Step::Fixed, _) => Slice::from(0..len),
            (Step::Forward, true) => Slice::from(0..len - 1),
            (Step::Forward, false) => Slice::from(1..len),
            (Step::Backward, true) => Slice::from(1..len),
            (Step::Backward, false) => Slice::from(0..len - 1),
        }
    });
    view
}

fn slice_bool_from<'a>(
    view: &'a ArrayD<bool>,
    steps: &[Step],
    from: bool,
) -> ndarray::ArrayViewD<'a, bool> {
    view.slice_each_axis(|ax| {
        let len = ax.len as isize;
        match (steps[ax.axis.index()], from) {
            (Step::Fixed, _) => Slice::from(0..len),
            (Step::Forward, true) => Slice::from(0..len - 1),
            (Step::Forward, false) => Slice::from(1..len),
            (Step::Backward, true) => Slice::from(1..len),
            (Step::Backward, false) => Slice::from(0..len - 1),
        }
    })
}

/// Output of [`find_intersects`]: parallel vertex coordinates and edge-ids.
#[derive(Debug)]
pub struct IntersectOutput {
    pub vertices: Array2<f32>,
    pub edge_ids: Vec<u64>,
}

/// Finds every grid edge along the given `slice_pairs` whose endpoints
/// straddle the (already zero-referenced) iso-level, interpolates the
/// crossing point, and assigns each crossing a unique edge-id.
///
/// `volume` and `volume_test` must have matching shape and rank; `volume`
/// is assumed already zero-referenced against the level.
pub fn find_intersects(
    volume: ArrayViewD<f64>,
    volume_test: &ArrayD<bool>,
    slice_pairs: &[SlicePair],
    size_multiplier: &[u64],
    interpolation: Interpolation,
) -> Result<IntersectOutput, MarchingError> {
    if volume.len() == 0 {
        return Err(MarchingError::InvalidInput(
            "there must be at least one value in each supplied dimension".into(),
        ));
    }
    if volume_test.shape() != volume.shape() {
        return Err(MarchingError::InvalidInput(
            "volume_test shape must match volume shape".into(),
        ));
    }

    let nd = volume.ndim();
    let mut vertices = Vec::new();
    let mut edge_ids = Vec::new();

    for pair in slice_pairs {
        if pair.steps.len() != nd {
            return Err(MarchingError::InvalidInput(format!(
                "slice-pair step count {} does not match volume rank {}",
                pair.steps.len(),
                nd
            )));
        }

        let test_from = slice_bool_from(volume_test, &pair.steps, true);
        let test_to = slice_bool_from(volume_test, &pair.steps, false);
        let value_from = slice_from(volume.view(), &pair.steps, true);
        let value_to = slice_from(volume.view(), &pair.steps, false);

        let mut count = 0usize;
        for ((idx, &a), &b) in test_from.indexed_iter().zip(test_to.iter()) {
            if a == b {
                continue;
            }
            count += 1;

            let v_a = value_from[idx.clone()];
            let v_b = value_to[idx.clone()];
            let t = match interpolation {
                Interpolation::Halfway => 0.5,
                _ => interpolation.offset(v_a, v_b),
            };

            let mut edge_id: u64 = pair.direction as u64;
            let mut coord = vec![0f32; nd];
            for axis in 0..nd {
                let local = idx[axis] as u64;
                edge_id += local * size_multiplier[axis];
                coord[axis] = match pair.steps[axis] {
                    Step::Fixed => local as f32,
                    Step::Forward => local as f32 + t as f32,
                    Step::Backward => local as f32 + 1.0 - t as f32,
                };
            }
            vertices.extend_from_slice(&coord);
            edge_ids.push(edge_id);
        }
        log::trace!(
            "intersect: direction {} found {} crossings",
            pair.direction,
            count
        );
    }

    let n = edge_ids.len();
    let vertices = Array2::from_shape_vec((n, nd), vertices)
        .expect("vertex buffer length must be n * nd by construction");
    log::debug!("intersect: {} vertices across {} directions", n, slice_pairs.len());
    Ok(IntersectOutput { vertices, edge_ids })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, IxDyn};

    fn test_array(volume: &ndarray::Array2<f64>) -> ArrayD<bool> {
        volume.mapv(|v| v >= 0.0).into_dyn()
    }

    #[test]
    fn s1_single_segment_square() {
        // S1: volume = [[1,1],[1,-1]], level 0, LINEAR.
        let volume = arr2(&[[1.0, 1.0], [1.0, -1.0]]);
        let test = test_array(&volume);
        let volume_dyn = volume.clone().into_dyn();
        let pairs = SlicePair::axis_aligned(2);
        let sm = crate::grid::size_multiplier(volume.shape(), 2);
        let out = find_intersects(volume_dyn.view(), &test, &pairs, &sm, Interpolation::Linear)
            .unwrap();
        assert_eq!(out.vertices.nrows(), 2);
    }

    #[test]
    fn uniform_volume_has_no_crossings() {
        let volume = ArrayD::<f64>::from_elem(IxDyn(&[3, 3]), 1.0);
        let test = test_array(&volume.clone().into_dimensionality().unwrap());
        let pairs = SlicePair::axis_aligned(2);
        let sm = crate::grid::size_multiplier(volume.shape(), 2);
        let out =
            find_intersects(volume.view(), &test, &pairs, &sm, Interpolation::Linear).unwrap();
        assert_eq!(out.vertices.nrows(), 0);
        assert!(out.edge_ids.is_empty());
    }

    #[test]
    fn rejects_empty_volume() {
        let volume = ArrayD::<f64>::zeros(IxDyn(&[0, 3]));
        let test = volume.mapv(|v| v >= 0.0);
        let pairs = SlicePair::axis_aligned(2);
        let sm = crate::grid::size_multiplier(volume.shape(), 2);
        let err =
            find_intersects(volume.view(), &test, &pairs, &sm, Interpolation::Linear).unwrap_err();
        assert!(matches!(err, MarchingError::InvalidInput(_)));
    }
}
