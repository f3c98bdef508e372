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

//! Volume validation and the edge-id stride table.
//!
//! Grounded on `MarchingCuPy/Checking.py` (`assert_nd_array`) and the
//! `size_multiplier` construction in `MarchingNumPy/Marching.py`.

use crate::error::MarchingError;
use ndarray::ArrayViewD;

/// Checks that `volume` has exactly `nd` dimensions and at least `min_size`
/// samples along every axis.
pub fn assert_nd_array(
    volume: &ArrayViewD<f64>,
    nd: usize,
    min_size: usize,
) -> Result<(), MarchingError> {
    if volume.ndim() != nd {
        return Err(MarchingError::InvalidInput(format!(
            "expected a {}-dimensional volume, got {} dimensions",
            nd,
            volume.ndim()
        )));
    }
    for (axis, &len) in volume.shape().iter().enumerate() {
        if len < min_size {
            return Err(MarchingError::InvalidInput(format!(
                "axis {} has {} samples, fewer than the required minimum of {}",
                axis, len, min_size
            )));
        }
    }
    Ok(())
}

/// Computes the per-axis `SizeMultiplier`: row-major strides scaled by
/// `n_edges`, so that an edge direction occupies the low bits of an
/// `EdgeId`.
///
/// `size_multiplier[k] = n_edges * product(shape[k+1..])`, i.e. the last
/// axis's multiplier is exactly `n_edges`, matching
/// `MarchingNumPy/Marching.py`'s
/// `size_multiplier[:-1] = shape[::-1].cumprod()[::-1][1:]; size_multiplier *= n_edges`.
pub fn size_multiplier(shape: &[usize], n_edges: u64) -> Vec<u64> {
    let nd = shape.len();
    let mut multiplier = vec![0u64; nd];
    if nd == 0 {
        return multiplier;
    }
    multiplier[nd - 1] = n_edges;
    for axis in (0..nd - 1).rev() {
        multiplier[axis] = multiplier[axis + 1] * shape[axis + 1] as u64;
    }
    multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{ArrayD, IxDyn};

    #[test]
    fn rejects_wrong_rank() {
        let volume = ArrayD::<f64>::zeros(IxDyn(&[4, 4, 4]));
        let err = assert_nd_array(&volume.view(), 2, 2).unwrap_err();
        assert!(matches!(err, MarchingError::InvalidInput(_)));
    }

    #[test]
    fn rejects_too_small_axis() {
        let volume = ArrayD::<f64>::zeros(IxDyn(&[1, 4]));
        let err = assert_nd_array(&volume.view(), 2, 2).unwrap_err();
        assert!(matches!(err, MarchingError::InvalidInput(_)));
    }

    #[test]
    fn accepts_valid_shape() {
        let volume = ArrayD::<f64>::zeros(IxDyn(&[3, 5]));
        assert!(assert_nd_array(&volume.view(), 2, 2).is_ok());
    }

    #[test]
    fn size_multiplier_2d_matches_reference() {
        // shape (Ny=3, Nx=4), n_edges=2 -> multiplier = [n_edges*Nx, n_edges] = [8, 2]
        let sm = size_multiplier(&[3, 4], 2);
        assert_eq!(sm, vec![8, 2]);
    }

    #[test]
    fn size_multiplier_3d_matches_reference() {
        // shape (Nz=2, Ny=3, Nx=4), n_edges=3
        // last axis multiplier = 3
        // middle axis multiplier = 3 * 4 = 12
        // first axis multiplier = 12 * 3 = 36
        let sm = size_multiplier(&[2, 3, 4], 3);
        assert_eq!(sm, vec![36, 12, 3]);
    }
}
