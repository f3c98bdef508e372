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

//! Stage 2: classify each cell by which of its corners lie above the level.
//!
//! Grounded on `MarchingCuPy/VolumeTypes.py` / `MarchingNumPy/VolumeTypes.py`:
//! `types[volume_test[slice_i]] |= 1 << i` applied once per corner, in bulk
//! over the whole grid rather than per cell.

use crate::error::MarchingError;
use ndarray::{ArrayD, IxDyn, Slice};

/// Bulk-classifies every cell of `volume_test` against `corners`, a table
/// whose `k`-th entry is the 0/1 offset of corner `k` along each axis (0 =
/// low side of the cell, 1 = high side). Bit `k` of the result is set
/// wherever that corner's `volume_test` value is true.
pub fn classify(
    volume_test: &ArrayD<bool>,
    corners: &[&[u8]],
) -> Result<ArrayD<u16>, MarchingError> {
    let max_type = (1u32 << corners.len()) - 1;
    if max_type > u16::MAX as u32 {
        return Err(MarchingError::TypeTooNarrow {
            max_type,
            max_representable: u16::MAX as u32,
        });
    }

    let nd = volume_test.ndim();
    let cell_shape: Vec<usize> = volume_test.shape().iter().map(|&n| n - 1).collect();
    let mut types = ArrayD::<u16>::zeros(IxDyn(&cell_shape));

    for (bit, corner) in corners.iter().enumerate() {
        if corner.len() != nd {
            return Err(MarchingError::InvalidInput(format!(
                "corner {} has {} components, expected {}",
                bit,
                corner.len(),
                nd
            )));
        }
        let slice = volume_test.slice_each_axis(|ax| {
            let len = ax.len as isize;
            if corner[ax.axis.index()] == 0 {
                Slice::from(0..len - 1)
            } else {
                Slice::from(1..len)
            }
        });
        let flag = 1u16 << bit;
        ndarray::Zip::from(&mut types)
            .and(&slice)
            .for_each(|t, &v| {
                if v {
                    *t |= flag;
                }
            });
    }

    log::debug!(
        "classify: {} cells over {} corners",
        types.len(),
        corners.len()
    );
    Ok(types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    const SQUARE_CORNERS: [&[u8]; 4] = [&[0, 0], &[1, 0], &[1, 1], &[0, 1]];

    #[test]
    fn s1_single_segment_square() {
        // S1: volume = [[1,1],[1,-1]] -> only corner (1,1) (bit 2) is below,
        // so the (0,0) cell has bits 0,1,3 set (value 1+2+8=11) i.e type 11...
        // recompute: volume_test = [[T,T],[T,F]], corner bits:
        // (0,0)->T bit0, (1,0)->T bit1, (1,1)->F, (0,1)->T bit3 => type = 1+2+8 = 11
        let volume = arr2(&[[1.0, 1.0], [1.0, -1.0]]);
        let test = volume.mapv(|v| v >= 0.0).into_dyn();
        let types = classify(&test, &SQUARE_CORNERS).unwrap();
        assert_eq!(types[[0, 0]], 11);
    }

    #[test]
    fn rejects_too_many_corners_for_u16() {
        let test = ArrayD::<bool>::from_elem(IxDyn(&[2, 2]), true);
        let corners: Vec<&[u8]> = (0..17).map(|_| &[0u8, 0u8][..]).collect();
        let err = classify(&test, &corners).unwrap_err();
        assert!(matches!(err, MarchingError::TypeTooNarrow { .. }));
    }

    #[test]
    fn all_above_level_gives_max_type() {
        let test = ArrayD::<bool>::from_elem(IxDyn(&[3, 3]), true);
        let types = classify(&test, &SQUARE_CORNERS).unwrap();
        assert!(types.iter().all(|&t| t == 15));
    }

    #[test]
    fn all_below_level_gives_zero_type() {
        let test = ArrayD::<bool>::from_elem(IxDyn(&[3, 3]), false);
        let types = classify(&test, &SQUARE_CORNERS).unwrap();
        assert!(types.iter().all(|&t| t == 0));
    }
}
