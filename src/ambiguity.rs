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

//! Stage 3: disambiguate saddle cell types using the asymptotic decider.
//!
//! Grounded on the bespoke in-place `ambiguity_resolution` function in
//! `MarchingCuPy/MarchingSquares.py` (not the generic dict-driven
//! `resolve_ambiguous_types` helper in `ResolveAmbiguous.py`, which is
//! never called from `marching_factory` and is not reimplemented here).

use ndarray::{ArrayD, ArrayViewD};

/// Rewrites ambiguous saddle types in place using a face test on the
/// underlying (zero-referenced) volume.
pub trait AmbiguityResolver: Sync {
    fn resolve(&self, types: &mut ArrayD<u16>, volume: ArrayViewD<f64>);
}

/// The marching-squares asymptotic decider for types 5 and 10.
///
/// A type-5 cell (corners 0 and 2 above the level) has its diagonal split
/// resolved to type 16 when the face test says the two "above" corners are
/// connected; otherwise it is left as type 5. Type 10 resolves to 17 under
/// the same test. Grounded on
/// `SQUARE_AMBIGUITY_RESOLUTION = {5: 16, 10: 17}` and
/// `interpolate_face_values(volume, filt)` in
/// `MarchingCuPy/MarchingSquares.py`.
pub struct SquareAmbiguityResolver;

const RESOLUTIONS: [(u16, u16); 2] = [(5, 16), (10, 17)];

impl AmbiguityResolver for SquareAmbiguityResolver {
    fn resolve(&self, types: &mut ArrayD<u16>, volume: ArrayViewD<f64>) {
        debug_assert_eq!(types.ndim(), 2);
        debug_assert_eq!(volume.ndim(), 2);

        for (ambiguous, resolved) in RESOLUTIONS {
            let mut resolved_count = 0usize;
            for (idx, t) in types.indexed_iter_mut() {
                if *t != ambiguous {
                    continue;
                }
                let i = idx[0];
                let j = idx[1];
                let v00 = volume[[i, j]];
                let v11 = volume[[i + 1, j + 1]];
                let v01 = volume[[i, j + 1]];
                let v10 = volume[[i + 1, j]];
                if v00 * v11 < v01 * v10 {
                    *t = resolved;
                    resolved_count += 1;
                }
            }
            log::trace!(
                "ambiguity: {} of type {} resolved to {}",
                resolved_count,
                ambiguous,
                resolved
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, IxDyn};

    fn single_cell_types(t: u16) -> ArrayD<u16> {
        ArrayD::from_shape_vec(IxDyn(&[1, 1]), vec![t]).unwrap()
    }

    #[test]
    fn s2_type5_stays_unresolved() {
        // volume = [[1,-1],[-1,1]] -> v00*v11=1, v01*v10=1, 1<1 is false.
        let volume = arr2(&[[1.0, -1.0], [-1.0, 1.0]]).into_dyn();
        let mut types = single_cell_types(5);
        SquareAmbiguityResolver.resolve(&mut types, volume.view());
        assert_eq!(types[[0, 0]], 5);
    }

    #[test]
    fn s3a_type5_stays_unresolved_when_product_smaller() {
        // volume = [[2,-1],[-1,2]] -> 2*2=4, (-1)*(-1)=1, 4<1 false.
        let volume = arr2(&[[2.0, -1.0], [-1.0, 2.0]]).into_dyn();
        let mut types = single_cell_types(5);
        SquareAmbiguityResolver.resolve(&mut types, volume.view());
        assert_eq!(types[[0, 0]], 5);
    }

    #[test]
    fn s3b_type5_resolves_to_16() {
        // volume = [[0.5,-1],[-1,0.5]] -> 0.25 < 1 true.
        let volume = arr2(&[[0.5, -1.0], [-1.0, 0.5]]).into_dyn();
        let mut types = single_cell_types(5);
        SquareAmbiguityResolver.resolve(&mut types, volume.view());
        assert_eq!(types[[0, 0]], 16);
    }

    #[test]
    fn type10_resolves_to_17_under_same_test() {
        let volume = arr2(&[[0.5, -1.0], [-1.0, 0.5]]).into_dyn();
        let mut types = single_cell_types(10);
        SquareAmbiguityResolver.resolve(&mut types, volume.view());
        assert_eq!(types[[0, 0]], 17);
    }

    #[test]
    fn other_types_are_untouched() {
        let volume = arr2(&[[0.5, -1.0], [-1.0, 0.5]]).into_dyn();
        let mut types = single_cell_types(3);
        SquareAmbiguityResolver.resolve(&mut types, volume.view());
        assert_eq!(types[[0, 0]], 3);
    }
}
