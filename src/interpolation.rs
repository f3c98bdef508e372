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

//! Edge-crossing interpolation modes.

use crate::error::MarchingError;
use std::str::FromStr;

/// How the crossing offset along a flipped grid edge is computed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Interpolation {
    /// Crossing is always placed at the edge midpoint.
    Halfway,
    /// Crossing is placed by linear interpolation of the two endpoint
    /// values.
    Linear,
    /// Crossing is placed by cosine interpolation of the two endpoint
    /// values.
    Cosine,
}

impl Default for Interpolation {
    fn default() -> Self {
        Interpolation::Linear
    }
}

impl FromStr for Interpolation {
    type Err = MarchingError;

    /// Parses case-insensitively, matching `Marching.py`'s
    /// `interpolation = str(interpolation).upper()`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HALFWAY" => Ok(Interpolation::Halfway),
            "LINEAR" => Ok(Interpolation::Linear),
            "COSINE" => Ok(Interpolation::Cosine),
            other => Err(MarchingError::InvalidInput(format!(
                "interpolation must be one of HALFWAY, LINEAR, COSINE; got {:?}",
                other
            ))),
        }
    }
}

impl Interpolation {
    /// Computes the crossing offset `t` in `[0, 1]` along an edge whose
    /// endpoints have zero-referenced values `v_a` and `v_b` of opposite
    /// sign.
    pub fn offset(self, v_a: f64, v_b: f64) -> f64 {
        match self {
            Interpolation::Halfway => 0.5,
            Interpolation::Linear => v_a / (v_a - v_b),
            Interpolation::Cosine => ((v_b + v_a) / (v_b - v_a)).acos() / std::f64::consts::PI,
        }
    }
}
