// Copyright 2021 Tristam MacDonald
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

//! Samples a torus distance field and marches it, printing vertex and
//! simplex counts. Run with `RUST_LOG=debug` to see per-stage tracing.

use marching::factory::{marching_cubes_lorensen, MarchingOptions};
use ndarray::{ArrayD, IxDyn};

fn main() {
    env_logger::init();

    let n = 48;
    let major = 0.25;
    let minor = 0.1;
    let volume = ArrayD::from_shape_fn(IxDyn(&[n, n, n]), |idx| {
        let to_unit = |i: usize| (i as f64 / (n - 1) as f64) * 2.0 - 1.0;
        let (x, y, z) = (to_unit(idx[0]), to_unit(idx[1]), to_unit(idx[2]));
        let q = (x * x + y * y).sqrt() - major;
        (q * q + z * z).sqrt() - minor
    });

    let output = marching_cubes_lorensen()
        .march(volume.view(), &MarchingOptions::default())
        .expect("torus field should march cleanly");

    println!(
        "{} vertices, {} triangles",
        output.vertex_count(),
        output.simplex_count()
    );
}
