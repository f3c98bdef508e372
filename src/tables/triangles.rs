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

//! 2D marching-triangles tables: each cell is split along one diagonal into
//! two triangles, each independently contoured.
//!
//! Corners and axis-aligned edges follow [`crate::tables::squares`]; a
//! fifth edge (Diagonal, direction 2) crosses the cell along whichever
//! diagonal the orientation picks. Grounded on
//! `MarchingNumPy/MarchingTriangles.py`'s `GEOMETRY_LOOKUP` construction
//! (`GEOMETRY_LOOKUP[:, :2] = TOP; GEOMETRY_LOOKUP[:, 2:] = BOTTOM`), with
//! edge-ids re-derived per sub-triangle instead of carried over by table
//! lookup, since the per-orientation diagonal direction differs.

pub const CORNERS: [&[u8]; 4] = [&[0, 0], &[1, 0], &[1, 1], &[0, 1]];

pub const EDGE_DELTA: [&[u8]; 5] = [&[0, 0], &[1, 0], &[0, 1], &[0, 0], &[0, 0]];
pub const EDGE_DIRECTION: [u8; 5] = [0, 1, 0, 1, 2];

pub const N_V: usize = 2;
pub const COLUMNS: usize = 4;

const N: i16 = -1;

/// The "/" split: diagonal runs bottom-left to top-right.
#[rustfmt::skip]
pub const GEOMETRY_LOOKUP_FORWARD: [i16; 16 * 4] = [
    N, N, N, N, // 0
    4, 3, 0, 4, // 1
    N, N, 1, 0, // 2
    4, 3, 1, 4, // 3
    2, 4, 4, 1, // 4
    2, 3, 0, 1, // 5
    2, 4, 4, 0, // 6
    2, 3, N, N, // 7
    3, 2, N, N, // 8
    4, 2, 0, 4, // 9
    3, 2, 1, 0, // 10
    4, 2, 1, 4, // 11
    3, 4, 4, 1, // 12
    N, N, 0, 1, // 13
    3, 4, 4, 0, // 14
    N, N, N, N, // 15
];

/// The "\" split: diagonal runs bottom-right to top-left.
#[rustfmt::skip]
pub const GEOMETRY_LOOKUP_REVERSED: [i16; 16 * 4] = [
    N, N, N, N, // 0
    N, N, 0, 3, // 1
    1, 4, 4, 0, // 2
    1, 4, 4, 3, // 3
    2, 1, N, N, // 4
    2, 1, 0, 3, // 5
    2, 4, 4, 0, // 6
    2, 4, 4, 3, // 7
    4, 2, 3, 4, // 8
    4, 2, 0, 4, // 9
    1, 2, 3, 0, // 10
    1, 2, N, N, // 11
    4, 1, 3, 4, // 12
    4, 1, 0, 4, // 13
    N, N, 3, 0, // 14
    N, N, N, N, // 15
];
