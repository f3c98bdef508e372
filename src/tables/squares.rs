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

//! 2D marching-squares tables.
//!
//! Corners are numbered bottom-left, bottom-right, top-right, top-left
//! (bits 0-3). Edges are numbered Bottom(0), Right(1), Top(2), Left(3).
//! Types 16 and 17 are the asymptotic-decider-resolved variants of the
//! saddle types 5 and 10, grounded on `MarchingCuPy/MarchingSquares.py`'s
//! `GEOMETRY_LOOKUP`.

pub const CORNERS: [&[u8]; 4] = [&[0, 0], &[1, 0], &[1, 1], &[0, 1]];

pub const EDGE_DELTA: [&[u8]; 4] = [&[0, 0], &[1, 0], &[0, 1], &[0, 0]];
pub const EDGE_DIRECTION: [u8; 4] = [0, 1, 0, 1];

const N: i16 = -1;

/// 18 rows (16 base cell types plus the two disambiguated saddle variants)
/// of 2 line segments (4 columns) each.
#[rustfmt::skip]
pub const GEOMETRY_LOOKUP: [i16; 18 * 4] = [
    N, N, N, N, // 0
    0, 3, N, N, // 1
    1, 0, N, N, // 2
    1, 3, N, N, // 3
    2, 1, N, N, // 4
    0, 3, 2, 1, // 5 (ambiguous)
    2, 0, N, N, // 6
    2, 3, N, N, // 7
    3, 2, N, N, // 8
    0, 2, N, N, // 9
    1, 0, 3, 2, // 10 (ambiguous)
    1, 2, N, N, // 11
    3, 1, N, N, // 12
    0, 1, N, N, // 13
    3, 0, N, N, // 14
    N, N, N, N, // 15
    2, 3, 0, 1, // 16 (resolved from 5)
    3, 0, 1, 2, // 17 (resolved from 10)
];

pub const N_V: usize = 2;
pub const COLUMNS: usize = 4;
