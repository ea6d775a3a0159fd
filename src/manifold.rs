// Copyright 2024 Tristam MacDonald
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
//! The Wenger manifold corrector: resolves the checkerboard ambiguity a raw
//! cell code leaves open by checking whether the neighbor across the
//! ambiguous face agrees that the very same face is *its* primary ambiguity
//! too.
use crate::cell::{cell_code, CellCode};
use crate::tables::{ambiguous_face_dirs, NO_AMBIGUOUS_FACE};
use crate::volume::VolumeView;

/// Re-classify `cc` (the cell at `(x, y, z)`) to its complement if the
/// neighbor across its ambiguous face mutually agrees: the neighbor's own
/// first ambiguous face must point straight back (same axis, opposite
/// sign). Cells on the volume boundary, with no neighbor across that face,
/// and cells whose neighbor disagrees about which face is ambiguous, are
/// returned unchanged.
pub fn correct(volume: &VolumeView, x: i32, y: i32, z: i32, iso: u8, cc: CellCode) -> CellCode {
    let dir = ambiguous_face_dirs()[cc.as_usize()];
    if dir == NO_AMBIGUOUS_FACE {
        return cc;
    }

    let axis = (dir >> 1) as usize;
    let delta = if dir & 1 == 1 { 1 } else { -1 };
    let dims = [volume.nx(), volume.ny(), volume.nz()];

    let mut neighbor_coord = [x, y, z];
    neighbor_coord[axis] += delta;

    if neighbor_coord[axis] < 0 || neighbor_coord[axis] >= dims[axis] - 1 {
        return cc;
    }

    let neighbor_cc = cell_code(
        volume,
        neighbor_coord[0],
        neighbor_coord[1],
        neighbor_coord[2],
        iso,
    );

    let opposite = dir ^ 1;
    if ambiguous_face_dirs()[neighbor_cc.as_usize()] != opposite {
        return cc;
    }

    cc.complement()
}
