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
use crate::cell::{CellCode, CORNER_OFFSETS};
use crate::math::Vec3;
use crate::tables::{dual_points_list, EDGE_CORNERS};
use crate::volume::VolumeView;

/// A 12-bit mask identifying which of a cell's edges feed one of its dual
/// points. Two different edges of the same cell resolve to the same
/// `DualPointCode` whenever they belong to the same connected component, so
/// quads sharing that component end up referencing the same vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DualPointCode(pub u16);

/// Find the dual point of `cc` that `edge` belongs to.
///
/// Looks up the row for `cc` in the dual point table and returns the first
/// slot whose mask contains `edge`. Every edge that is actually queried by
/// the emitter is a boundary edge of some component of `cc`, so a match
/// always exists; if none is found (a cell code with no sign change across
/// that edge), the all-zero code is returned, which `position` treats as "no
/// contribution" and the emitter never dereferences into a vertex.
pub fn resolve(cc: CellCode, edge: usize) -> DualPointCode {
    let row = dual_points_list()[cc.as_usize()];
    let bit = 1u16 << edge;
    for &slot in row.iter() {
        if slot != 0 && slot & bit != 0 {
            return DualPointCode(slot);
        }
    }
    DualPointCode(0)
}

/// Compute the world-space position of a dual point: the average of the
/// iso-crossing position along each edge in `code`, offset by the cell's low
/// corner `(x, y, z)`.
pub fn position(
    volume: &VolumeView,
    x: i32,
    y: i32,
    z: i32,
    iso: u8,
    code: DualPointCode,
) -> Vec3 {
    let mut sum = Vec3::zero();
    let mut count = 0.0f32;

    for edge in 0..12 {
        if code.0 & (1 << edge) == 0 {
            continue;
        }
        let (a, b) = EDGE_CORNERS[edge];
        let (adx, ady, adz) = CORNER_OFFSETS[a as usize];
        let (bdx, bdy, bdz) = CORNER_OFFSETS[b as usize];
        let va = volume.sample(x + adx, y + ady, z + adz) as f32;
        let vb = volume.sample(x + bdx, y + bdy, z + bdz) as f32;
        let t = (iso as f32 - va) / (vb - va);

        let a_local = Vec3::new(adx as f32, ady as f32, adz as f32);
        let b_local = Vec3::new(bdx as f32, bdy as f32, bdz as f32);
        sum += a_local + (b_local - a_local) * t;
        count += 1.0;
    }

    if count == 0.0 {
        return Vec3::new(x as f32, y as f32, z as f32);
    }

    Vec3::new(x as f32, y as f32, z as f32) + sum / count
}
