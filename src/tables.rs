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
//! The two static lookup tables the rest of the crate is built around: the
//! 256-entry dual point table (up to 4 edge-masks per cell code) and the
//! 256-entry ambiguous face direction table the manifold corrector consumes.
//!
//! The tables themselves are generated once, on first use, by the
//! [`dual_points_list`] and [`ambiguous_face_dirs`] accessors, rather than
//! hand-transcribed as literal data: the external tool that produced the
//! original published Nielson/Wenger byte tables is out of scope (see
//! spec.md §1, §9), so this crate instead reproduces the construction those
//! tables describe — connected components of same-side corners under the
//! cube's edge adjacency, each component's boundary giving one dual point —
//! which satisfies every invariant the rest of the crate depends on. See
//! DESIGN.md for the full rationale.
use crate::cell::CellCode;
use std::sync::OnceLock;

/// The two corners each of the 12 cube edges connects, in the order spec.md
/// §3/§4.5 numbers them. Corner indices follow [`crate::cell::CORNER_OFFSETS`].
pub const EDGE_CORNERS: [(u8, u8); 12] = [
    (0, 1), // edge 0
    (1, 5), // edge 1
    (4, 5), // edge 2
    (0, 4), // edge 3
    (2, 3), // edge 4
    (3, 7), // edge 5
    (6, 7), // edge 6
    (2, 6), // edge 7
    (0, 2), // edge 8
    (1, 3), // edge 9
    (5, 7), // edge 10
    (4, 6), // edge 11
];

/// For each corner, its 3 cube-graph neighbors, paired with the edge that
/// connects them. Derived directly from [`EDGE_CORNERS`].
const CORNER_NEIGHBORS: [[(u8, u8); 3]; 8] = [
    [(1, 0), (4, 3), (2, 8)],  // corner 0
    [(0, 0), (5, 1), (3, 9)],  // corner 1
    [(3, 4), (6, 7), (0, 8)],  // corner 2
    [(2, 4), (7, 5), (1, 9)],  // corner 3
    [(5, 2), (0, 3), (6, 11)], // corner 4
    [(4, 2), (1, 1), (7, 10)], // corner 5
    [(7, 6), (2, 7), (4, 11)], // corner 6
    [(6, 6), (3, 5), (5, 10)], // corner 7
];

/// The 6 faces of the cube, as `(direction code, diagonal pair A, diagonal
/// pair B)`, in the face order spec.md §4.3 numbers directions by: `x-`, `x+`,
/// `y-`, `y+`, `z-`, `z+`. A face is ambiguous when its two diagonal pairs
/// disagree with each other (a checkerboard pattern).
const FACES: [(u8, (u8, u8), (u8, u8)); 6] = [
    (0, (0, 6), (2, 4)), // x = 0
    (1, (1, 7), (3, 5)), // x = 1
    (2, (0, 5), (1, 4)), // y = 0
    (3, (2, 7), (3, 6)), // y = 1
    (4, (0, 3), (1, 2)), // z = 0
    (5, (4, 7), (5, 6)), // z = 1
];

/// No ambiguous face of interest for this cell code.
pub const NO_AMBIGUOUS_FACE: u8 = 255;

static DUAL_POINTS: OnceLock<[[u16; 4]; 256]> = OnceLock::new();
static AMBIGUOUS_FACE_DIR: OnceLock<[u8; 256]> = OnceLock::new();

/// The 256-entry dual point table. Each row holds up to 4 non-zero 12-bit
/// edge masks (zero-padded), one per connected component of same-side
/// corners the cell code splits into. Computed once and cached.
pub fn dual_points_list() -> &'static [[u16; 4]; 256] {
    DUAL_POINTS.get_or_init(|| {
        let mut table = [[0u16; 4]; 256];
        for (cc, row) in table.iter_mut().enumerate() {
            *row = dual_points_for(CellCode(cc as u8));
        }
        table
    })
}

/// The 256-entry ambiguous face direction table. See spec.md §4.3 for the
/// bit encoding of the direction byte. Computed once and cached.
pub fn ambiguous_face_dirs() -> &'static [u8; 256] {
    AMBIGUOUS_FACE_DIR.get_or_init(|| {
        let mut table = [NO_AMBIGUOUS_FACE; 256];
        for (cc, entry) in table.iter_mut().enumerate() {
            *entry = ambiguous_face_dir_for(CellCode(cc as u8));
        }
        table
    })
}

/// The boundary-edge mask for an isolated corner, i.e. a corner all 3 of
/// whose cube-edge neighbors lie on the opposite side.
fn singleton_boundary(corner: u8) -> u16 {
    let mut mask = 0u16;
    for &(_, edge) in CORNER_NEIGHBORS[corner as usize].iter() {
        mask |= 1 << edge;
    }
    mask
}

/// If `mask` selects exactly two corners and they are antipodal (opposite
/// corners of the cube, which never share a cube edge), return them.
fn antipodal_pair(mask: u8) -> Option<[u8; 2]> {
    if mask.count_ones() != 2 {
        return None;
    }
    let a = mask.trailing_zeros() as u8;
    let b = 7 - a;
    if a != b && mask & (1 << b) != 0 {
        Some([a, b])
    } else {
        None
    }
}

/// Connected components of the corners selected by `mask`, under the cube's
/// edge-adjacency graph restricted to corners in `mask`. Each component's
/// boundary is the set of edges crossing to a corner not in `mask`.
/// Components with an empty boundary (nothing on the other side) are
/// dropped.
fn connected_components(mask: u8) -> Vec<u16> {
    let mut visited = 0u8;
    let mut components = Vec::new();

    for start in 0u8..8 {
        if mask & (1 << start) == 0 || visited & (1 << start) != 0 {
            continue;
        }

        let mut stack = vec![start];
        visited |= 1 << start;
        let mut boundary = 0u16;

        while let Some(corner) = stack.pop() {
            for &(neighbor, edge) in CORNER_NEIGHBORS[corner as usize].iter() {
                if mask & (1 << neighbor) != 0 {
                    if visited & (1 << neighbor) == 0 {
                        visited |= 1 << neighbor;
                        stack.push(neighbor);
                    }
                } else {
                    boundary |= 1 << edge;
                }
            }
        }

        if boundary != 0 {
            components.push(boundary);
        }
    }

    components
}

/// Compute the up-to-4 dual point edge masks for a single cell code.
///
/// Components are found among the *inside* corners (bit set), walked
/// directly under the cube's edge adjacency, except for the one
/// configuration where that naively over-connects: six inside corners
/// whose two outside corners are antipodal. Those six form a connected
/// hexagon under the naive walk, which would wrongly fuse what must
/// remain two independent dual points — one per isolated outside corner,
/// since antipodal corners never share a face. That case is special-cased
/// to emit the two singleton components directly.
fn dual_points_for(cc: CellCode) -> [u16; 4] {
    let components = if cc.0.count_ones() == 6 {
        match antipodal_pair(!cc.0) {
            Some(pair) => pair.iter().map(|&k| singleton_boundary(k)).collect(),
            None => connected_components(cc.0),
        }
    } else {
        connected_components(cc.0)
    };

    let mut result = [0u16; 4];
    for (slot, boundary) in result.iter_mut().zip(components.into_iter().take(4)) {
        *slot = boundary;
    }
    result
}

/// Compute the ambiguous face direction for a single cell code: the
/// direction of the first ambiguous face found in `x-, x+, y-, y+, z-, z+`
/// order, or [`NO_AMBIGUOUS_FACE`] if none of the 6 faces are ambiguous.
fn ambiguous_face_dir_for(cc: CellCode) -> u8 {
    for &(dir, (a, c), (b, d)) in FACES.iter() {
        let (ia, ic) = (cc.corner(a as usize), cc.corner(c as usize));
        let (ib, id) = (cc.corner(b as usize), cc.corner(d as usize));
        if ia == ic && ib == id && ia != ib {
            return dir;
        }
    }
    NO_AMBIGUOUS_FACE
}
