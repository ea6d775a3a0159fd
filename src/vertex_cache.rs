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
use std::collections::HashMap;

use crate::dual_point::DualPointCode;
use crate::mesh::Vertex;

/// Deduplicates dual point vertices across the cells that share them, so
/// that "shared" mesh emission (as opposed to per-quad "soup" emission)
/// produces one vertex per distinct dual point instead of one per quad
/// corner.
///
/// Keyed by `(linear cell id, dual point code)`: two quads referencing the
/// same cell and the same point code always share a vertex, regardless of
/// which of the cell's edges led them there.
#[derive(Default)]
pub struct VertexCache {
    index: HashMap<(i32, u16), u32>,
}

impl VertexCache {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
        }
    }

    /// Drop every cached vertex. Called at the start of every
    /// [`crate::DualMarchingCubes::build`] so that indices never leak
    /// between extractions.
    pub fn clear(&mut self) {
        self.index.clear();
    }

    /// Look up the vertex for `(cell, code)`, inserting it via `compute` (and
    /// pushing it to `vertices`) on first use.
    pub fn get_or_insert(
        &mut self,
        cell: i32,
        code: DualPointCode,
        vertices: &mut Vec<Vertex>,
        compute: impl FnOnce() -> Vertex,
    ) -> u32 {
        *self.index.entry((cell, code.0)).or_insert_with(|| {
            let index = vertices.len() as u32;
            vertices.push(compute());
            index
        })
    }
}
