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

//! Manifold dual marching cubes extraction of quad meshes from discretely
//! sampled `u8` volumes.
//!
//! The entry point is [`build`], or [`DualMarchingCubes`] when extracting
//! from more than one volume and the vertex cache's allocation is worth
//! reusing across calls.

/// Cell classification: reading a cell's 8 corners against an iso value.
pub mod cell;
/// Dual point resolution: mapping a cell's edges to a shared dual point.
pub mod dual_point;
/// The error type returned by [`build`].
pub mod error;
/// Small 3D vector math, kept in-house to avoid pulling in a geometry crate
/// for 3 component-wise operators.
pub mod math;
/// The output mesh types.
pub mod mesh;
/// A read-only view over a `u8` sample grid.
pub mod volume;

mod emitter;
mod manifold;
mod tables;
mod vertex_cache;

pub use error::Error;
pub use mesh::{Quad, Vertex};

use vertex_cache::VertexCache;
use volume::VolumeView;

/// A reusable dual marching cubes extractor.
///
/// Holds the vertex deduplication cache between calls; reuse one instance
/// across multiple [`build`](DualMarchingCubes::build) calls (e.g. frames of
/// an animated volume) to amortize its backing allocation. The cache itself
/// is always cleared at the start of a call, so results never depend on
/// extraction history.
#[derive(Default)]
pub struct DualMarchingCubes {
    cache: VertexCache,
}

impl DualMarchingCubes {
    pub fn new() -> Self {
        Self {
            cache: VertexCache::new(),
        }
    }

    /// Extract a quad mesh from `volume`, a row-major `nx * ny * nz` grid of
    /// `u8` samples, at the given `iso` threshold (`sample >= iso` is
    /// "inside").
    ///
    /// `out_vertices` and `out_quads` are cleared and then filled with the
    /// result. When `manifold` is set, ambiguous cell configurations are
    /// resolved against their neighbors to keep the output a closed
    /// 2-manifold; when `soup` is set, every quad corner gets its own
    /// vertex instead of sharing one per dual point.
    ///
    /// Returns [`Error::InvalidInput`] if `volume.len() != nx * ny * nz`
    /// (including the case where that product overflows `i32`). Any
    /// dimension `<= 0` yields an empty mesh rather than an error.
    pub fn build(
        &mut self,
        volume: &[u8],
        nx: i32,
        ny: i32,
        nz: i32,
        iso: u8,
        manifold: bool,
        soup: bool,
        out_vertices: &mut Vec<Vertex>,
        out_quads: &mut Vec<Quad>,
    ) -> Result<(), Error> {
        out_vertices.clear();
        out_quads.clear();
        self.cache.clear();

        if nx <= 0 || ny <= 0 || nz <= 0 {
            return Ok(());
        }

        let expected = (nx as i64) * (ny as i64) * (nz as i64);
        if expected > i32::MAX as i64 || expected as usize != volume.len() {
            return Err(Error::InvalidInput {
                nx,
                ny,
                nz,
                volume_len: volume.len(),
            });
        }

        let view = VolumeView::new(volume, nx, ny, nz);
        emitter::emit(
            &view,
            iso,
            manifold,
            soup,
            &mut self.cache,
            out_vertices,
            out_quads,
        );
        Ok(())
    }
}

/// Extract a quad mesh from a single volume. Equivalent to constructing a
/// fresh [`DualMarchingCubes`] and calling
/// [`build`](DualMarchingCubes::build) on it; prefer the struct form when
/// extracting repeatedly.
#[allow(clippy::too_many_arguments)]
pub fn build(
    volume: &[u8],
    nx: i32,
    ny: i32,
    nz: i32,
    iso: u8,
    manifold: bool,
    soup: bool,
    out_vertices: &mut Vec<Vertex>,
    out_quads: &mut Vec<Quad>,
) -> Result<(), Error> {
    DualMarchingCubes::new().build(
        volume,
        nx,
        ny,
        nz,
        iso,
        manifold,
        soup,
        out_vertices,
        out_quads,
    )
}
