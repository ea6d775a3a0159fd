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
//! The quad emitter: sweeps every interior grid edge, and for each one that
//! crosses the iso-surface, gathers the dual point of the 4 cells that
//! touch it into a single quad.
use crate::cell::{cell_code, CellCode};
use crate::dual_point::{self, DualPointCode};
use crate::manifold;
use crate::mesh::{Quad, Vertex};
use crate::vertex_cache::VertexCache;
use crate::volume::VolumeView;

/// Sweep every interior grid edge and emit one quad per iso-crossing.
///
/// An edge along `axis` at grid point `(x, y, z)` is only tested once the
/// other two coordinates are `> 0`, since all 4 cells that would touch it
/// need to exist; the two coordinates along `axis` (`x` itself for an
/// X-edge) only need `< dims[axis] - 2` so that the edge's far endpoint and
/// every touching cell stay in bounds.
pub fn emit(
    volume: &VolumeView,
    iso: u8,
    manifold_correction: bool,
    soup: bool,
    cache: &mut VertexCache,
    vertices: &mut Vec<Vertex>,
    quads: &mut Vec<Quad>,
) {
    let nx = volume.nx();
    let ny = volume.ny();
    let nz = volume.nz();

    for z in 0..nz - 2 {
        for y in 0..ny - 2 {
            for x in 0..nx - 2 {
                if y > 0 && z > 0 {
                    test_edge(
                        volume,
                        iso,
                        manifold_correction,
                        soup,
                        cache,
                        vertices,
                        quads,
                        0,
                        [x, y, z],
                    );
                }
                if x > 0 && z > 0 {
                    test_edge(
                        volume,
                        iso,
                        manifold_correction,
                        soup,
                        cache,
                        vertices,
                        quads,
                        1,
                        [x, y, z],
                    );
                }
                if x > 0 && y > 0 {
                    test_edge(
                        volume,
                        iso,
                        manifold_correction,
                        soup,
                        cache,
                        vertices,
                        quads,
                        2,
                        [x, y, z],
                    );
                }
            }
        }
    }
}

/// The 4 cells touching a grid edge along each axis, as `(dx, dy, dz,
/// edge)` offsets from the edge's near endpoint `(x, y, z)` plus the edge
/// of that cell the dual point is resolved from — the literal `i0..i3`
/// listing spec.md §4.7 gives per axis.
const X_CELLS: [(i32, i32, i32, usize); 4] = [
    (0, 0, 0, 0),
    (0, 0, -1, 2),
    (0, -1, -1, 6),
    (0, -1, 0, 4),
];
const Y_CELLS: [(i32, i32, i32, usize); 4] = [
    (0, 0, 0, 8),
    (0, 0, -1, 11),
    (-1, 0, -1, 10),
    (-1, 0, 0, 9),
];
const Z_CELLS: [(i32, i32, i32, usize); 4] = [
    (0, 0, 0, 3),
    (-1, 0, 0, 1),
    (-1, -1, 0, 5),
    (0, -1, 0, 7),
];

/// Whether the literal `i0..i3` order above *is* the `entering` winding
/// for that axis (X-edges) or the `exiting` winding (Y/Z-edges) — spec.md
/// §4.7 calls out this swap explicitly ("note the swapped convention
/// relative to X-edges").
const FORWARD_IS_ENTERING: [bool; 3] = [true, false, false];

#[allow(clippy::too_many_arguments)]
fn test_edge(
    volume: &VolumeView,
    iso: u8,
    manifold_correction: bool,
    soup: bool,
    cache: &mut VertexCache,
    vertices: &mut Vec<Vertex>,
    quads: &mut Vec<Quad>,
    axis: usize,
    coord: [i32; 3],
) {
    let mut far = coord;
    far[axis] += 1;

    let a = volume.sample(coord[0], coord[1], coord[2]);
    let b = volume.sample(far[0], far[1], far[2]);
    let a_inside = a >= iso;
    let b_inside = b >= iso;
    if a_inside == b_inside {
        return;
    }
    let entering = !a_inside && b_inside;

    let cells: &[(i32, i32, i32, usize); 4] = match axis {
        0 => &X_CELLS,
        1 => &Y_CELLS,
        _ => &Z_CELLS,
    };
    let forward = entering == FORWARD_IS_ENTERING[axis];

    let mut dual = [0i32; 4];
    for (slot, &(dx, dy, dz, edge)) in cells.iter().enumerate() {
        let low = [coord[0] + dx, coord[1] + dy, coord[2] + dz];

        let raw_cc = cell_code(volume, low[0], low[1], low[2], iso);
        let cc: CellCode = if manifold_correction {
            manifold::correct(volume, low[0], low[1], low[2], iso, raw_cc)
        } else {
            raw_cc
        };

        let code = dual_point::resolve(cc, edge);
        dual[slot] = vertex_for(volume, iso, soup, cache, vertices, low, code) as i32;
    }

    let quad: Quad = if forward {
        [dual[0], dual[1], dual[2], dual[3]]
    } else {
        [dual[0], dual[3], dual[2], dual[1]]
    };
    quads.push(quad);
}

fn vertex_for(
    volume: &VolumeView,
    iso: u8,
    soup: bool,
    cache: &mut VertexCache,
    vertices: &mut Vec<Vertex>,
    low: [i32; 3],
    code: DualPointCode,
) -> u32 {
    if soup {
        let index = vertices.len() as u32;
        let pos = dual_point::position(volume, low[0], low[1], low[2], iso, code);
        vertices.push(Vertex::from(pos));
        index
    } else {
        let linear = volume.linear_index(low[0], low[1], low[2]);
        cache.get_or_insert(linear, code, vertices, || {
            Vertex::from(dual_point::position(volume, low[0], low[1], low[2], iso, code))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::topology::is_closed_manifold;

    fn single_active_voxel() -> Vec<u8> {
        let mut samples = vec![0u8; 5 * 5 * 5];
        let idx = |x: i32, y: i32, z: i32| (x + 5 * (y + 5 * z)) as usize;
        samples[idx(2, 2, 2)] = 255;
        samples
    }

    #[test]
    fn single_voxel_emits_six_quads() {
        let samples = single_active_voxel();
        let volume = VolumeView::new(&samples, 5, 5, 5);
        let mut cache = VertexCache::new();
        let mut vertices = Vec::new();
        let mut quads = Vec::new();

        emit(
            &volume,
            128,
            false,
            false,
            &mut cache,
            &mut vertices,
            &mut quads,
        );

        assert_eq!(quads.len(), 6);
        assert_eq!(vertices.len(), 8);
        for vertex in &vertices {
            assert!(vertex.x > 1.5 && vertex.x < 2.5);
            assert!(vertex.y > 1.5 && vertex.y < 2.5);
            assert!(vertex.z > 1.5 && vertex.z < 2.5);
        }
    }

    #[test]
    fn single_voxel_mesh_is_a_closed_manifold() {
        let samples = single_active_voxel();
        let volume = VolumeView::new(&samples, 5, 5, 5);
        let mut cache = VertexCache::new();
        let mut vertices = Vec::new();
        let mut quads = Vec::new();

        emit(
            &volume,
            128,
            false,
            false,
            &mut cache,
            &mut vertices,
            &mut quads,
        );

        assert!(is_closed_manifold(&quads));
    }

    #[test]
    fn soup_mode_emits_one_vertex_per_quad_corner() {
        let samples = single_active_voxel();
        let volume = VolumeView::new(&samples, 5, 5, 5);
        let mut cache = VertexCache::new();
        let mut vertices = Vec::new();
        let mut quads = Vec::new();

        emit(
            &volume,
            128,
            false,
            true,
            &mut cache,
            &mut vertices,
            &mut quads,
        );

        assert_eq!(quads.len(), 6);
        assert_eq!(vertices.len(), 24);
    }

    #[test]
    fn empty_volume_emits_nothing() {
        let samples = vec![0u8; 5 * 5 * 5];
        let volume = VolumeView::new(&samples, 5, 5, 5);
        let mut cache = VertexCache::new();
        let mut vertices = Vec::new();
        let mut quads = Vec::new();

        emit(
            &volume,
            128,
            false,
            false,
            &mut cache,
            &mut vertices,
            &mut quads,
        );

        assert!(quads.is_empty());
        assert!(vertices.is_empty());
    }

    #[test]
    fn half_space_emits_a_planar_strip_with_no_boundary_inside_the_volume() {
        // Lower half of a 4x4x4 volume inside, upper half outside: the
        // resulting strip of quads has a boundary only where it meets the
        // edge of the volume, not within it.
        let mut samples = vec![0u8; 4 * 4 * 4];
        let idx = |x: i32, y: i32, z: i32| (x + 4 * (y + 4 * z)) as usize;
        for z in 0..2 {
            for y in 0..4 {
                for x in 0..4 {
                    samples[idx(x, y, z)] = 255;
                }
            }
        }
        let volume = VolumeView::new(&samples, 4, 4, 4);
        let mut cache = VertexCache::new();
        let mut vertices = Vec::new();
        let mut quads = Vec::new();

        emit(
            &volume,
            128,
            false,
            false,
            &mut cache,
            &mut vertices,
            &mut quads,
        );

        assert!(!quads.is_empty());
        for quad in &quads {
            for &index in quad.iter() {
                assert!((index as usize) < vertices.len());
            }
        }
    }

    #[test]
    fn quad_normals_point_away_from_the_low_value_side() {
        // Lower half inside (see half_space test above): every quad's
        // normal should point toward +z, the increasing-value direction,
        // per spec.md §6 ("counter-clockwise ... viewed from outside the
        // iso-surface, outside = low-value side").
        let mut samples = vec![0u8; 4 * 4 * 4];
        let idx = |x: i32, y: i32, z: i32| (x + 4 * (y + 4 * z)) as usize;
        for z in 0..2 {
            for y in 0..4 {
                for x in 0..4 {
                    samples[idx(x, y, z)] = 255;
                }
            }
        }
        let volume = VolumeView::new(&samples, 4, 4, 4);
        let mut cache = VertexCache::new();
        let mut vertices = Vec::new();
        let mut quads = Vec::new();

        emit(
            &volume,
            128,
            false,
            false,
            &mut cache,
            &mut vertices,
            &mut quads,
        );

        assert!(!quads.is_empty());
        for quad in &quads {
            let p: Vec<_> = quad.iter().map(|&i| vertices[i as usize]).collect();
            let e1 = (p[1].x - p[0].x, p[1].y - p[0].y, p[1].z - p[0].z);
            let e2 = (p[3].x - p[0].x, p[3].y - p[0].y, p[3].z - p[0].z);
            let normal_z = e1.0 * e2.1 - e1.1 * e2.0;
            assert!(normal_z > 0.0, "quad {:?} has a normal facing -z", quad);
        }
    }

    #[test]
    fn extraction_is_deterministic() {
        let samples = single_active_voxel();
        let volume = VolumeView::new(&samples, 5, 5, 5);

        let mut cache_a = VertexCache::new();
        let mut vertices_a = Vec::new();
        let mut quads_a = Vec::new();
        emit(
            &volume,
            128,
            true,
            false,
            &mut cache_a,
            &mut vertices_a,
            &mut quads_a,
        );

        let mut cache_b = VertexCache::new();
        let mut vertices_b = Vec::new();
        let mut quads_b = Vec::new();
        emit(
            &volume,
            128,
            true,
            false,
            &mut cache_b,
            &mut vertices_b,
            &mut quads_b,
        );

        assert_eq!(vertices_a, vertices_b);
        assert_eq!(quads_a, quads_b);
    }
}
