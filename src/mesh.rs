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
//! The mesh types emitted by [`crate::DualMarchingCubes::build`].
use crate::math::Vec3;

/// A single output vertex position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vertex {
    pub fn zero() -> Self {
        Vertex {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

impl From<Vec3> for Vertex {
    fn from(v: Vec3) -> Self {
        Vertex {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// A single output quad face, as 4 indices into the vertex array, wound
/// counter-clockwise when viewed from outside the surface.
pub type Quad = [i32; 4];


#[cfg(test)]
mod tests {
    use super::topology::is_closed_manifold;

    #[test]
    fn a_single_quad_is_not_closed() {
        let quads = vec![[0, 1, 2, 3]];
        assert!(!is_closed_manifold(&quads));
    }

    #[test]
    fn two_quads_sharing_every_edge_with_opposite_winding_is_closed() {
        // A degenerate "pillow" of two quads glued along all 4 edges.
        let front = [0, 1, 2, 3];
        let back = [0, 3, 2, 1];
        assert!(is_closed_manifold(&[front, back]));
    }

    #[test]
    fn a_dangling_edge_is_not_closed() {
        let front = [0, 1, 2, 3];
        let back = [4, 3, 2, 1];
        assert!(!is_closed_manifold(&[front, back]));
    }
}
