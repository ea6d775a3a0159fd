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
//! Extracts a torus from a sampled volume and prints the resulting mesh's
//! vertex and quad counts. A minimal, non-interactive stand-in for the
//! windowed demos this crate's ancestor shipped.
use dual_marching_cubes::DualMarchingCubes;

const DIMS: i32 = 48;
const MAJOR_RADIUS: f32 = 0.3;
const MINOR_RADIUS: f32 = 0.12;

fn torus_volume() -> Vec<u8> {
    let mut samples = vec![0u8; (DIMS * DIMS * DIMS) as usize];
    let half = DIMS as f32 / 2.0;
    let scale = half * 0.8;
    let mut i = 0;
    for z in 0..DIMS {
        for y in 0..DIMS {
            for x in 0..DIMS {
                let px = (x as f32 - half) / scale;
                let py = (y as f32 - half) / scale;
                let pz = (z as f32 - half) / scale;
                let q = ((px * px + py * py).sqrt() - MAJOR_RADIUS).powi(2) + pz * pz;
                samples[i] = if q <= MINOR_RADIUS * MINOR_RADIUS { 255 } else { 0 };
                i += 1;
            }
        }
    }
    samples
}

fn main() {
    let samples = torus_volume();

    let mut engine = DualMarchingCubes::new();
    let mut vertices = Vec::new();
    let mut quads = Vec::new();
    engine
        .build(
            &samples, DIMS, DIMS, DIMS, 128, true, false, &mut vertices, &mut quads,
        )
        .expect("volume dimensions match the sample count");

    println!(
        "extracted {} vertices and {} quads from a {dims}x{dims}x{dims} torus volume",
        vertices.len(),
        quads.len(),
        dims = DIMS,
    );
}
