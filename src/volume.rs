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

/// A read-only view over a regular grid of `u8` scalar samples.
///
/// `VolumeView` borrows the caller's sample array for the duration of a
/// single `build` call; the engine never retains the borrow afterward.
#[derive(Clone, Copy)]
pub struct VolumeView<'a> {
    samples: &'a [u8],
    nx: i32,
    ny: i32,
    nz: i32,
}

impl<'a> VolumeView<'a> {
    /// Wrap a sample array together with its dimensions. Does not check that
    /// `samples.len() == nx * ny * nz`; callers validate that before
    /// constructing a view (see [`crate::build`]).
    pub fn new(samples: &'a [u8], nx: i32, ny: i32, nz: i32) -> Self {
        Self {
            samples,
            nx,
            ny,
            nz,
        }
    }

    pub fn nx(&self) -> i32 {
        self.nx
    }

    pub fn ny(&self) -> i32 {
        self.ny
    }

    pub fn nz(&self) -> i32 {
        self.nz
    }

    /// Linearize a grid coordinate: `x + nx * (y + ny * z)`.
    pub fn linear_index(&self, x: i32, y: i32, z: i32) -> i32 {
        x + self.nx * (y + self.ny * z)
    }

    /// Sample the volume at a grid coordinate. No bounds checking is
    /// performed on this hot path; callers respect the dimensions.
    pub fn sample(&self, x: i32, y: i32, z: i32) -> u8 {
        self.samples[self.linear_index(x, y, z) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_index_matches_spec_formula() {
        let samples = vec![0u8; 4 * 5 * 6];
        let v = VolumeView::new(&samples, 4, 5, 6);
        assert_eq!(v.linear_index(0, 0, 0), 0);
        assert_eq!(v.linear_index(1, 0, 0), 1);
        assert_eq!(v.linear_index(0, 1, 0), 4);
        assert_eq!(v.linear_index(0, 0, 1), 20);
        assert_eq!(v.linear_index(3, 4, 5), 3 + 4 * (4 + 5 * 5));
    }

    #[test]
    fn sample_reads_through_to_backing_slice() {
        let mut samples = vec![0u8; 2 * 2 * 2];
        samples[VolumeView::new(&samples, 2, 2, 2).linear_index(1, 1, 1) as usize] = 42;
        let v = VolumeView::new(&samples, 2, 2, 2);
        assert_eq!(v.sample(1, 1, 1), 42);
        assert_eq!(v.sample(0, 0, 0), 0);
    }
}
