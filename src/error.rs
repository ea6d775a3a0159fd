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
use std::{error, fmt};

/// Preconditions of [`crate::build`] that the caller is responsible for
/// upholding.
///
/// Every other failure mode during extraction is a contract violation (a
/// latent bug, not a reported error) per the engine's design: table lookups
/// are total and edge interpolation denominators are non-zero by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `volume.len()` did not equal `nx * ny * nz`, or that product
    /// overflows `i32`.
    InvalidInput {
        nx: i32,
        ny: i32,
        nz: i32,
        volume_len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidInput {
                nx,
                ny,
                nz,
                volume_len,
            } => write!(
                f,
                "volume length {} does not match dimensions {}x{}x{}",
                volume_len, nx, ny, nz
            ),
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_dimensions() {
        let e = Error::InvalidInput {
            nx: 4,
            ny: 4,
            nz: 4,
            volume_len: 10,
        };
        let message = format!("{}", e);
        assert!(message.contains("10"));
        assert!(message.contains("4x4x4"));
    }
}
