// Copyright 2023 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::Error;

/// Immutable description of an omega fabric: `size` terminals wired through
/// `log2(size)` stages of 2x2 switches, with consecutive stages connected
/// by the perfect-shuffle pattern.
///
/// The fabric is constructed once and passed by reference to every
/// operation; it is safe to share read-only across concurrent analyses.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fabric {
    size: usize,
    stages: usize,
}

impl Fabric {
    pub fn new(size: usize) -> Result<Self, Error> {
        if size < 2 || !size.is_power_of_two() {
            return Err(Error::InvalidTopology(size));
        }
        Ok(Self {
            size,
            stages: size.trailing_zeros() as usize,
        })
    }

    /// Number of input/output terminals.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of switching stages, log2 of the terminal count.
    pub fn stages(&self) -> usize {
        self.stages
    }

    /// Number of 2x2 switches in each stage.
    pub fn switches_per_stage(&self) -> usize {
        self.size / 2
    }

    /// The perfect-shuffle interconnect between consecutive stages: a
    /// cyclic left-rotation of the `stages`-bit terminal address. Maps a
    /// stage's output terminal to the switch input it feeds at the next
    /// stage.
    pub fn shuffle(&self, terminal: usize) -> usize {
        ((terminal << 1) & (self.size - 1)) | (terminal >> (self.stages - 1))
    }

    pub(crate) fn check_terminal(&self, terminal: usize) -> Result<(), Error> {
        if terminal >= self.size {
            return Err(Error::OutOfRange(terminal, self.size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod topology_tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_invalid_sizes() {
        for size in [0, 1, 3, 6, 12, 100].iter() {
            assert_eq!(Fabric::new(*size).unwrap_err(), Error::InvalidTopology(*size));
        }
    }

    #[test]
    fn test_stage_counts() {
        for (size, stages) in [(2, 1), (4, 2), (8, 3), (16, 4), (64, 6)].iter() {
            let fabric = Fabric::new(*size).unwrap();
            assert_eq!(fabric.size(), *size);
            assert_eq!(fabric.stages(), *stages);
            assert_eq!(fabric.switches_per_stage(), *size / 2);
        }
    }

    #[test]
    fn test_shuffle_is_bijective() {
        for size in [2, 4, 8, 16, 32].iter() {
            let fabric = Fabric::new(*size).unwrap();
            let image = (0..*size).map(|v| fabric.shuffle(v)).collect::<HashSet<_>>();
            assert_eq!(image.len(), *size);
            assert!(image.iter().all(|v| *v < *size));
        }
    }

    #[test]
    fn test_shuffle_rotates_address() {
        let fabric = Fabric::new(8).unwrap();
        // 3-bit addresses: b2 b1 b0 -> b1 b0 b2
        assert_eq!(fabric.shuffle(0b000), 0b000);
        assert_eq!(fabric.shuffle(0b001), 0b010);
        assert_eq!(fabric.shuffle(0b100), 0b001);
        assert_eq!(fabric.shuffle(0b101), 0b011);
        assert_eq!(fabric.shuffle(0b111), 0b111);
    }
}
