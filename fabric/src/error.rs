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

use std::fmt;

/// Failure modes of the fabric core. All are detected eagerly at the
/// boundary of the offending operation and are unrecoverable for that
/// request; the caller must supply corrected input and retry.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// Fabric size is not a power of two >= 2.
    InvalidTopology(usize),
    /// A terminal index lies outside [0, size); carries (terminal, size).
    OutOfRange(usize, usize),
    /// The request is not a total bijection over the terminals; carries an
    /// offending terminal (out of range, duplicated, or uncovered).
    InvalidPermutation(usize),
    /// No conflict-free schedule exists within the caller-imposed slot
    /// ceiling.
    DegenerateSchedule(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidTopology(size) => {
                write!(f, "ERROR: fabric size {} is not a power of two >= 2", size)
            }
            Self::OutOfRange(terminal, size) => {
                write!(f, "ERROR: terminal {} outside [0, {})", terminal, size)
            }
            Self::InvalidPermutation(terminal) => {
                write!(
                    f,
                    "ERROR: mapping is not a total bijection (terminal {})",
                    terminal
                )
            }
            Self::DegenerateSchedule(max_slots) => {
                write!(f, "ERROR: no schedule within {} slots", max_slots)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
