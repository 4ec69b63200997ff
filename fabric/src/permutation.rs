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

use crate::error::Error;
use crate::topology::Fabric;

/// An ordered (src, dst) pair of terminals requesting a connection through
/// the fabric.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Connection {
    pub src: usize,
    pub dst: usize,
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}->{}", self.src, self.dst)
    }
}

/// A validated permutation request: a total bijection over [0, size), kept
/// in the order the pairs were supplied. Enumeration order is part of the
/// scheduling contract -- the solver assigns slots deterministically with
/// respect to it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Permutation {
    connections: Vec<Connection>,
}

impl Permutation {
    /// Build a permutation over `size` terminals from (src, dst) pairs.
    /// Every terminal must appear exactly once as a source and exactly once
    /// as a destination.
    pub fn from_pairs(pairs: &[(usize, usize)], size: usize) -> Result<Self, Error> {
        let mut src_seen = vec![false; size];
        let mut dst_seen = vec![false; size];
        let mut connections = Vec::with_capacity(size);
        for &(src, dst) in pairs {
            if src >= size || src_seen[src] {
                return Err(Error::InvalidPermutation(src));
            }
            if dst >= size || dst_seen[dst] {
                return Err(Error::InvalidPermutation(dst));
            }
            src_seen[src] = true;
            dst_seen[dst] = true;
            connections.push(Connection { src, dst });
        }
        // size distinct sources imply size distinct destinations, so
        // checking source coverage suffices for totality.
        if let Some(missing) = src_seen.iter().position(|covered| !covered) {
            return Err(Error::InvalidPermutation(missing));
        }
        Ok(Self { connections })
    }

    /// The connections in enumeration (insertion) order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The terminal domain [0, size) this permutation covers. A bijection
    /// has exactly one connection per terminal.
    pub fn size(&self) -> usize {
        self.connections.len()
    }

    /// A permutation is only meaningful against the fabric whose terminal
    /// domain it covers; reject any other pairing. Carries the first
    /// terminal that is uncovered (undersized mapping) or out of range
    /// (oversized mapping).
    pub(crate) fn check_domain(&self, fabric: &Fabric) -> Result<(), Error> {
        if self.size() != fabric.size() {
            return Err(Error::InvalidPermutation(self.size().min(fabric.size())));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

#[cfg(test)]
mod permutation_tests {
    use super::*;

    #[test]
    fn test_valid_permutation_keeps_order() {
        let pairs = [(2, 0), (0, 3), (1, 1), (3, 2)];
        let permutation = Permutation::from_pairs(&pairs, 4).unwrap();
        assert_eq!(permutation.len(), 4);
        let order = permutation
            .connections()
            .iter()
            .map(|conn| (conn.src, conn.dst))
            .collect::<Vec<_>>();
        assert_eq!(order, pairs.to_vec());
    }

    #[test]
    fn test_duplicate_source() {
        let pairs = [(0, 0), (0, 1), (2, 2), (3, 3)];
        assert_eq!(
            Permutation::from_pairs(&pairs, 4).unwrap_err(),
            Error::InvalidPermutation(0)
        );
    }

    #[test]
    fn test_duplicate_destination() {
        let pairs = [(0, 3), (1, 3), (2, 2), (3, 0)];
        assert_eq!(
            Permutation::from_pairs(&pairs, 4).unwrap_err(),
            Error::InvalidPermutation(3)
        );
    }

    #[test]
    fn test_missing_terminal() {
        let pairs = [(0, 0), (1, 1), (3, 3)];
        assert_eq!(
            Permutation::from_pairs(&pairs, 4).unwrap_err(),
            Error::InvalidPermutation(2)
        );
    }

    #[test]
    fn test_terminal_out_of_range() {
        let pairs = [(0, 0), (1, 1), (2, 2), (4, 3)];
        assert_eq!(
            Permutation::from_pairs(&pairs, 4).unwrap_err(),
            Error::InvalidPermutation(4)
        );
    }
}
