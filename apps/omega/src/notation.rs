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

//! Disjoint-cycle permutation notation.

use anyhow::{anyhow, bail, Result};
use fabric::Permutation;

/// Parse disjoint-cycle notation such as `"(7 0 6 5 2) (4 3) (1)"` into a
/// total mapping over `n` terminals. Within a cycle every element maps to
/// its successor and the last wraps around to the first; terminals absent
/// from the notation are fixed points.
pub fn parse_cycles(text: &str, n: usize) -> Result<Permutation> {
    let mut pairs = Vec::with_capacity(n);
    let mut covered = vec![false; n];
    let mut rest = text.trim();
    while !rest.is_empty() {
        let open = rest
            .find('(')
            .ok_or_else(|| anyhow!("expected '(' at {:?}", rest))?;
        if !rest[..open].trim().is_empty() {
            bail!("unexpected token {:?}", rest[..open].trim());
        }
        let close = rest[open..]
            .find(')')
            .map(|offset| open + offset)
            .ok_or_else(|| anyhow!("unbalanced '(' at {:?}", rest))?;
        let cycle = rest[open + 1..close]
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<usize>()
                    .map_err(|_| anyhow!("bad terminal {:?}", token))
            })
            .collect::<Result<Vec<_>>>()?;
        for (i, &src) in cycle.iter().enumerate() {
            let dst = cycle[(i + 1) % cycle.len()];
            pairs.push((src, dst));
            if src < n {
                covered[src] = true;
            }
        }
        rest = rest[close + 1..].trim_start();
    }
    for terminal in 0..n {
        if !covered[terminal] {
            pairs.push((terminal, terminal));
        }
    }
    // Range and bijectivity checks happen in the core.
    Ok(Permutation::from_pairs(&pairs, n)?)
}

#[cfg(test)]
mod notation_tests {
    use super::*;

    fn mapping_of(permutation: &Permutation) -> Vec<(usize, usize)> {
        let mut pairs = permutation
            .connections()
            .iter()
            .map(|conn| (conn.src, conn.dst))
            .collect::<Vec<_>>();
        pairs.sort();
        pairs
    }

    #[test]
    fn test_cycles_with_fixed_point() {
        let permutation = parse_cycles("(7 0 6 5 2) (4 3) (1)", 8).unwrap();
        assert_eq!(
            mapping_of(&permutation),
            vec![
                (0, 6),
                (1, 1),
                (2, 7),
                (3, 4),
                (4, 3),
                (5, 2),
                (6, 5),
                (7, 0),
            ]
        );
    }

    #[test]
    fn test_absent_terminals_are_fixed_points() {
        let permutation = parse_cycles("(0 1)", 4).unwrap();
        assert_eq!(
            mapping_of(&permutation),
            vec![(0, 1), (1, 0), (2, 2), (3, 3)]
        );
    }

    #[test]
    fn test_full_cycle() {
        let permutation = parse_cycles("(1 2 4 7 6 0 5 3)", 8).unwrap();
        assert_eq!(permutation.len(), 8);
        assert!(mapping_of(&permutation).contains(&(3, 1)));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_cycles("0 1", 4).is_err());
        assert!(parse_cycles("(0 1", 4).is_err());
        assert!(parse_cycles("(0 x)", 4).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_terminal() {
        assert!(parse_cycles("(0 9)", 4).is_err());
    }

    #[test]
    fn test_rejects_repeated_terminal() {
        assert!(parse_cycles("(0 1) (1 2)", 4).is_err());
    }
}
