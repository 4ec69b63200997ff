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

use std::collections::HashSet;

use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::error::Error;
use crate::permutation::{Connection, Permutation};
use crate::routing::route;
use crate::topology::Fabric;

/// A partition of a permutation's connections into conflict-free
/// simultaneous-transmission slots, minimal in slot count.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schedule {
    /// Slot contents in ascending slot order; within a slot, connections
    /// keep their enumeration order.
    pub slots: Vec<Vec<Connection>>,
}

impl Schedule {
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

/// Build the conflict graph over the permutation's connections: one vertex
/// per connection in enumeration order, an edge wherever two paths claim a
/// common resource.
fn conflict_graph(
    fabric: &Fabric,
    permutation: &Permutation,
) -> Result<UnGraph<Connection, ()>, Error> {
    let mut graph = UnGraph::new_undirected();
    let mut paths = Vec::with_capacity(permutation.len());
    for &conn in permutation.connections() {
        graph.add_node(conn);
        let claimed = route(fabric, conn.src, conn.dst)?
            .iter()
            .map(|hop| hop.resource)
            .collect::<HashSet<_>>();
        paths.push(claimed);
    }
    for (i, j) in (0..permutation.len()).tuple_combinations() {
        if !paths[i].is_disjoint(&paths[j]) {
            graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
        }
    }
    log::debug!(
        "conflict graph: {} vertices, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Backtracking search for a proper k-coloring, assigning vertices in index
/// order and trying colors in ascending order. Feasibility is checked
/// against earlier-indexed neighbors only; later neighbors are still
/// unassigned and get checked on their own turn.
fn extend_coloring(
    graph: &UnGraph<Connection, ()>,
    colors: &mut Vec<Option<usize>>,
    idx: usize,
    k: usize,
) -> bool {
    if idx == graph.node_count() {
        return true;
    }
    let vertex = NodeIndex::new(idx);
    for color in 0..k {
        let feasible = graph
            .neighbors(vertex)
            .filter(|neighbor| neighbor.index() < idx)
            .all(|neighbor| colors[neighbor.index()] != Some(color));
        if feasible {
            colors[idx] = Some(color);
            if extend_coloring(graph, colors, idx + 1, k) {
                return true;
            }
            colors[idx] = None;
        }
    }
    false
}

/// Partition a permutation's connections into the fewest possible
/// conflict-free slots.
///
/// This is an exact chromatic-number computation on the conflict graph:
/// candidate slot counts are tried in increasing order, each with a full
/// backtracking search, and the first complete assignment found is returned
/// verbatim. Worst-case exponential in the number of connections (graph
/// coloring is NP-hard); acceptable for fabrics with tens of terminals.
/// Always terminates, since scheduling every connection in its own slot is
/// trivially conflict-free.
pub fn minimum_schedule(fabric: &Fabric, permutation: &Permutation) -> Result<Schedule, Error> {
    minimum_schedule_bounded(fabric, permutation, permutation.len())
}

/// Same as [`minimum_schedule`] with an explicit ceiling on the slot count.
/// Fails with [`Error::DegenerateSchedule`] when no schedule with at most
/// `max_slots` slots exists.
pub fn minimum_schedule_bounded(
    fabric: &Fabric,
    permutation: &Permutation,
    max_slots: usize,
) -> Result<Schedule, Error> {
    permutation.check_domain(fabric)?;
    let graph = conflict_graph(fabric, permutation)?;
    let n = graph.node_count();
    if n == 0 {
        return Ok(Schedule { slots: vec![] });
    }
    for k in 1..=max_slots {
        let mut colors = vec![None; n];
        if extend_coloring(&graph, &mut colors, 0, k) {
            log::debug!("{} connections scheduled in {} slots", n, k);
            let mut slots = vec![Vec::new(); k];
            for (idx, color) in colors.iter().enumerate() {
                let color = color.expect("complete coloring");
                slots[color].push(*graph.node_weight(NodeIndex::new(idx)).unwrap());
            }
            // k is minimal, so every color below k is in use.
            debug_assert!(slots.iter().all(|slot| !slot.is_empty()));
            return Ok(Schedule { slots });
        }
    }
    Err(Error::DegenerateSchedule(max_slots))
}
