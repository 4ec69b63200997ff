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

use std::collections::HashMap;

use itertools::Itertools;

use crate::error::Error;
use crate::permutation::{Connection, Permutation};
use crate::routing::{route, Resource};
use crate::topology::Fabric;

/// Outcome of attempting an entire permutation in a single transmission
/// cycle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConflictReport {
    /// True iff some switch output is claimed by more than one connection.
    pub blocking: bool,
    /// For each contended resource, in resource order, the connections
    /// claiming it in enumeration order. A pair of connections clashing on
    /// several resources contributes one group per resource; groups are not
    /// globally deduplicated.
    pub groups: Vec<Vec<Connection>>,
}

/// Index every connection's path by the resources it claims and report any
/// contention.
pub fn analyze_conflicts(
    fabric: &Fabric,
    permutation: &Permutation,
) -> Result<ConflictReport, Error> {
    permutation.check_domain(fabric)?;
    let mut usage: HashMap<Resource, Vec<Connection>> = HashMap::new();
    for &conn in permutation.connections() {
        for hop in route(fabric, conn.src, conn.dst)? {
            usage.entry(hop.resource).or_insert_with(Vec::new).push(conn);
        }
    }
    // HashMap iteration order is arbitrary; order groups by resource so the
    // report is reproducible.
    let groups = usage
        .into_iter()
        .filter(|(_, users)| users.len() > 1)
        .sorted_by_key(|(resource, _)| *resource)
        .map(|(_, users)| users)
        .collect::<Vec<_>>();
    log::debug!(
        "{} connections, {} contended resources",
        permutation.len(),
        groups.len()
    );
    Ok(ConflictReport {
        blocking: !groups.is_empty(),
        groups,
    })
}
