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
use crate::topology::Fabric;

/// One output link of one 2x2 switch at one stage. Two connections whose
/// paths claim the same resource cannot be transmitted in the same slot;
/// this is the atomic unit of contention.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Resource {
    pub stage: usize,
    pub switch: usize,
    pub port: usize,
}

/// A single stage traversal: the resource the connection claims plus the
/// switch input port it arrived on. The input port is what switch-state
/// derivation needs to tell Straight from Cross.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Hop {
    pub resource: Resource,
    pub input_port: usize,
}

/// Resolve the ordered sequence of hops the connection (src, dst) takes
/// through the fabric, one per stage.
///
/// The fabric is self-routing: stage `s` switches on destination address
/// bit `stages - 1 - s` (most significant first), so the route depends only
/// on `dst`. Before each stage the current terminal address is passed
/// through the shuffle to find the switch input it lands on.
pub fn route(fabric: &Fabric, src: usize, dst: usize) -> Result<Vec<Hop>, Error> {
    fabric.check_terminal(src)?;
    fabric.check_terminal(dst)?;
    let stages = fabric.stages();
    let mut hops = Vec::with_capacity(stages);
    let mut current = src;
    for stage in 0..stages {
        let input = fabric.shuffle(current);
        let switch = input / 2;
        let port = (dst >> (stages - 1 - stage)) & 1;
        log::trace!(
            "route {}->{}: stage {} switch {} in-port {} out-port {}",
            src,
            dst,
            stage,
            switch,
            input % 2,
            port
        );
        hops.push(Hop {
            resource: Resource {
                stage,
                switch,
                port,
            },
            input_port: input % 2,
        });
        current = 2 * switch + port;
    }
    debug_assert_eq!(current, dst);
    Ok(hops)
}
