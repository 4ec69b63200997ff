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
use crate::permutation::Connection;
use crate::routing::route;
use crate::topology::Fabric;

/// Configuration of one 2x2 switch within a slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwitchState {
    /// Each input port passes to the same-numbered output port.
    Straight,
    /// The input ports are swapped onto the opposite output ports.
    Cross,
    /// No connection traverses the switch in this slot.
    Unused,
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Straight => write!(f, "0"),
            Self::Cross => write!(f, "1"),
            Self::Unused => write!(f, "-"),
        }
    }
}

/// Switch settings for one slot, indexed by (stage, switch).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwitchGrid {
    grid: Vec<Vec<SwitchState>>,
}

impl SwitchGrid {
    /// Per-stage switch settings, stage order.
    pub fn stages(&self) -> &[Vec<SwitchState>] {
        &self.grid
    }

    pub fn get(&self, stage: usize, switch: usize) -> SwitchState {
        self.grid[stage][switch]
    }
}

/// Replay routing for every connection of a conflict-free slot and derive
/// the setting of each traversed switch: Straight when the connection
/// leaves on the port it arrived on, Cross otherwise.
///
/// Callers must pass an independent set (one slot of a valid schedule).
/// Within such a slot no switch ever receives contradictory settings; for
/// conflicting input the last write wins, which is checked only by a
/// `debug_assert!`.
pub fn derive_states(fabric: &Fabric, slot: &[Connection]) -> Result<SwitchGrid, Error> {
    let mut grid = vec![vec![SwitchState::Unused; fabric.switches_per_stage()]; fabric.stages()];
    for conn in slot {
        for hop in route(fabric, conn.src, conn.dst)? {
            let state = if hop.input_port == hop.resource.port {
                SwitchState::Straight
            } else {
                SwitchState::Cross
            };
            let cell = &mut grid[hop.resource.stage][hop.resource.switch];
            debug_assert!(*cell == SwitchState::Unused || *cell == state);
            *cell = state;
        }
    }
    Ok(SwitchGrid { grid })
}

#[cfg(test)]
mod switch_tests {
    use super::*;

    #[test]
    fn test_identity_on_two_terminals() {
        let fabric = Fabric::new(2).unwrap();
        let slot = [Connection { src: 0, dst: 0 }, Connection { src: 1, dst: 1 }];
        let grid = derive_states(&fabric, &slot).unwrap();
        assert_eq!(grid.get(0, 0), SwitchState::Straight);
    }

    #[test]
    fn test_swap_on_two_terminals() {
        let fabric = Fabric::new(2).unwrap();
        let slot = [Connection { src: 0, dst: 1 }, Connection { src: 1, dst: 0 }];
        let grid = derive_states(&fabric, &slot).unwrap();
        assert_eq!(grid.get(0, 0), SwitchState::Cross);
    }

    #[test]
    fn test_slot_settings() {
        // First slot of the minimum schedule for {0:0, 1:3, 2:1, 3:2}.
        let fabric = Fabric::new(4).unwrap();
        let slot = [Connection { src: 0, dst: 0 }, Connection { src: 1, dst: 3 }];
        let grid = derive_states(&fabric, &slot).unwrap();
        assert_eq!(grid.get(0, 0), SwitchState::Straight);
        assert_eq!(grid.get(0, 1), SwitchState::Cross);
        assert_eq!(grid.get(1, 0), SwitchState::Straight);
        assert_eq!(grid.get(1, 1), SwitchState::Straight);
    }

    #[test]
    fn test_untouched_switches_stay_unused() {
        let fabric = Fabric::new(8).unwrap();
        let slot = [Connection { src: 0, dst: 0 }];
        let grid = derive_states(&fabric, &slot).unwrap();
        let unused = grid
            .stages()
            .iter()
            .flatten()
            .filter(|state| **state == SwitchState::Unused)
            .count();
        // One connection touches one switch per stage.
        assert_eq!(
            unused,
            fabric.stages() * fabric.switches_per_stage() - fabric.stages()
        );
    }

    #[test]
    fn test_display_abbreviations() {
        assert_eq!(format!("{}", SwitchState::Straight), "0");
        assert_eq!(format!("{}", SwitchState::Cross), "1");
        assert_eq!(format!("{}", SwitchState::Unused), "-");
    }
}
