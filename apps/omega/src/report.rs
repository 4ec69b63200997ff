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

//! Human-readable schedule reports.

use std::fmt::Write;

use anyhow::Result;
use fabric::{derive_states, Fabric, Schedule};
use itertools::Itertools;

/// Render a schedule slot by slot: the transmissions of each cycle,
/// followed by the per-stage switch settings (0=Straight, 1=Cross,
/// -=Unused).
pub fn render_schedule(fabric: &Fabric, schedule: &Schedule) -> Result<String> {
    let mut out = String::new();
    for (slot_idx, slot) in schedule.slots.iter().enumerate() {
        writeln!(out, "  Cycle {}:", slot_idx + 1)?;
        writeln!(
            out,
            "    Transmissions: {}",
            slot.iter().map(|conn| conn.to_string()).join(", ")
        )?;
        let grid = derive_states(fabric, slot)?;
        writeln!(out, "    Switch Settings:")?;
        for (stage_idx, stage) in grid.stages().iter().enumerate() {
            writeln!(
                out,
                "      Stage {}: {}",
                stage_idx,
                stage
                    .iter()
                    .enumerate()
                    .map(|(switch, state)| format!("SW{}:{}", switch, state))
                    .join("  ")
            )?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod report_tests {
    use super::*;
    use fabric::{minimum_schedule, Permutation};

    #[test]
    fn test_two_slot_report() {
        let fabric = Fabric::new(4).unwrap();
        let permutation = Permutation::from_pairs(&[(0, 0), (1, 3), (2, 1), (3, 2)], 4).unwrap();
        let schedule = minimum_schedule(&fabric, &permutation).unwrap();
        let report = render_schedule(&fabric, &schedule).unwrap();
        assert!(report.contains("Cycle 1:"));
        assert!(report.contains("Cycle 2:"));
        assert!(report.contains("Transmissions: 0->0, 1->3"));
        assert!(report.contains("Stage 0: SW0:0  SW1:1"));
        assert!(report.contains("Stage 1: SW0:0  SW1:0"));
    }
}
