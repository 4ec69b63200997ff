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

//! Permutation analysis driver for an 8-terminal omega fabric: for each
//! requested permutation, report whether it is blocking and print the
//! minimum-cycle transmission schedule with per-stage switch settings.

use std::env;

use anyhow::Result;
use fabric::{analyze_conflicts, minimum_schedule, Fabric, Permutation, Schedule};

mod notation;
mod report;

const FABRIC_SIZE: usize = 8;

/// Demonstration permutations used when no arguments are given.
const DEMO_PERMUTATIONS: &[(&str, &str)] = &[
    ("(7 0 6 5 2) (4 3) (1)", "pi1"),
    ("(1 7) (0 3) (4 2) (5 6)", "pi2"),
    ("(6 5 1 2) (0 3 4 7)", "pi3"),
    ("(2 5 3 7 0 4) (1 6)", "pi4"),
    ("(1 2 4 7 6 0 5 3)", "pi5"),
];

fn analyze(fabric: &Fabric, text: &str, name: &str) -> Result<()> {
    println!("--- Analysis for {} ---", name);
    println!("Permutation: {}", text);
    let permutation = notation::parse_cycles(text, fabric.size())?;
    let outcome = analyze_conflicts(fabric, &permutation)?;
    let schedule = if outcome.blocking {
        println!("Status: BLOCKING");
        log::debug!("{} contended resources", outcome.groups.len());
        minimum_schedule(fabric, &permutation)?
    } else {
        println!("Status: NON-BLOCKING");
        Schedule {
            slots: vec![permutation.connections().to_vec()],
        }
    };
    println!("Minimum Cycles: {}", schedule.slot_count());
    print!("{}", report::render_schedule(fabric, &schedule)?);
    println!();
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let fabric = Fabric::new(FABRIC_SIZE)?;
    println!("Scheduling Scheme (0=Straight, 1=Cross, -=Unused):");
    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        for (text, name) in DEMO_PERMUTATIONS {
            analyze(&fabric, text, name)?;
        }
    } else {
        for (i, text) in args.iter().enumerate() {
            analyze(&fabric, text, &format!("Custom Arg {}", i + 1))?;
        }
    }
    Ok(())
}
