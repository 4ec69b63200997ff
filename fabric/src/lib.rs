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

//! Modeling of omega/banyan self-routing multistage interconnection
//! fabrics: per-connection path resolution through the perfect-shuffle
//! interconnect, detection of switch-output contention between the
//! connections of a permutation request, and exact minimum-slot scheduling
//! of requests that cannot be realized in a single transmission cycle.

mod conflict;
mod error;
mod permutation;
mod routing;
mod schedule;
mod switch;
mod topology;

// Public types
pub use crate::conflict::{analyze_conflicts, ConflictReport};
pub use crate::error::Error;
pub use crate::permutation::{Connection, Permutation};
pub use crate::routing::{route, Hop, Resource};
pub use crate::schedule::{minimum_schedule, minimum_schedule_bounded, Schedule};
pub use crate::switch::{derive_states, SwitchGrid, SwitchState};
pub use crate::topology::Fabric;
