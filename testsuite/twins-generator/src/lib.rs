// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! A combinatorial Twins scenario generator for BFT-consensus testing.
//!
//! Given a small cluster configuration (replica count, number of twinned
//! replicas, maximum partitions per round, and number of rounds), a
//! [`Generator`] lazily enumerates a reproducible sequence of
//! [`Scenario`]s. Each scenario fixes a global participant roster and, for
//! every round, names a leader together with a partitioning of the full
//! roster. A twin is two roster participants that share a [`ReplicaId`]
//! (and so cast votes under the same logical identity) but have distinct
//! [`NetworkId`]s — replaying scenarios that place a replica's twins in
//! different partitions exercises equivocation and leader misbehavior
//! against a consensus implementation without touching its protocol code.
//!
//! This crate is pure, single-threaded combinatorics: it owns no network
//! substrate, no cryptography, and no consensus logic, and persists
//! nothing. A harness wires [`Generator`] output into an actual replica
//! network and defines its own serialization for recorded runs.
//!
//! ```
//! use twins_generator::{Generator, GeneratorConfig};
//!
//! let mut gen = Generator::new(GeneratorConfig {
//!     replicas: 4,
//!     num_twins: 1,
//!     partitions: 2,
//!     rounds: 2,
//! }).unwrap();
//!
//! gen.shuffle(42);
//! while let Some(scenario) = gen.next_scenario() {
//!     for view in &scenario.views {
//!         let _ = (&view.leader, &view.partitions);
//!     }
//! }
//! ```

mod error;
mod feasibility;
mod generator;
mod iterator;
mod leader_cross;
mod node;
mod scenario_builder;
mod size_enum;
mod twin_enum;

pub use error::TwinsError;
pub use generator::{Generator, GeneratorConfig};
pub use iterator::Scenario;
pub use leader_cross::ViewSpec;
pub use node::{NetworkId, NodeId, NodeSet, ReplicaId, Roster};
pub use scenario_builder::PartitionScenario;

/// Enumerators exposed for harnesses or tests that want to reason about
/// the combinatorics directly, independent of a constructed [`Generator`].
pub mod enumerators {
    pub use crate::feasibility::is_feasible;
    pub use crate::size_enum::partition_sizes;
    pub use crate::twin_enum::{twin_assignments, twin_pairs, TwinAssignment, TwinPlacement};
}
