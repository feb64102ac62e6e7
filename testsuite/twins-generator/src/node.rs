// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Identities for the Twins roster: a [`ReplicaId`] names a logical
//! consensus replica, a [`NetworkId`] names a distinct network participant,
//! and a [`NodeId`] pairs the two. Twins are two [`NodeId`]s with equal
//! `ReplicaId` but distinct `NetworkId`: same vote-casting identity, two
//! independent network endpoints.

use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReplicaId(pub u32);

impl fmt::Display for ReplicaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NetworkId(pub u32);

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    pub replica: ReplicaId,
    pub network: NetworkId,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.replica, self.network)
    }
}

pub type NodeSet = BTreeSet<NodeId>;

/// The fixed global participant roster for one generator: twinned
/// [`NodeId`]s first, in allocation order, then non-twinned ones.
#[derive(Debug, Clone)]
pub struct Roster {
    pub twins: Vec<NodeId>,
    pub non_twins: Vec<NodeId>,
}

impl Roster {
    /// Builds the roster for `replicas` replicas of which `num_twins` are
    /// twinned. NetworkIds are handed out in strictly increasing order
    /// starting at 1, replica-by-replica.
    pub fn build(replicas: u32, num_twins: u32) -> Self {
        let mut twins = Vec::with_capacity(num_twins as usize * 2);
        let mut non_twins = Vec::with_capacity((replicas - num_twins.min(replicas)) as usize);
        let mut remaining_twins = num_twins;
        let mut next_network = 1u32;

        for i in 1..=replicas {
            let replica = ReplicaId(i);
            if remaining_twins > 0 {
                twins.push(NodeId {
                    replica,
                    network: NetworkId(next_network),
                });
                twins.push(NodeId {
                    replica,
                    network: NetworkId(next_network + 1),
                });
                next_network += 2;
                remaining_twins -= 1;
            } else {
                non_twins.push(NodeId {
                    replica,
                    network: NetworkId(next_network),
                });
                next_network += 1;
            }
        }

        Roster { twins, non_twins }
    }

    /// Total participant count: `replicas + num_twins`.
    pub fn len(&self) -> usize {
        self.twins.len() + self.non_twins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The full roster in `nodes` order: twins first (allocation order),
    /// then non-twins. This is the vector a [`crate::Scenario`] exposes.
    pub fn all_nodes(&self) -> Vec<NodeId> {
        let mut all = self.twins.clone();
        all.extend(self.non_twins.iter().copied());
        all
    }
}
