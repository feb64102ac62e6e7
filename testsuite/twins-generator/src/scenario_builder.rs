// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::node::{NodeId, NodeSet};
use crate::twin_enum::TwinAssignment;

/// A partitioning of the full roster into at most `k` [`NodeSet`]s. A slot
/// is `None` when its declared size is 0 — this crate represents an empty
/// partition as absent rather than as a present-but-empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionScenario(pub Vec<Option<NodeSet>>);

impl PartitionScenario {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_populated(&self, i: usize) -> bool {
        self.0[i].is_some()
    }

    /// The union of every partition's members, i.e. the whole roster.
    pub fn all_members(&self) -> NodeSet {
        self.0
            .iter()
            .filter_map(|s| s.as_ref())
            .flat_map(|s| s.iter().copied())
            .collect()
    }
}

/// Materializes a concrete [`PartitionScenario`] from a feasible twin
/// assignment: twins are placed first (consuming `twins` in roster order),
/// then each partition is filled up to its declared size with nodes drawn
/// from `non_twins` in roster order, the cursor shared across partitions.
pub fn build_scenario(sz: &[u32], ta: &TwinAssignment, twins: &[NodeId], non_twins: &[NodeId]) -> PartitionScenario {
    let k = sz.len();
    let mut partitions: Vec<Option<NodeSet>> = sz
        .iter()
        .map(|&s| if s > 0 { Some(NodeSet::new()) } else { None })
        .collect();

    let mut twin_cursor = 0usize;
    for &(a, b) in ta {
        place(&mut partitions, a as usize, twins[twin_cursor]);
        twin_cursor += 1;
        place(&mut partitions, b as usize, twins[twin_cursor]);
        twin_cursor += 1;
    }

    let mut node_cursor = 0usize;
    for i in 0..k {
        let target = sz[i] as usize;
        while partitions[i].as_ref().map_or(0, |s| s.len()) < target {
            place(&mut partitions, i, non_twins[node_cursor]);
            node_cursor += 1;
        }
    }

    PartitionScenario(partitions)
}

fn place(partitions: &mut [Option<NodeSet>], slot: usize, node: NodeId) {
    partitions[slot]
        .get_or_insert_with(NodeSet::new)
        .insert(node);
}
