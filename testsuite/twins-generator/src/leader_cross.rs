// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::node::ReplicaId;
use crate::scenario_builder::PartitionScenario;

/// One round's worth of configuration: who leads, and how the roster is
/// partitioned for the duration of that round.
#[derive(Debug, Clone)]
pub struct ViewSpec {
    pub leader: ReplicaId,
    pub partitions: PartitionScenario,
}

/// `LP`: the flat list of `(leader, partition scenario)` pairs every round
/// draws from. Leader varies fastest, so `LP[i] = (i % replicas, PS[i /
/// replicas])`.
pub fn leader_cross(partition_scenarios: Vec<PartitionScenario>, replicas: u32) -> Vec<ViewSpec> {
    let mut lp = Vec::with_capacity(partition_scenarios.len() * replicas as usize);
    for p in partition_scenarios {
        for r in 1..=replicas {
            lp.push(ViewSpec {
                leader: ReplicaId(r),
                partitions: p.clone(),
            });
        }
    }
    lp
}
