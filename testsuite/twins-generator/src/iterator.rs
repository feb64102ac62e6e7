// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::leader_cross::ViewSpec;
use crate::node::NodeId;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// One fully-materialized scenario: the fixed global roster plus, for each
/// round, a leader and a partitioning of that roster.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub nodes: Vec<NodeId>,
    pub views: Vec<ViewSpec>,
}

/// Lazily iterates the `rounds`-fold Cartesian product of `LP`, advancing
/// a little-endian odometer from the last round backwards. Once a carry
/// propagates past round 0 the iterator latches exhausted and `next`
/// returns `None` forever after, rather than re-emitting the all-zero
/// state (see spec.md's Open Question in §9).
pub struct ScenarioIterator {
    lp: Vec<ViewSpec>,
    nodes: Vec<NodeId>,
    rounds: usize,
    indices: Vec<usize>,
    offsets: Vec<usize>,
    exhausted: bool,
}

impl ScenarioIterator {
    pub fn new(lp: Vec<ViewSpec>, nodes: Vec<NodeId>, rounds: u32) -> Self {
        let rounds = rounds as usize;
        let exhausted = rounds == 0 || lp.is_empty();
        ScenarioIterator {
            lp,
            nodes,
            rounds,
            indices: vec![0; rounds],
            offsets: vec![0; rounds],
            exhausted,
        }
    }

    pub fn lp_len(&self) -> usize {
        self.lp.len()
    }

    /// Applies a seeded Fisher-Yates shuffle to `LP` and samples a fresh
    /// per-round offset. Intended to be called before iteration begins;
    /// calling it mid-iteration is not a tested property of this crate.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.lp.shuffle(&mut rng);
        let len = self.lp.len();
        for offset in &mut self.offsets {
            *offset = if len == 0 { 0 } else { rng.gen_range(0, len) };
        }
    }

    pub fn next_scenario(&mut self) -> Option<Scenario> {
        if self.exhausted {
            return None;
        }

        let len = self.lp.len();
        let views: Vec<ViewSpec> = (0..self.rounds)
            .map(|i| {
                let j = (self.indices[i] + self.offsets[i]) % len;
                self.lp[j].clone()
            })
            .collect();

        self.advance();

        Some(Scenario {
            nodes: self.nodes.clone(),
            views,
        })
    }

    fn advance(&mut self) {
        let len = self.lp.len();
        for i in (0..self.rounds).rev() {
            self.indices[i] += 1;
            if self.indices[i] < len {
                return;
            }
            self.indices[i] = 0;
        }
        // Carry propagated past round 0: no more scenarios.
        self.exhausted = true;
    }
}

impl Iterator for ScenarioIterator {
    type Item = Scenario;

    fn next(&mut self) -> Option<Scenario> {
        self.next_scenario()
    }
}
