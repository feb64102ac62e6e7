// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Enumerates where a twin pair can land among `k` partitions, and the
//! Cartesian product of those placements across however many twin pairs
//! the cluster has.

/// An ordered placement `(a, b)` with `0 <= a <= b < k`: one twin of the
/// pair goes to partition `a`, the other to partition `b` (`a == b` means
/// both land in the same partition).
pub type TwinPlacement = (u32, u32);

/// All `(a, b)` with `0 <= a <= b < k`, ordered lexicographically.
/// `k(k+1)/2` entries.
pub fn twin_pairs(k: u32) -> Vec<TwinPlacement> {
    let mut out = Vec::with_capacity((k as usize).saturating_mul(k as usize + 1) / 2);
    for a in 0..k {
        for b in a..k {
            out.push((a, b));
        }
    }
    out
}

/// One twin-assignment tuple: the placement chosen for each of the
/// cluster's twin pairs, indexed in roster twin-pair order.
pub type TwinAssignment = Vec<TwinPlacement>;

/// `twin_pairs(k)^num_twins`, varying fastest in the last tuple position.
/// `num_twins == 0` yields a single empty tuple.
pub fn twin_assignments(k: u32, num_twins: u32) -> Vec<TwinAssignment> {
    let placements = twin_pairs(k);
    if num_twins == 0 {
        return vec![Vec::new()];
    }
    let mut out = vec![Vec::new()];
    for _ in 0..num_twins {
        let mut next = Vec::with_capacity(out.len() * placements.len());
        for prefix in &out {
            for p in &placements {
                let mut tuple = prefix.clone();
                tuple.push(*p);
                next.push(tuple);
            }
        }
        out = next;
    }
    out
}
