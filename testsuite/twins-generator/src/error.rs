// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TwinsError {
    #[error("num_twins ({num_twins}) exceeds replicas ({replicas})")]
    TooManyTwins { num_twins: u32, replicas: u32 },

    #[error("partitions must be at least 1")]
    NoPartitions,

    #[error("replicas must be at least 1")]
    NoReplicas,
}
