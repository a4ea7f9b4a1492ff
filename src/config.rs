//! Search configuration.
//!
//! `MatchConfig` carries the plain-data options of a search; per-search
//! extras that depend on the graph id types (interestingness maps, hints,
//! custom predicates or queues) are supplied through the
//! [`MotifMatcher`](crate::MotifMatcher) builder instead.

use serde::{Deserialize, Serialize};

use crate::queue::QueuePolicy;

/// Global search options.
///
/// - `directed`: `None` infers directedness from the motif. `Some(false)`
///   on directed graphs searches their undirected projection;
///   `Some(true)` requires both graphs to be directed.
/// - `queue_policy`: expansion order; depth-first is the default and the
///   right choice for large hosts.
/// - `isomorphisms_only`: when true, motif non-edges must map to host
///   non-edges (induced subgraph semantics) instead of plain
///   monomorphisms.
/// - `limit`: stop after this many completions. Ignored by the streaming
///   entry point, where the consumer decides when to stop.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub directed: Option<bool>,
    pub queue_policy: QueuePolicy,
    pub isomorphisms_only: bool,
    pub limit: Option<usize>,
}

impl MatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: default monomorphism search.
    #[must_use]
    pub fn monomorphisms() -> Self {
        Self::default()
    }

    /// Convenience: induced isomorphism search.
    #[must_use]
    pub fn isomorphisms() -> Self {
        MatchConfig {
            isomorphisms_only: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = Some(directed);
        self
    }

    #[must_use]
    pub fn with_queue_policy(mut self, policy: QueuePolicy) -> Self {
        self.queue_policy = policy;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_isomorphisms_only(mut self, isomorphisms_only: bool) -> Self {
        self.isomorphisms_only = isomorphisms_only;
        self
    }
}
