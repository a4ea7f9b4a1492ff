//! Queue-driven subgraph motif search over attributed graphs.
//!
//! Given a small pattern graph (the motif) and a larger target graph (the
//! host), the engine enumerates every injective assignment of motif
//! vertices to host vertices that preserves the motif's edges, edge
//! directions and attribute constraints: subgraph monomorphisms by
//! default, induced isomorphisms with
//! [`MatchConfig::isomorphisms`](config::MatchConfig::isomorphisms).
//!
//! The search grows partial mappings one vertex at a time through a
//! pluggable work queue, so memory is bound by the queue policy rather
//! than recursion depth, and results can be listed, streamed lazily,
//! counted without allocation, or cut off at a limit.
//!
//! ```
//! use motif_search::{find_motifs, AttrGraph, MatchConfig};
//!
//! let mut motif = AttrGraph::directed();
//! motif.add_edge("a", "b");
//! motif.add_edge("b", "c");
//! motif.add_edge("c", "a");
//!
//! let mut host = AttrGraph::directed();
//! host.add_edge("x", "y");
//! host.add_edge("y", "z");
//! host.add_edge("z", "x");
//!
//! let found = find_motifs(&motif, &host, &MatchConfig::default()).unwrap();
//! assert_eq!(found.len(), 3); // the three rotations
//! ```

mod backbone;
mod motif_index;
mod search;

pub mod attrs;
pub mod compat;
pub mod config;
pub mod error;
pub mod graph;
pub mod interest;
pub mod queue;

pub use attrs::{attr_map, AttrMap, AttrValue};
pub use backbone::Backbone;
pub use compat::{attrs_subset, DefaultPredicates, Degrees, MatchPredicates};
pub use config::MatchConfig;
pub use error::MatchError;
pub use graph::{AttrGraph, GraphView};
pub use interest::uniform_node_interestingness;
pub use queue::{DequeQueue, InstrumentedQueue, QueuePolicy, WorkQueue};
pub use search::{Embedding, MotifMatcher, MotifsIter};

/// Finds every embedding of `motif` in `host`, honoring `config.limit`.
///
/// Interestingness maps, hints, custom predicates and custom queues are
/// available through [`MotifMatcher`].
pub fn find_motifs<M, H>(
    motif: &M,
    host: &H,
    config: &MatchConfig,
) -> Result<Vec<Embedding<M::Id, H::Id>>, MatchError>
where
    M: GraphView,
    H: GraphView,
{
    Ok(MotifMatcher::build(motif, host, config.clone())?.enumerate_all())
}

/// Streams embeddings of `motif` in `host` lazily.
///
/// The consumer decides when to stop; `config.limit` is ignored here.
pub fn find_motifs_iter<'h, M, H>(
    motif: &M,
    host: &'h H,
    config: &MatchConfig,
) -> Result<MotifsIter<'h, M::Id, H, DefaultPredicates, DequeQueue<Backbone<H::Id>>>, MatchError>
where
    M: GraphView,
    H: GraphView,
{
    Ok(MotifMatcher::build(motif, host, config.clone())?.into_iter())
}

/// Counts embeddings of `motif` in `host` without materializing them,
/// honoring `config.limit`.
pub fn count_motifs<M, H>(motif: &M, host: &H, config: &MatchConfig) -> Result<usize, MatchError>
where
    M: GraphView,
    H: GraphView,
{
    Ok(MotifMatcher::build(motif, host, config.clone())?.count_all())
}
