//! The motif search engine.
//!
//! The search grows partial mappings ("backbones") one motif vertex at a
//! time, driven by a work queue: seed, pop, expand, push the surviving
//! extensions, emit completions. Because the next motif vertex to assign
//! is a deterministic function of the mapped set alone, every valid
//! completion is produced exactly once; no post-hoc deduplication is
//! needed.

mod heuristics;

use std::fmt;
use std::hash::Hash;

use ahash::AHashMap;
use itertools::Itertools;

use crate::attrs::empty_attrs;
use crate::backbone::Backbone;
use crate::compat::{DefaultPredicates, MatchPredicates};
use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::graph::GraphView;
use crate::interest;
use crate::motif_index::MotifIndex;
use crate::queue::{DequeQueue, WorkQueue};

/// A completed assignment of every motif vertex to a distinct host vertex.
///
/// Pairs are ordered by motif insertion order. Motifs are small, so
/// lookups scan.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Embedding<MV, HV> {
    pairs: Vec<(MV, HV)>,
}

impl<MV, HV> Embedding<MV, HV> {
    /// The host vertex assigned to `motif_vertex`.
    pub fn get(&self, motif_vertex: &MV) -> Option<&HV>
    where
        MV: PartialEq,
    {
        self.pairs
            .iter()
            .find(|(m, _)| m == motif_vertex)
            .map(|(_, h)| h)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MV, &HV)> + '_ {
        self.pairs.iter().map(|(m, h)| (m, h))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_pairs(self) -> Vec<(MV, HV)> {
        self.pairs
    }
}

impl<MV: fmt::Debug, HV: fmt::Debug> fmt::Display for Embedding<MV, HV> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .pairs
            .iter()
            .map(|(m, h)| format!("{m:?} -> {h:?}"))
            .join(", ");
        write!(f, "{{{body}}}")
    }
}

/// Entry point for motif searches.
///
/// Built from a motif, a host and a [`MatchConfig`]; optionally refined
/// with an interestingness map, seed hints, custom predicates or a custom
/// queue; then consumed by [`enumerate_all`](Self::enumerate_all),
/// [`count_all`](Self::count_all) or iteration.
pub struct MotifMatcher<'h, V, H: GraphView, P = DefaultPredicates> {
    host: &'h H,
    index: MotifIndex<V>,
    interest: Vec<f64>,
    predicates: P,
    config: MatchConfig,
    hints: Vec<Vec<(V, H::Id)>>,
    directed: bool,
}

impl<'h, V, H> MotifMatcher<'h, V, H, DefaultPredicates>
where
    V: Clone + Eq + Hash + fmt::Debug,
    H: GraphView,
{
    /// Validates the inputs and builds a matcher.
    ///
    /// Directedness is taken from `config.directed`, or inferred from the
    /// motif; a directed search over an undirected motif or host fails
    /// fast.
    pub fn build<M>(motif: &M, host: &'h H, config: MatchConfig) -> Result<Self, MatchError>
    where
        M: GraphView<Id = V>,
    {
        let directed = config.directed.unwrap_or_else(|| motif.is_directed());
        if directed && !(motif.is_directed() && host.is_directed()) {
            return Err(MatchError::DirectednessMismatch);
        }

        let index = MotifIndex::build(motif, directed);
        let interest = vec![1.0; index.len()];
        Ok(MotifMatcher {
            host,
            index,
            interest,
            predicates: DefaultPredicates,
            config,
            hints: Vec::new(),
            directed,
        })
    }
}

impl<'h, V, H, P> MotifMatcher<'h, V, H, P>
where
    V: Clone + Eq + Hash + fmt::Debug,
    H: GraphView,
    P: MatchPredicates<V, H>,
{
    /// Replaces the uniform interestingness with a user map. Vertices
    /// missing from the map rate 0.0; unknown vertices are an error.
    pub fn with_interestingness(
        mut self,
        map: &AHashMap<V, f64>,
    ) -> Result<Self, MatchError> {
        self.interest = interest::resolve(&self.index, map)?;
        Ok(self)
    }

    /// Seeds the search from partial mappings instead of single vertices.
    ///
    /// Each hint is validated against every backbone invariant when the
    /// search starts; hints that violate one are dropped silently (logged
    /// at debug level).
    #[must_use]
    pub fn with_hints<I>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = Vec<(V, H::Id)>>,
    {
        self.hints.extend(hints);
        self
    }

    /// Swaps in a custom predicate set.
    #[must_use]
    pub fn with_predicates<P2>(self, predicates: P2) -> MotifMatcher<'h, V, H, P2>
    where
        P2: MatchPredicates<V, H>,
    {
        MotifMatcher {
            host: self.host,
            index: self.index,
            interest: self.interest,
            predicates,
            config: self.config,
            hints: self.hints,
            directed: self.directed,
        }
    }

    /// Runs the search to completion and collects every embedding, up to
    /// the configured limit.
    pub fn enumerate_all(self) -> Vec<Embedding<V, H::Id>> {
        let limit = self.config.limit;
        let results: Vec<_> = match limit {
            Some(n) => self.into_iter().take(n).collect(),
            None => self.into_iter().collect(),
        };
        tracing::info!("search complete: {} embeddings", results.len());
        results
    }

    /// Runs the search keeping only a counter, up to the configured limit.
    pub fn count_all(self) -> usize {
        let limit = self.config.limit;
        let count = match limit {
            Some(n) => self.into_iter().take(n).count(),
            None => self.into_iter().count(),
        };
        tracing::info!("search complete: {count} embeddings");
        count
    }

    /// Streams embeddings through a caller-supplied queue, e.g. an
    /// [`InstrumentedQueue`](crate::queue::InstrumentedQueue).
    pub fn into_iter_with_queue<Q>(self, mut queue: Q) -> MotifsIter<'h, V, H, P, Q>
    where
        Q: WorkQueue<Backbone<H::Id>>,
    {
        let MotifMatcher {
            host,
            index,
            interest,
            predicates,
            config,
            hints,
            directed,
        } = self;

        tracing::info!(
            "starting motif search: motif vertices: {}, host vertices: {}",
            index.len(),
            host.vertex_count()
        );

        let mut core = SearchCore {
            host,
            index,
            interest,
            predicates,
            directed,
            isomorphisms_only: config.isomorphisms_only,
            attr_cache: AHashMap::new(),
            emitted: 0,
        };
        core.seed(&hints, &mut queue);
        MotifsIter { core, queue }
    }
}

impl<'h, V, H, P> IntoIterator for MotifMatcher<'h, V, H, P>
where
    V: Clone + Eq + Hash + fmt::Debug,
    H: GraphView,
    P: MatchPredicates<V, H>,
{
    type Item = Embedding<V, H::Id>;
    type IntoIter = MotifsIter<'h, V, H, P, DequeQueue<Backbone<H::Id>>>;

    fn into_iter(self) -> Self::IntoIter {
        let queue = DequeQueue::new(self.config.queue_policy);
        self.into_iter_with_queue(queue)
    }
}

/// A lazy stream of embeddings.
///
/// Each `next` call pops and expands backbones until a completion
/// surfaces; all search state lives in the iterator, so consumers may stop
/// at any point. The stream is not restartable after exhaustion.
pub struct MotifsIter<'h, V, H: GraphView, P, Q> {
    core: SearchCore<'h, V, H, P>,
    queue: Q,
}

impl<'h, V, H: GraphView, P, Q> MotifsIter<'h, V, H, P, Q> {
    /// The underlying queue, e.g. to read instrumentation after a run.
    pub fn queue(&self) -> &Q {
        &self.queue
    }

    /// How many embeddings this stream has produced so far.
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.core.emitted
    }
}

impl<'h, V, H, P, Q> Iterator for MotifsIter<'h, V, H, P, Q>
where
    V: Clone + Eq + Hash + fmt::Debug,
    H: GraphView,
    P: MatchPredicates<V, H>,
    Q: WorkQueue<Backbone<H::Id>>,
{
    type Item = Embedding<V, H::Id>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(backbone) = self.queue.pop() {
            if backbone.len() == self.core.index.len() {
                self.core.emitted += 1;
                return Some(self.core.to_embedding(&backbone));
            }
            self.core.extend_into(&backbone, &mut self.queue);
        }
        None
    }
}

/// Mutable search state shared by every mode.
struct SearchCore<'h, V, H: GraphView, P> {
    host: &'h H,
    index: MotifIndex<V>,
    interest: Vec<f64>,
    predicates: P,
    directed: bool,
    isomorphisms_only: bool,
    /// Memo for the node-attribute predicate, keyed motif index then host
    /// vertex. Lives for one search only.
    attr_cache: AHashMap<u32, AHashMap<H::Id, bool>>,
    emitted: usize,
}

enum CandidateBase<'b, HId> {
    /// Host vertices with an edge toward the image of a mapped neighbor.
    IntoImage(&'b HId),
    /// Host vertices with an edge from the image of a mapped neighbor.
    FromImage(&'b HId),
    /// Projected neighbors of the image of a mapped neighbor.
    AroundImage(&'b HId),
    /// No mapped motif neighbor constrains the choice.
    AllVertices,
}

impl<'h, V, H, P> SearchCore<'h, V, H, P>
where
    V: Clone + Eq + Hash + fmt::Debug,
    H: GraphView,
    P: MatchPredicates<V, H>,
{
    fn seed<Q>(&mut self, hints: &[Vec<(V, H::Id)>], queue: &mut Q)
    where
        Q: WorkQueue<Backbone<H::Id>>,
    {
        if !hints.is_empty() {
            for hint in hints {
                match self.validate_hint(hint) {
                    Some(backbone) => queue.push(backbone),
                    None => {
                        tracing::debug!("dropping hint that violates backbone invariants: {hint:?}");
                    }
                }
            }
            tracing::debug!("seeded {} of {} hints", queue.len(), hints.len());
            return;
        }

        if self.index.len() == 0 {
            return;
        }

        let mut first = 0u32;
        for m in 1..self.index.len() as u32 {
            if self.interest[m as usize].total_cmp(&self.interest[first as usize])
                == std::cmp::Ordering::Greater
            {
                first = m;
            }
        }

        let host = self.host;
        for x in host.vertices() {
            if !self.predicates.is_structural_match(
                self.directed,
                self.index.id(first),
                self.index.degrees(first),
                host,
                x,
            ) {
                continue;
            }
            if !self.node_attr_cached(first, x) {
                continue;
            }
            if self.index.has_self_loop(first) {
                if !self.host_has_edge(x, x) || !self.edge_attr_ok(first, first, x, x) {
                    continue;
                }
            } else if self.isomorphisms_only && self.host_has_edge(x, x) {
                continue;
            }
            queue.push(Backbone::singleton(first, x.clone()));
        }
        tracing::debug!(
            "seeded {} singleton backbones for motif vertex {:?}",
            queue.len(),
            self.index.id(first)
        );
    }

    /// Expands one backbone: picks the next motif vertex, computes its
    /// candidate host vertices and enqueues every extension that survives
    /// the filters.
    fn extend_into<Q>(&mut self, backbone: &Backbone<H::Id>, queue: &mut Q)
    where
        Q: WorkQueue<Backbone<H::Id>>,
    {
        let Some(m_next) = heuristics::choose_next(&self.index, &self.interest, backbone) else {
            return;
        };

        let candidates = self.candidate_pool(m_next, backbone);
        if candidates.is_empty() {
            tracing::trace!(
                "dead end: no candidates for motif vertex {:?}",
                self.index.id(m_next)
            );
            return;
        }

        let mut kept = 0usize;
        for x in candidates {
            if self.candidate_ok(m_next, &x, backbone) {
                queue.push(backbone.extended(m_next, x));
                kept += 1;
            }
        }
        tracing::trace!(
            "motif vertex {:?}: {} extensions enqueued at depth {}",
            self.index.id(m_next),
            kept,
            backbone.len()
        );
    }

    /// The unfiltered candidate pool for `m_next`: the host neighbor list
    /// of one mapped motif neighbor's image, chosen smallest; or every
    /// host vertex when no mapped neighbor constrains the choice. Edges
    /// toward the remaining mapped neighbors are verified per candidate in
    /// `candidate_ok`, which keeps candidate order deterministic without
    /// materializing set intersections.
    fn candidate_pool(&self, m_next: u32, backbone: &Backbone<H::Id>) -> Vec<H::Id> {
        let host = self.host;
        let mut base = CandidateBase::AllVertices;
        let mut base_size = usize::MAX;

        if self.directed {
            for &k in self.index.out_neighbors(m_next) {
                if let Some(hk) = backbone.get(k) {
                    let size = host.degree_in(hk);
                    if size < base_size {
                        base_size = size;
                        base = CandidateBase::IntoImage(hk);
                    }
                }
            }
            for &k in self.index.in_neighbors(m_next) {
                if let Some(hk) = backbone.get(k) {
                    let size = host.degree_out(hk);
                    if size < base_size {
                        base_size = size;
                        base = CandidateBase::FromImage(hk);
                    }
                }
            }
        } else {
            for &k in self.index.neighbors(m_next) {
                if let Some(hk) = backbone.get(k) {
                    let size = host.degree(hk);
                    if size < base_size {
                        base_size = size;
                        base = CandidateBase::AroundImage(hk);
                    }
                }
            }
        }

        match base {
            CandidateBase::IntoImage(hk) => host.neighbors_in(hk).cloned().collect(),
            CandidateBase::FromImage(hk) => host.neighbors_out(hk).cloned().collect(),
            CandidateBase::AroundImage(hk) => self.projected_neighbors(hk),
            CandidateBase::AllVertices => host.vertices().cloned().collect(),
        }
    }

    /// All filters of the extension step: injectivity, the structural
    /// bound, the memoized node-attribute predicate, edge existence and
    /// edge attributes toward every mapped motif neighbor, self-loop
    /// consistency, and the induced non-edge checks when isomorphism
    /// semantics are on.
    fn candidate_ok(&mut self, m_next: u32, x: &H::Id, backbone: &Backbone<H::Id>) -> bool {
        if backbone.contains_host(x) {
            return false;
        }
        if !self.predicates.is_structural_match(
            self.directed,
            self.index.id(m_next),
            self.index.degrees(m_next),
            self.host,
            x,
        ) {
            return false;
        }
        if !self.node_attr_cached(m_next, x) {
            return false;
        }

        if self.index.has_self_loop(m_next) {
            if !self.host_has_edge(x, x) || !self.edge_attr_ok(m_next, m_next, x, x) {
                return false;
            }
        } else if self.isomorphisms_only && self.host_has_edge(x, x) {
            return false;
        }

        if self.directed {
            for &k in self.index.out_neighbors(m_next) {
                if let Some(hk) = backbone.get(k) {
                    if !self.host.has_edge(x, hk) || !self.edge_attr_ok(m_next, k, x, hk) {
                        return false;
                    }
                }
            }
            for &k in self.index.in_neighbors(m_next) {
                if let Some(hk) = backbone.get(k) {
                    if !self.host.has_edge(hk, x) || !self.edge_attr_ok(k, m_next, hk, x) {
                        return false;
                    }
                }
            }
        } else {
            for &k in self.index.neighbors(m_next) {
                if let Some(hk) = backbone.get(k) {
                    if !self.host_has_edge(x, hk) || !self.edge_attr_ok(m_next, k, x, hk) {
                        return false;
                    }
                }
            }
        }

        if self.isomorphisms_only && !self.induced_ok(m_next, x, backbone) {
            return false;
        }
        true
    }

    /// Under isomorphism semantics every motif non-edge between the new
    /// vertex and the mapped set must correspond to a host non-edge.
    fn induced_ok(&self, m_next: u32, x: &H::Id, backbone: &Backbone<H::Id>) -> bool {
        for (k, hk) in backbone.iter() {
            if self.directed {
                if !self.index.has_edge(m_next, k) && self.host.has_edge(x, hk) {
                    return false;
                }
                if !self.index.has_edge(k, m_next) && self.host.has_edge(hk, x) {
                    return false;
                }
            } else if !self.index.has_edge(m_next, k) && self.host_has_edge(x, hk) {
                return false;
            }
        }
        true
    }

    /// Validates one hint against every backbone invariant. Returns `None`
    /// when any is violated.
    fn validate_hint(&mut self, pairs: &[(V, H::Id)]) -> Option<Backbone<H::Id>> {
        let mut resolved: Vec<(u32, H::Id)> = Vec::with_capacity(pairs.len());
        for (mv, hv) in pairs {
            let m = self.index.index_of(mv)?;
            if !self.host.contains_vertex(hv) {
                return None;
            }
            if resolved.iter().any(|(pm, ph)| *pm == m || ph == hv) {
                return None;
            }
            resolved.push((m, hv.clone()));
        }
        let backbone = Backbone::from_pairs(resolved);

        for (m, h) in backbone.iter() {
            if !self.node_attr_cached(m, h) {
                return None;
            }
        }

        for (a, ha) in backbone.iter() {
            if self.index.has_self_loop(a) {
                if !self.host_has_edge(ha, ha) || !self.edge_attr_ok(a, a, ha, ha) {
                    return None;
                }
            } else if self.isomorphisms_only && self.host_has_edge(ha, ha) {
                return None;
            }

            for (b, hb) in backbone.iter() {
                if a == b {
                    continue;
                }
                if self.index.has_edge(a, b) {
                    if !self.host_has_edge(ha, hb) || !self.edge_attr_ok(a, b, ha, hb) {
                        return None;
                    }
                } else if self.isomorphisms_only && self.host_has_edge(ha, hb) {
                    return None;
                }
            }
        }
        Some(backbone)
    }

    fn node_attr_cached(&mut self, m: u32, x: &H::Id) -> bool {
        if let Some(&verdict) = self.attr_cache.get(&m).and_then(|per_host| per_host.get(x)) {
            return verdict;
        }
        let verdict = self
            .predicates
            .is_node_attr_match(self.index.vertex_attrs(m), self.host.vertex_attrs(x));
        self.attr_cache.entry(m).or_default().insert(x.clone(), verdict);
        verdict
    }

    fn edge_attr_ok(&self, ma: u32, mb: u32, ha: &H::Id, hb: &H::Id) -> bool {
        let motif_bag = self.index.edge_attrs(ma, mb).unwrap_or_else(|| empty_attrs());
        let host_bag = if self.directed {
            self.host.edge_attrs(ha, hb)
        } else {
            self.host.edge_attrs(ha, hb).or_else(|| self.host.edge_attrs(hb, ha))
        };
        self.predicates
            .is_edge_attr_match(motif_bag, host_bag.unwrap_or_else(|| empty_attrs()))
    }

    /// Edge existence under the effective directedness: an undirected
    /// search over a directed host accepts an edge in either direction.
    fn host_has_edge(&self, u: &H::Id, v: &H::Id) -> bool {
        if self.directed {
            self.host.has_edge(u, v)
        } else {
            self.host.has_edge(u, v) || self.host.has_edge(v, u)
        }
    }

    /// Neighbors of a host vertex under the effective directedness.
    fn projected_neighbors(&self, v: &H::Id) -> Vec<H::Id> {
        let host = self.host;
        if !host.is_directed() {
            return host.neighbors_out(v).cloned().collect();
        }
        let mut neighbors: Vec<H::Id> = host.neighbors_out(v).cloned().collect();
        for u in host.neighbors_in(v) {
            if !host.has_edge(v, u) {
                neighbors.push(u.clone());
            }
        }
        neighbors
    }

    fn to_embedding(&self, backbone: &Backbone<H::Id>) -> Embedding<V, H::Id> {
        let pairs = backbone
            .iter()
            .map(|(m, h)| (self.index.id(m).clone(), h.clone()))
            .collect();
        Embedding { pairs }
    }
}
