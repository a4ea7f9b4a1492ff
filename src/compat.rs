//! Per-pair match predicates.
//!
//! Three checks gate every assignment of a motif vertex to a host vertex:
//! a structural degree bound, a node-attribute match and an edge-attribute
//! match. All three are pluggable through [`MatchPredicates`]; the
//! provided defaults mirror the classic semantics: a host vertex must
//! dominate the motif vertex's degree, and every attribute present on the
//! motif side must be present with an equal value on the host side.
//!
//! Predicates must be pure: the engine memoizes the node-attribute check
//! per `(motif vertex, host vertex)` pair for the duration of one search.

use crate::attrs::AttrMap;
use crate::graph::GraphView;

/// Effective degrees of a motif vertex, self loops included.
///
/// Under an undirected search these are projection degrees: `total` counts
/// distinct neighbors regardless of edge direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Degrees {
    pub incoming: usize,
    pub outgoing: usize,
    pub total: usize,
}

/// Pluggable match predicates.
///
/// `MV` is the motif vertex id type, `H` the host graph. Implementations
/// override whichever checks they care about; unimplemented methods keep
/// the default semantics.
pub trait MatchPredicates<MV, H: GraphView> {
    /// A host vertex of lower degree cannot host the motif vertex's full
    /// neighborhood. For directed searches in- and out-degrees are bounded
    /// separately.
    fn is_structural_match(
        &self,
        directed: bool,
        _motif_vertex: &MV,
        motif_degrees: Degrees,
        host: &H,
        candidate: &H::Id,
    ) -> bool {
        if directed {
            host.degree_in(candidate) >= motif_degrees.incoming
                && host.degree_out(candidate) >= motif_degrees.outgoing
        } else {
            host.degree(candidate) >= motif_degrees.total
        }
    }

    /// Every attribute on the motif vertex must exist with an equal value
    /// on the host vertex. Attributes absent from the motif impose no
    /// constraint.
    fn is_node_attr_match(&self, motif_attrs: &AttrMap, host_attrs: &AttrMap) -> bool {
        attrs_subset(motif_attrs, host_attrs)
    }

    /// Same subset rule, applied to edge attribute bags.
    fn is_edge_attr_match(&self, motif_attrs: &AttrMap, host_attrs: &AttrMap) -> bool {
        attrs_subset(motif_attrs, host_attrs)
    }
}

/// The default predicate set: degree dominance plus attribute subset
/// equality on vertices and edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPredicates;

impl<MV, H: GraphView> MatchPredicates<MV, H> for DefaultPredicates {}

/// True when every entry of `needle` appears in `haystack` with an equal
/// value.
pub fn attrs_subset(needle: &AttrMap, haystack: &AttrMap) -> bool {
    needle.iter().all(|(k, v)| haystack.get(k) == Some(v))
}
