//! Read-only graph views.
//!
//! The engine never owns or mutates a graph; it consumes any type that can
//! answer neighbor, degree, edge-membership and attribute queries through
//! the [`GraphView`] trait. [`AttrGraph`] is the bundled implementation.

mod attr_graph;

pub use attr_graph::AttrGraph;

use std::fmt;
use std::hash::Hash;

use crate::attrs::AttrMap;

/// A read-only view of a directed or undirected attributed graph.
///
/// Implementations must guarantee:
/// - near-constant-time neighbor and edge lookup;
/// - iteration order that is stable for the lifetime of the value
///   (result determinism is derived from it);
/// - for undirected graphs, `neighbors_out` and `neighbors_in` return the
///   same neighbor set and all three degrees coincide;
/// - for directed graphs, `degree` is `degree_in + degree_out`.
pub trait GraphView {
    /// Vertex identifier. Opaque to the engine beyond equality and hashing.
    type Id: Clone + Eq + Hash + fmt::Debug;

    fn is_directed(&self) -> bool;

    fn vertex_count(&self) -> usize;

    /// All vertices, in stable order.
    fn vertices(&self) -> impl Iterator<Item = &Self::Id> + '_;

    /// Successors of `v` (all neighbors when undirected). Empty for an
    /// unknown vertex.
    fn neighbors_out(&self, v: &Self::Id) -> impl Iterator<Item = &Self::Id> + '_;

    /// Predecessors of `v` (all neighbors when undirected).
    fn neighbors_in(&self, v: &Self::Id) -> impl Iterator<Item = &Self::Id> + '_;

    fn degree_out(&self, v: &Self::Id) -> usize;

    fn degree_in(&self, v: &Self::Id) -> usize;

    fn degree(&self, v: &Self::Id) -> usize;

    /// Whether the edge `u -> v` exists (`u - v` when undirected).
    fn has_edge(&self, u: &Self::Id, v: &Self::Id) -> bool;

    /// The vertex attribute bag; empty for vertices without attributes.
    fn vertex_attrs(&self, v: &Self::Id) -> &AttrMap;

    /// The edge attribute bag, `None` when the edge is absent or unattributed.
    fn edge_attrs(&self, u: &Self::Id, v: &Self::Id) -> Option<&AttrMap>;

    fn contains_vertex(&self, v: &Self::Id) -> bool {
        self.vertices().any(|u| u == v)
    }
}
