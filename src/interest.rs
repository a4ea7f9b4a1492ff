//! Interestingness: per-motif-vertex expansion priority.
//!
//! Higher values mean "expand earlier". The engine resolves the caller's
//! map to a dense vector once before the search and never mutates it;
//! ordering is total via `f64::total_cmp` with ties broken by motif
//! insertion order.

use std::fmt;
use std::hash::Hash;

use ahash::AHashMap;

use crate::error::MatchError;
use crate::graph::GraphView;
use crate::motif_index::MotifIndex;

/// The default interestingness: every motif vertex rated 1.0, so expansion
/// order degenerates to motif insertion order.
pub fn uniform_node_interestingness<M: GraphView>(motif: &M) -> AHashMap<M::Id, f64> {
    motif.vertices().map(|v| (v.clone(), 1.0)).collect()
}

/// Resolves a user map to a dense vector over motif indices.
///
/// Vertices missing from the map default to 0.0; keys naming vertices the
/// motif lacks are an input error.
pub(crate) fn resolve<V>(
    index: &MotifIndex<V>,
    user: &AHashMap<V, f64>,
) -> Result<Vec<f64>, MatchError>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    let mut interest = vec![0.0; index.len()];
    for (vertex, &value) in user {
        match index.index_of(vertex) {
            Some(m) => interest[m as usize] = value,
            None => return Err(MatchError::UnknownMotifVertex(format!("{vertex:?}"))),
        }
    }
    Ok(interest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AttrGraph;

    fn path_motif() -> AttrGraph<&'static str> {
        let mut g = AttrGraph::directed();
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        g
    }

    #[test]
    fn uniform_rates_every_vertex_once() {
        let motif = path_motif();
        let uniform = uniform_node_interestingness(&motif);
        assert_eq!(uniform.len(), 3);
        assert!(uniform.values().all(|&v| v == 1.0));
    }

    #[test]
    fn resolve_defaults_missing_vertices_to_zero() {
        let motif = path_motif();
        let index = MotifIndex::build(&motif, true);
        let mut user = AHashMap::new();
        user.insert("c", 5.0);
        let interest = resolve(&index, &user).unwrap();
        assert_eq!(interest, vec![0.0, 0.0, 5.0]);
    }

    #[test]
    fn resolve_rejects_unknown_vertices() {
        let motif = path_motif();
        let index = MotifIndex::build(&motif, true);
        let mut user = AHashMap::new();
        user.insert("zz", 1.0);
        assert!(matches!(
            resolve(&index, &user),
            Err(MatchError::UnknownMotifVertex(_))
        ));
    }
}
