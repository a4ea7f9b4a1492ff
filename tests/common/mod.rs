//! Shared harness: graph builders, deterministic scrambled graphs and a
//! brute-force oracle the engine is checked against.
#![allow(dead_code)]

use std::sync::Once;

use itertools::Itertools;
use motif_search::{attrs_subset, AttrGraph, AttrMap, GraphView};

static INIT: Once = Once::new();

/// Test logging, captured by the harness. Enable with RUST_LOG.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn graph_from_edges<V>(directed: bool, edges: &[(V, V)]) -> AttrGraph<V>
where
    V: Clone + Eq + std::hash::Hash + std::fmt::Debug,
{
    let mut g = if directed {
        AttrGraph::directed()
    } else {
        AttrGraph::undirected()
    };
    for (u, v) in edges {
        g.add_edge(u.clone(), v.clone());
    }
    g
}

pub fn complete_graph(n: u32) -> AttrGraph<u32> {
    let mut g = AttrGraph::undirected();
    for v in 0..n {
        g.add_vertex(v);
    }
    for u in 0..n {
        for v in (u + 1)..n {
            g.add_edge(u, v);
        }
    }
    g
}

pub fn star_graph(leaves: u32) -> AttrGraph<u32> {
    let mut g = AttrGraph::undirected();
    g.add_vertex(0);
    for v in 1..=leaves {
        g.add_edge(0, v);
    }
    g
}

/// A deterministic pseudo-random simple graph (xorshift-driven), the
/// stand-in for the random hosts the reference implementation is tested
/// against.
pub fn scrambled_graph(n: u32, edge_target: usize, directed: bool, seed: u64) -> AttrGraph<u32> {
    assert!(n >= 2);
    let mut g = if directed {
        AttrGraph::directed()
    } else {
        AttrGraph::undirected()
    };
    for v in 0..n {
        g.add_vertex(v);
    }

    let mut state = seed | 1;
    let mut step = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let mut added = 0;
    while added < edge_target {
        let u = (step() % u64::from(n)) as u32;
        let v = (step() % u64::from(n)) as u32;
        if u == v || g.has_edge(&u, &v) {
            continue;
        }
        g.add_edge(u, v);
        added += 1;
    }
    g
}

fn eff_has_edge<G: GraphView>(g: &G, u: &G::Id, v: &G::Id, directed: bool) -> bool {
    if directed {
        g.has_edge(u, v)
    } else {
        g.has_edge(u, v) || g.has_edge(v, u)
    }
}

fn eff_edge_attrs<G: GraphView>(g: &G, u: &G::Id, v: &G::Id, directed: bool) -> AttrMap {
    let bag = if directed {
        g.edge_attrs(u, v)
    } else {
        g.edge_attrs(u, v).or_else(|| g.edge_attrs(v, u))
    };
    bag.cloned().unwrap_or_default()
}

/// Enumerates embeddings by checking every injective assignment, the
/// ground truth the engine must reproduce exactly.
pub fn oracle_embeddings<M, H>(
    motif: &M,
    host: &H,
    directed: bool,
    induced: bool,
) -> Vec<Vec<(M::Id, H::Id)>>
where
    M: GraphView,
    H: GraphView,
{
    let motif_vs: Vec<&M::Id> = motif.vertices().collect();
    let host_vs: Vec<&H::Id> = host.vertices().collect();
    let k = motif_vs.len();

    let mut found = Vec::new();
    if k > host_vs.len() {
        return found;
    }

    'candidates: for assignment in host_vs.into_iter().permutations(k) {
        for i in 0..k {
            if !attrs_subset(motif.vertex_attrs(motif_vs[i]), host.vertex_attrs(assignment[i])) {
                continue 'candidates;
            }
        }
        for i in 0..k {
            for j in 0..k {
                let in_motif = eff_has_edge(motif, motif_vs[i], motif_vs[j], directed);
                let in_host = eff_has_edge(host, assignment[i], assignment[j], directed);
                if in_motif {
                    if !in_host {
                        continue 'candidates;
                    }
                    let motif_bag = eff_edge_attrs(motif, motif_vs[i], motif_vs[j], directed);
                    let host_bag = eff_edge_attrs(host, assignment[i], assignment[j], directed);
                    if !attrs_subset(&motif_bag, &host_bag) {
                        continue 'candidates;
                    }
                } else if induced && in_host {
                    continue 'candidates;
                }
            }
        }
        found.push(
            motif_vs
                .iter()
                .zip(&assignment)
                .map(|(m, h)| ((*m).clone(), (*h).clone()))
                .collect(),
        );
    }
    found
}

pub fn oracle_count<M, H>(motif: &M, host: &H, directed: bool, induced: bool) -> usize
where
    M: GraphView,
    H: GraphView,
{
    oracle_embeddings(motif, host, directed, induced).len()
}
