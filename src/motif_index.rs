//! Dense index over the motif under the effective directedness.
//!
//! The search addresses motif vertices by dense `u32` indices in the
//! motif's iteration order; that order is also the deterministic
//! tie-breaker everywhere a choice is otherwise ambiguous. When an
//! undirected search runs over a directed motif, the index is built on the
//! projection: out- and in-neighbor lists collapse to their union.

use std::fmt;
use std::hash::Hash;

use ahash::{AHashMap, AHashSet};

use crate::attrs::AttrMap;
use crate::compat::Degrees;
use crate::graph::GraphView;

pub(crate) struct MotifIndex<V> {
    ids: Vec<V>,
    index_of: AHashMap<V, u32>,
    out: Vec<Vec<u32>>,
    inn: Vec<Vec<u32>>,
    /// Union of out and in neighbors, self loops excluded.
    adj: Vec<Vec<u32>>,
    out_sets: Vec<AHashSet<u32>>,
    self_loop: Vec<bool>,
    vertex_attrs: Vec<AttrMap>,
    edge_attrs: AHashMap<(u32, u32), AttrMap>,
    directed: bool,
}

impl<V> MotifIndex<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    pub(crate) fn build<M>(motif: &M, directed: bool) -> Self
    where
        M: GraphView<Id = V>,
    {
        let ids: Vec<V> = motif.vertices().cloned().collect();
        let index_of: AHashMap<V, u32> = ids
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i as u32))
            .collect();
        let n = ids.len();

        let mut out = Vec::with_capacity(n);
        let mut inn = Vec::with_capacity(n);
        let mut adj = Vec::with_capacity(n);
        let mut out_sets = Vec::with_capacity(n);
        let mut self_loop = Vec::with_capacity(n);
        let mut vertex_attrs = Vec::with_capacity(n);
        let mut edge_attrs: AHashMap<(u32, u32), AttrMap> = AHashMap::new();

        for (i, v) in ids.iter().enumerate() {
            let i = i as u32;
            let raw_out: Vec<u32> = motif.neighbors_out(v).map(|u| index_of[u]).collect();
            let raw_in: Vec<u32> = motif.neighbors_in(v).map(|u| index_of[u]).collect();

            self_loop.push(motif.has_edge(v, v));
            vertex_attrs.push(motif.vertex_attrs(v).clone());

            let (o, s): (Vec<u32>, Vec<u32>) = if directed {
                (dedup_excluding(&raw_out, i), dedup_excluding(&raw_in, i))
            } else {
                let union: Vec<u32> = raw_out.iter().chain(raw_in.iter()).copied().collect();
                let union = dedup_excluding(&union, i);
                (union.clone(), union)
            };
            let union: Vec<u32> = o.iter().chain(s.iter()).copied().collect();
            adj.push(dedup_excluding(&union, i));
            out_sets.push(o.iter().copied().collect());
            out.push(o);
            inn.push(s);

            for u in motif.neighbors_out(v) {
                let j = index_of[u];
                if let Some(bag) = motif.edge_attrs(v, u) {
                    let key = edge_attr_key(directed, i, j);
                    edge_attrs.entry(key).or_insert_with(|| bag.clone());
                }
            }
        }

        MotifIndex {
            ids,
            index_of,
            out,
            inn,
            adj,
            out_sets,
            self_loop,
            vertex_attrs,
            edge_attrs,
            directed,
        }
    }
}

impl<V> MotifIndex<V> {
    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    pub(crate) fn id(&self, m: u32) -> &V {
        &self.ids[m as usize]
    }

    pub(crate) fn index_of(&self, v: &V) -> Option<u32>
    where
        V: Eq + Hash,
    {
        self.index_of.get(v).copied()
    }

    pub(crate) fn out_neighbors(&self, m: u32) -> &[u32] {
        &self.out[m as usize]
    }

    pub(crate) fn in_neighbors(&self, m: u32) -> &[u32] {
        &self.inn[m as usize]
    }

    /// Neighbors ignoring direction, self loops excluded.
    pub(crate) fn neighbors(&self, m: u32) -> &[u32] {
        &self.adj[m as usize]
    }

    pub(crate) fn has_edge(&self, a: u32, b: u32) -> bool {
        if a == b {
            self.self_loop[a as usize]
        } else {
            self.out_sets[a as usize].contains(&b)
        }
    }

    pub(crate) fn has_self_loop(&self, m: u32) -> bool {
        self.self_loop[m as usize]
    }

    pub(crate) fn degrees(&self, m: u32) -> Degrees {
        let i = m as usize;
        let sl = usize::from(self.self_loop[i]);
        Degrees {
            incoming: self.inn[i].len() + sl,
            outgoing: self.out[i].len() + sl,
            total: self.adj[i].len() + sl,
        }
    }

    pub(crate) fn vertex_attrs(&self, m: u32) -> &AttrMap {
        &self.vertex_attrs[m as usize]
    }

    pub(crate) fn edge_attrs(&self, a: u32, b: u32) -> Option<&AttrMap> {
        self.edge_attrs.get(&edge_attr_key(self.directed, a, b))
    }
}

fn edge_attr_key(directed: bool, i: u32, j: u32) -> (u32, u32) {
    if directed || i <= j {
        (i, j)
    } else {
        (j, i)
    }
}

fn dedup_excluding(list: &[u32], skip: u32) -> Vec<u32> {
    let mut seen = AHashSet::with_capacity(list.len());
    list.iter()
        .copied()
        .filter(|&j| j != skip && seen.insert(j))
        .collect()
}
