use std::fmt;
use std::hash::Hash;

use ahash::{AHashMap, AHashSet};

use crate::attrs::{empty_attrs, AttrMap};
use crate::graph::GraphView;

/// An attributed graph with insertion-ordered vertices.
///
/// Vertices are interned into dense indices on first sight; adjacency is
/// kept as index vectors plus hash sets so neighbor iteration is ordered
/// and edge membership is O(1). At most one edge is stored per vertex pair
/// (per ordered pair when directed); re-adding an edge merges its
/// attribute bag into the existing one.
#[derive(Clone, Debug, Default)]
pub struct AttrGraph<V> {
    directed: bool,
    ids: Vec<V>,
    index_of: AHashMap<V, u32>,
    out: Vec<Vec<u32>>,
    inn: Vec<Vec<u32>>,
    out_sets: Vec<AHashSet<u32>>,
    vertex_attrs: Vec<AttrMap>,
    edge_attrs: AHashMap<(u32, u32), AttrMap>,
}

impl<V> AttrGraph<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    fn new(directed: bool) -> Self {
        AttrGraph {
            directed,
            ids: Vec::new(),
            index_of: AHashMap::new(),
            out: Vec::new(),
            inn: Vec::new(),
            out_sets: Vec::new(),
            vertex_attrs: Vec::new(),
            edge_attrs: AHashMap::new(),
        }
    }

    /// Adds a vertex if absent. Returns true when the vertex is new.
    pub fn add_vertex(&mut self, v: V) -> bool {
        let before = self.ids.len();
        self.ensure_vertex(v);
        self.ids.len() > before
    }

    /// Adds a vertex (if absent) and merges `attrs` into its bag.
    pub fn add_vertex_with(&mut self, v: V, attrs: AttrMap) {
        let i = self.ensure_vertex(v) as usize;
        self.vertex_attrs[i].extend(attrs);
    }

    /// Adds an edge, interning both endpoints as needed.
    pub fn add_edge(&mut self, u: V, v: V) {
        self.add_edge_with(u, v, AttrMap::new());
    }

    /// Adds an edge and merges `attrs` into its bag.
    pub fn add_edge_with(&mut self, u: V, v: V, attrs: AttrMap) {
        let i = self.ensure_vertex(u);
        let j = self.ensure_vertex(v);

        if !self.out_sets[i as usize].contains(&j) {
            self.out[i as usize].push(j);
            self.out_sets[i as usize].insert(j);
            if self.directed {
                self.inn[j as usize].push(i);
            } else if i != j {
                self.out[j as usize].push(i);
                self.out_sets[j as usize].insert(i);
            }
        }

        if !attrs.is_empty() {
            let key = self.edge_key(i, j);
            self.edge_attrs.entry(key).or_default().extend(attrs);
        }
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        let ends: usize = self.out.iter().map(Vec::len).sum();
        if self.directed {
            ends
        } else {
            // self loops are stored once, every other edge twice
            let loops = (0..self.ids.len()).filter(|&i| self.out_sets[i].contains(&(i as u32))).count();
            (ends - loops) / 2 + loops
        }
    }

    fn ensure_vertex(&mut self, v: V) -> u32 {
        if let Some(&i) = self.index_of.get(&v) {
            return i;
        }
        let i = self.ids.len() as u32;
        self.index_of.insert(v.clone(), i);
        self.ids.push(v);
        self.out.push(Vec::new());
        self.inn.push(Vec::new());
        self.out_sets.push(AHashSet::new());
        self.vertex_attrs.push(AttrMap::new());
        i
    }

    fn idx(&self, v: &V) -> Option<u32> {
        self.index_of.get(v).copied()
    }

    fn edge_key(&self, i: u32, j: u32) -> (u32, u32) {
        if self.directed || i <= j {
            (i, j)
        } else {
            (j, i)
        }
    }
}

impl<V> GraphView for AttrGraph<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    type Id = V;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.ids.iter()
    }

    fn neighbors_out(&self, v: &V) -> impl Iterator<Item = &V> + '_ {
        self.idx(v)
            .into_iter()
            .flat_map(move |i| self.out[i as usize].iter().map(move |&j| &self.ids[j as usize]))
    }

    fn neighbors_in(&self, v: &V) -> impl Iterator<Item = &V> + '_ {
        let lists = if self.directed { &self.inn } else { &self.out };
        self.idx(v)
            .into_iter()
            .flat_map(move |i| lists[i as usize].iter().map(move |&j| &self.ids[j as usize]))
    }

    fn degree_out(&self, v: &V) -> usize {
        self.idx(v).map_or(0, |i| self.out[i as usize].len())
    }

    fn degree_in(&self, v: &V) -> usize {
        if self.directed {
            self.idx(v).map_or(0, |i| self.inn[i as usize].len())
        } else {
            self.degree_out(v)
        }
    }

    fn degree(&self, v: &V) -> usize {
        if self.directed {
            self.degree_in(v) + self.degree_out(v)
        } else {
            self.degree_out(v)
        }
    }

    fn has_edge(&self, u: &V, v: &V) -> bool {
        match (self.idx(u), self.idx(v)) {
            (Some(i), Some(j)) => self.out_sets[i as usize].contains(&j),
            _ => false,
        }
    }

    fn vertex_attrs(&self, v: &V) -> &AttrMap {
        self.idx(v)
            .map_or_else(|| empty_attrs(), |i| &self.vertex_attrs[i as usize])
    }

    fn edge_attrs(&self, u: &V, v: &V) -> Option<&AttrMap> {
        let (i, j) = (self.idx(u)?, self.idx(v)?);
        if !self.out_sets[i as usize].contains(&j) {
            return None;
        }
        self.edge_attrs.get(&self.edge_key(i, j))
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.index_of.contains_key(v)
    }
}
