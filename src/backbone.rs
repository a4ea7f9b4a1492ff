//! Partial mappings from motif vertices to host vertices.

use contracts::{debug_ensures, debug_requires};

/// A partial injective mapping from dense motif indices to host vertices.
///
/// Backbones are the work items of the search: they are cloned on every
/// branch, so the representation is a small array of `(motif_index,
/// host_id)` pairs kept sorted by motif index rather than a hash map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Backbone<H> {
    pairs: Vec<(u32, H)>,
}

impl<H> Backbone<H>
where
    H: Clone + PartialEq,
{
    pub(crate) fn singleton(motif_vertex: u32, host_vertex: H) -> Self {
        Backbone {
            pairs: vec![(motif_vertex, host_vertex)],
        }
    }

    /// Builds a backbone from unordered pairs. Callers are responsible for
    /// key and value uniqueness.
    pub(crate) fn from_pairs(mut pairs: Vec<(u32, H)>) -> Self {
        pairs.sort_unstable_by_key(|&(m, _)| m);
        Backbone { pairs }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The host vertex assigned to `motif_vertex`, if any.
    pub fn get(&self, motif_vertex: u32) -> Option<&H> {
        self.pairs
            .binary_search_by_key(&motif_vertex, |&(m, _)| m)
            .ok()
            .map(|at| &self.pairs[at].1)
    }

    pub fn contains_motif(&self, motif_vertex: u32) -> bool {
        self.get(motif_vertex).is_some()
    }

    pub fn contains_host(&self, host_vertex: &H) -> bool {
        self.pairs.iter().any(|(_, h)| h == host_vertex)
    }

    /// Mapped pairs in motif-index order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &H)> + '_ {
        self.pairs.iter().map(|(m, h)| (*m, h))
    }

    /// A copy of this backbone with one more assignment.
    #[debug_requires(!self.contains_motif(motif_vertex), "motif vertex already mapped")]
    #[debug_requires(!self.contains_host(&host_vertex), "host vertex already used")]
    #[debug_ensures(ret.len() == self.len() + 1)]
    pub(crate) fn extended(&self, motif_vertex: u32, host_vertex: H) -> Self {
        let mut pairs = Vec::with_capacity(self.pairs.len() + 1);
        let at = self.pairs.partition_point(|&(m, _)| m < motif_vertex);
        pairs.extend_from_slice(&self.pairs[..at]);
        pairs.push((motif_vertex, host_vertex));
        pairs.extend_from_slice(&self.pairs[at..]);
        Backbone { pairs }
    }
}
