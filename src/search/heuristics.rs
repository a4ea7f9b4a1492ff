use std::cmp::Ordering;

use crate::backbone::Backbone;
use crate::motif_index::MotifIndex;

/// Picks the motif vertex to assign next for a given backbone.
///
/// Preference goes to unmapped vertices adjacent (ignoring direction) to
/// the mapped set, ranked by interestingness; when the motif is
/// disconnected and the current component is exhausted, the most
/// interesting unmapped vertex overall is chosen. Ties always break toward
/// the lower motif index, so the choice is a pure function of the mapped
/// set. That determinism is what guarantees each completion is reached by
/// exactly one extension path.
pub(crate) fn choose_next<V, HId>(
    index: &MotifIndex<V>,
    interest: &[f64],
    backbone: &Backbone<HId>,
) -> Option<u32>
where
    HId: Clone + PartialEq,
{
    let mut best: Option<u32> = None;
    for m in 0..index.len() as u32 {
        if backbone.contains_motif(m) {
            continue;
        }
        if !index.neighbors(m).iter().any(|&k| backbone.contains_motif(k)) {
            continue;
        }
        best = Some(prefer(best, m, interest));
    }
    if best.is_some() {
        return best;
    }

    for m in 0..index.len() as u32 {
        if !backbone.contains_motif(m) {
            best = Some(prefer(best, m, interest));
        }
    }
    best
}

fn prefer(best: Option<u32>, challenger: u32, interest: &[f64]) -> u32 {
    match best {
        None => challenger,
        Some(b) => {
            let cmp = interest[challenger as usize].total_cmp(&interest[b as usize]);
            if cmp == Ordering::Greater {
                challenger
            } else {
                b
            }
        }
    }
}
