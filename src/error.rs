use thiserror::Error;

/// Errors surfaced by the search entry points before any backbone is
/// enqueued. Queue exhaustion and reaching a result limit are normal
/// termination and are not represented here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A directed search was requested (or inferred from the motif) but the
    /// motif or the host is undirected.
    #[error("directed search requires directed motif and host graphs")]
    DirectednessMismatch,

    /// An interestingness map names a vertex the motif does not contain.
    #[error("interestingness map references unknown motif vertex {0}")]
    UnknownMotifVertex(String),
}
