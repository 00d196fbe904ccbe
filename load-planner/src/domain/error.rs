//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from lookup errors raised by load sources or distance services.

use super::Place;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Consecutive segments don't meet at the same place
    #[error("segment ending at {0} is followed by a segment starting at {1}")]
    PlacesNotConnected(Place, Place),

    /// A segment arrives before it leaves
    #[error("segment from {0} is received before it ships")]
    ReceivedBeforeShipped(Place),
}
