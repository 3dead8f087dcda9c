//! Domain-level error taxonomy.
//!
//! Every externally observable failure mode maps to exactly one variant so
//! the HTTP layer can translate it to a status code without inspecting
//! message text. `Unauthorized` (no/invalid credential) and `Forbidden`
//! (valid credential, wrong owner or role) are deliberately distinct.

use crate::types::DbId;

/// Domain error shared across crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity does not exist (or is invisible to the caller's
    /// tenant).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Request payload failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A uniqueness or referential constraint was violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credential.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Valid credential, but the caller lacks the required role or does not
    /// own the target entity.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A state-machine guard rejected the transition (e.g. completing an
    /// assessment that is not IN_PROGRESS).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The request named an action the state machine does not define.
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Anything else. Logged with context; surfaced to callers as an opaque
    /// message.
    #[error("Internal error: {0}")]
    Internal(String),
}
