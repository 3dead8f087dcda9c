//! Pagination clamping shared by list endpoints.
//!
//! Raw `limit`/`offset` query values are clamped here before they reach SQL
//! so a negative or zero limit never propagates into the underlying query.

/// Default page size when the caller supplies no limit.
pub const DEFAULT_LIMIT: i64 = 50;

/// Upper bound on page size regardless of what the caller asks for.
pub const MAX_LIMIT: i64 = 200;

/// Clamp a caller-supplied limit into `1..=MAX_LIMIT`.
///
/// `None`, zero, and negative values all fall back to [`DEFAULT_LIMIT`].
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    match limit {
        Some(l) if l > 0 => l.min(MAX_LIMIT),
        _ => DEFAULT_LIMIT,
    }
}

/// Clamp a caller-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
