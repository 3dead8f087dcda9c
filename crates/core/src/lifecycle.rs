//! Assessment and game-session state machines.
//!
//! Statuses are stored as TEXT in the database; these enums are the single
//! source of truth for the legal values and transitions. Repositories embed
//! the same guards as SQL predicates (`WHERE status = ...`) so a transition
//! is never an unguarded read-then-write.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Assessment lifecycle: NOT_STARTED -> IN_PROGRESS -> COMPLETED.
///
/// Monotonic. COMPLETED is terminal; there are no backward transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl AssessmentStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "NOT_STARTED" => Some(Self::NotStarted),
            "IN_PROGRESS" => Some(Self::InProgress),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Whether the assessment is still "current" for a candidate, i.e. the
    /// state `GET /assessments/current` may return.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::NotStarted | Self::InProgress)
    }

    /// Legal forward transitions.
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::NotStarted, Self::InProgress) | (Self::InProgress, Self::Completed)
        )
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assessment item lifecycle: PENDING -> IN_PROGRESS -> SUBMITTED.
///
/// Only SUBMITTED items contribute to the assessment total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    Pending,
    InProgress,
    Submitted,
}

impl ItemStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Submitted => "SUBMITTED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "IN_PROGRESS" => Some(Self::InProgress),
            "SUBMITTED" => Some(Self::Submitted),
            _ => None,
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game session lifecycle: ACTIVE -> COMPLETED. COMPLETED is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Active,
    Completed,
}

impl SessionStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(Self::Active),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only action accepted by `POST /game-sessions/{id}`.
pub const SESSION_ACTION_COMPLETE: &str = "complete";
