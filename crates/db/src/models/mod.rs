//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts where rows are created from this core
//! - Serializable view structs where the raw row is not safe or not
//!   sufficient to expose directly

pub mod analytics;
pub mod assessment;
pub mod assessment_item;
pub mod audit;
pub mod candidate_profile;
pub mod game;
pub mod game_session;
pub mod job_role;
pub mod tenant;
pub mod user;
