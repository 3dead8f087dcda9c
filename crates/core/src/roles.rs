//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in
//! `0001_create_core_tables.sql`.

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_CANDIDATE: &str = "CANDIDATE";
