//! HTTP request handlers, grouped by resource.

pub mod admin;
pub mod assessment;
pub mod auth;
pub mod game_session;
pub mod games;
