//! Authentication primitives: JWT access tokens and Argon2id passwords.

pub mod jwt;
pub mod password;
