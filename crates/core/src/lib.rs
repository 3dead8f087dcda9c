//! Domain primitives shared by the db and api crates.
//!
//! Pure, synchronous logic only: id/timestamp aliases, role constants,
//! the error taxonomy, the assessment/game-session state machines, and
//! pagination clamping. Anything that touches the database or HTTP lives
//! in `cognihire-db` / `cognihire-api`.

pub mod error;
pub mod lifecycle;
pub mod paging;
pub mod roles;
pub mod types;
