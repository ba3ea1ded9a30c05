//! Request handlers, grouped by resource.
//!
//! Handlers check request shape (missing or empty fields) and delegate
//! everything with domain meaning to
//! [`corkboard_store::BoardService`]. Wrapper response types mirror the
//! wire shapes exactly; rows serialize as-is (password hashes never
//! serialize).

pub mod accounts;
pub mod debug;
pub mod groups;
pub mod notes;
pub mod summaries;
