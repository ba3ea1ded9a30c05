//! # corkboard-store
//!
//! SQLite persistence for the Corkboard service.
//!
//! Layering, bottom up:
//!
//! - [`connection`] — r2d2 pool over `rusqlite` (WAL, foreign keys on)
//! - [`migrations`] — `user_version`-tracked schema batches
//! - [`row_types`] — plain row structs, one per table
//! - [`repositories`] — stateless per-table CRUD over `&Connection`
//! - [`service`] — [`service::BoardService`]: validation, membership and
//!   ownership rules, multi-step writes inside transactions
//!
//! Callers hold a [`connection::ConnectionPool`] and go through
//! [`service::BoardService`]; repositories are public for tests and
//! diagnostics but carry no domain rules of their own.

#![deny(unsafe_code)]

pub mod connection;
pub mod migrations;
pub mod repositories;
pub mod row_types;
pub mod service;

pub use connection::{open_pool, ConnectionPool, PooledConnection};
pub use service::{BoardService, NoteCreateParams, TableCounts};
