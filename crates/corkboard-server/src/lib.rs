//! # corkboard-server
//!
//! HTTP surface for the Corkboard service: the axum router, the
//! domain-error to HTTP-response mapping, Prometheus metrics, and the
//! outbound summarizer client.
//!
//! Handlers are thin. Validation of request shape (missing fields,
//! empty strings) happens here; everything with domain meaning lives
//! in [`corkboard_store::BoardService`], and its errors map onto HTTP
//! statuses in [`error::ApiError`].

#![deny(unsafe_code)]

pub mod error;
pub mod handlers;
pub mod metrics;
pub mod router;
pub mod state;
pub mod summarizer;

pub use router::build_router;
pub use state::AppState;
