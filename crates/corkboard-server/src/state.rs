//! Shared per-request state.

use std::path::PathBuf;
use std::sync::Arc;

use corkboard_store::{ConnectionPool, PooledConnection};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::error::ApiError;
use crate::summarizer::Summarize;

/// State handed to every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool.
    pub pool: ConnectionPool,
    /// Database file path, reported by the debug endpoint.
    pub db_path: PathBuf,
    /// Outbound summarizer client.
    pub summarizer: Arc<dyn Summarize>,
    /// Handle for rendering the `/metrics` endpoint.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Check a connection out of the pool.
    pub fn conn(&self) -> Result<PooledConnection, ApiError> {
        self.pool
            .get()
            .map_err(|e| ApiError::internal(format!("connection pool: {e}")))
    }
}
