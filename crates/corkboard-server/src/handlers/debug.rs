//! Health, metrics, and the diagnostic snapshot.

use axum::extract::{Json, State};
use corkboard_store::{BoardService, TableCounts};
use serde::Serialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::metrics;
use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Snapshot reported by `GET /api/debug`.
#[derive(Serialize)]
pub struct DebugInfo {
    db_path: String,
    file_exists: bool,
    file_size: Option<u64>,
    counts: TableCounts,
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `GET /metrics`
pub async fn metrics_text(State(state): State<AppState>) -> String {
    metrics::render(&state.metrics)
}

/// `GET /api/debug`
#[instrument(skip(state))]
pub async fn debug_info(State(state): State<AppState>) -> Result<Json<DebugInfo>, ApiError> {
    let conn = state.conn()?;
    let counts = BoardService::counts(&conn)?;

    let (file_exists, file_size) = match std::fs::metadata(&state.db_path) {
        Ok(md) => (true, Some(md.len())),
        Err(_) => (false, None),
    };

    Ok(Json(DebugInfo {
        db_path: state.db_path.display().to_string(),
        file_exists,
        file_size,
        counts,
    }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(unused_results)]
mod tests {
    use super::*;
    use crate::state::testing;

    #[tokio::test]
    async fn health_is_ok() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
    }

    #[tokio::test]
    async fn debug_reports_counts() {
        let state = testing::state();
        {
            let mut conn = state.conn().unwrap();
            let account =
                BoardService::create_account(&conn, "Sato", "sato@example.com", "secret1")
                    .unwrap();
            BoardService::create_group(&mut conn, "study", &account.id).unwrap();
        }

        let Json(info) = debug_info(State(state)).await.unwrap();
        assert_eq!(info.counts.accounts, 1);
        assert_eq!(info.counts.groups, 1);
        assert_eq!(info.counts.notes, 0);
        // In-memory database has no backing file.
        assert!(!info.file_exists);
    }

    #[tokio::test]
    async fn metrics_renders_text() {
        let state = testing::state();
        // Uninstalled recorder renders an empty (valid) exposition.
        let body = metrics_text(State(state)).await;
        assert!(body.is_empty() || body.contains('\n'));
    }
}
