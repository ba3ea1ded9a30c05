//! Route table and middleware stack.

use std::path::Path;

use axum::routing::{get, patch, post};
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::handlers::{accounts, debug, groups, notes, summaries};
use crate::metrics;
use crate::state::AppState;

/// Build the full application router.
///
/// Unmatched paths fall through to the static file service with an
/// `index.html` fallback so client-side routes resolve. CORS is
/// permissive (dev posture).
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let static_service = ServeDir::new(static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // accounts
        .route(
            "/api/accounts",
            get(accounts::list_accounts).post(accounts::create_account),
        )
        .route(
            "/api/accounts/{id}/groups",
            get(accounts::list_groups_for_account),
        )
        // groups
        .route("/api/groups", post(groups::create_group))
        .route("/api/groups/{id}", get(groups::get_group))
        .route(
            "/api/groups/{id}/users",
            get(groups::list_members).post(groups::join_group),
        )
        .route(
            "/api/groups/{id}/notes",
            get(notes::list_notes)
                .post(notes::create_note)
                .delete(notes::clear_notes),
        )
        // notes
        .route(
            "/api/notes/{id}",
            get(notes::get_note)
                .patch(notes::update_note_content)
                .delete(notes::delete_note),
        )
        .route("/api/notes/{id}/position", patch(notes::update_note_position))
        // summaries
        .route("/api/summaries", get(summaries::list_summaries))
        .route("/api/summaries/{id}", get(summaries::get_summary))
        .route("/api/summarize", post(summaries::summarize))
        // diagnostics
        .route("/api/debug", get(debug::debug_info))
        .route("/health", get(debug::health))
        .route("/metrics", get(debug::metrics_text))
        .fallback_service(static_service)
        .layer(middleware::from_fn(metrics::track_http))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
