//! Legacy summaries resource.
//!
//! `POST /api/summarize` calls the external summarizer and stores the
//! result; summaries are list + detail only after that.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use corkboard_store::row_types::SummaryRow;
use corkboard_store::BoardService;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /api/summarize`.
#[derive(Deserialize)]
pub struct SummarizeRequest {
    input_text: String,
}

/// Body of `GET /api/summaries`.
#[derive(Serialize)]
pub struct SummariesResponse {
    summaries: Vec<SummaryRow>,
}

/// `POST /api/summarize`
#[instrument(skip(state, payload))]
pub async fn summarize(
    State(state): State<AppState>,
    Json(payload): Json<SummarizeRequest>,
) -> Result<(StatusCode, Json<SummaryRow>), ApiError> {
    let input = payload.input_text.trim();
    if input.is_empty() {
        return Err(ApiError::bad_request(
            "input_empty",
            "input_text must not be empty",
        ));
    }

    let summary = state.summarizer.summarize(input).await?;

    let conn = state.conn()?;
    let record = BoardService::store_summary(&conn, input, &summary)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /api/summaries`
#[instrument(skip(state))]
pub async fn list_summaries(
    State(state): State<AppState>,
) -> Result<Json<SummariesResponse>, ApiError> {
    let conn = state.conn()?;
    let summaries = BoardService::list_summaries(&conn)?;
    Ok(Json(SummariesResponse { summaries }))
}

/// `GET /api/summaries/{id}`
#[instrument(skip(state))]
pub async fn get_summary(
    State(state): State<AppState>,
    Path(summary_id): Path<String>,
) -> Result<Json<SummaryRow>, ApiError> {
    let conn = state.conn()?;
    let summary = BoardService::get_summary(&conn, &summary_id)?;
    Ok(Json(summary))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(unused_results)]
mod tests {
    use super::*;
    use crate::state::testing;
    use crate::summarizer::StubSummarizer;
    use std::sync::Arc;

    #[tokio::test]
    async fn summarize_stores_and_returns_the_record() {
        let state = testing::state();
        let (status, Json(record)) = summarize(
            State(state.clone()),
            Json(SummarizeRequest {
                input_text: "a long meeting transcript".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(record.summary, "- stub summary");

        let Json(fetched) = get_summary(State(state.clone()), Path(record.id.clone()))
            .await
            .unwrap();
        assert_eq!(fetched.input_text, "a long meeting transcript");

        let Json(body) = list_summaries(State(state)).await.unwrap();
        assert_eq!(body.summaries.len(), 1);
    }

    #[tokio::test]
    async fn empty_input_is_400_and_stores_nothing() {
        let state = testing::state();
        let err = summarize(
            State(state.clone()),
            Json(SummarizeRequest {
                input_text: "   ".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let Json(body) = list_summaries(State(state)).await.unwrap();
        assert!(body.summaries.is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_is_502_and_stores_nothing() {
        let mut state = testing::state();
        state.summarizer = Arc::new(StubSummarizer::failing());

        let err = summarize(
            State(state.clone()),
            Json(SummarizeRequest {
                input_text: "text".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);

        let Json(body) = list_summaries(State(state)).await.unwrap();
        assert!(body.summaries.is_empty());
    }

    #[tokio::test]
    async fn missing_summary_is_404() {
        let state = testing::state();
        let err = get_summary(State(state), Path("sum_missing".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
