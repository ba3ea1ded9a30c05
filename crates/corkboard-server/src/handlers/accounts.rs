//! Account registration and listing.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use corkboard_store::row_types::{AccountRow, GroupWithRoleRow};
use corkboard_store::BoardService;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /api/accounts`.
#[derive(Deserialize)]
pub struct CreateAccountRequest {
    name: String,
    email: String,
    password: String,
}

/// Body of `GET /api/accounts`.
#[derive(Serialize)]
pub struct AccountsResponse {
    accounts: Vec<AccountRow>,
}

/// Body of `GET /api/accounts/{id}/groups`.
#[derive(Debug, Serialize)]
pub struct GroupsResponse {
    groups: Vec<GroupWithRoleRow>,
}

/// `POST /api/accounts`
#[instrument(skip(state, payload))]
pub async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountRow>), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::bad_request("name_empty", "name must not be empty"));
    }
    if payload.email.trim().is_empty() {
        return Err(ApiError::bad_request("email_empty", "email must not be empty"));
    }

    let conn = state.conn()?;
    let account =
        BoardService::create_account(&conn, &payload.name, &payload.email, &payload.password)?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// `GET /api/accounts`
#[instrument(skip(state))]
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<AccountsResponse>, ApiError> {
    let conn = state.conn()?;
    let accounts = BoardService::list_accounts(&conn)?;
    Ok(Json(AccountsResponse { accounts }))
}

/// `GET /api/accounts/{id}/groups`
#[instrument(skip(state))]
pub async fn list_groups_for_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<GroupsResponse>, ApiError> {
    let conn = state.conn()?;
    let groups = BoardService::list_groups_for_account(&conn, &account_id)?;
    Ok(Json(GroupsResponse { groups }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
