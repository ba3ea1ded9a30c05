//! Group creation, membership, and member listing.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use corkboard_core::Role;
use corkboard_store::repositories::UpsertMembershipOutcome;
use corkboard_store::row_types::{GroupRow, MembershipRow};
use corkboard_store::BoardService;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /api/groups`.
#[derive(Deserialize)]
pub struct CreateGroupRequest {
    group_name: String,
    created_by: String,
}

/// Body of `POST /api/groups/{id}/users`.
#[derive(Deserialize)]
pub struct JoinGroupRequest {
    user_id: String,
    role: Option<String>,
}

/// Body of `GET /api/groups/{id}/users`.
#[derive(Serialize)]
pub struct MembersResponse {
    members: Vec<MembershipRow>,
}

/// `POST /api/groups`
#[instrument(skip(state, payload))]
pub async fn create_group(
    State(state): State<AppState>,
    Json(payload): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupRow>), ApiError> {
    if payload.group_name.trim().is_empty() {
        return Err(ApiError::bad_request(
            "group_name_empty",
            "group name must not be empty",
        ));
    }

    let mut conn = state.conn()?;
    let group = BoardService::create_group(&mut conn, &payload.group_name, &payload.created_by)?;
    Ok((StatusCode::CREATED, Json(group)))
}

/// `GET /api/groups/{id}`
#[instrument(skip(state))]
pub async fn get_group(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<GroupRow>, ApiError> {
    let conn = state.conn()?;
    let group = BoardService::get_group(&conn, &group_id)?;
    Ok(Json(group))
}

/// `POST /api/groups/{id}/users`
///
/// 201 when the membership was inserted, 200 when an existing one had
/// its role updated.
#[instrument(skip(state, payload))]
pub async fn join_group(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
    Json(payload): Json<JoinGroupRequest>,
) -> Result<(StatusCode, Json<MembershipRow>), ApiError> {
    let role = Role::parse(payload.role.as_deref().unwrap_or("member"))
        .map_err(|e| ApiError::unprocessable("invalid_role", e.to_string()))?;

    let conn = state.conn()?;
    let (membership, outcome) = BoardService::join_group(&conn, &group_id, &payload.user_id, role)?;
    let status = match outcome {
        UpsertMembershipOutcome::Inserted => StatusCode::CREATED,
        UpsertMembershipOutcome::Updated => StatusCode::OK,
    };
    Ok((status, Json(membership)))
}

/// `GET /api/groups/{id}/users`
#[instrument(skip(state))]
pub async fn list_members(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<MembersResponse>, ApiError> {
    let conn = state.conn()?;
    let members = BoardService::list_members(&conn, &group_id)?;
    Ok(Json(MembersResponse { members }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(unused_results)]
mod tests {
    use super::*;
    use crate::handlers::accounts;
    use crate::state::testing;

    async fn account(state: &AppState, email: &str) -> String {
        let conn = state.conn().unwrap();
        BoardService::create_account(&conn, "Sato", email, "secret1")
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn create_group_makes_creator_owner() {
        let state = testing::state();
        let owner = account(&state, "owner@example.com").await;

        let (status, Json(group)) = create_group(
            State(state.clone()),
            Json(CreateGroupRequest {
                group_name: "study".to_string(),
                created_by: owner.clone(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert!(group.id.starts_with("grp_"));

        let Json(body) = list_members(State(state), Path(group.id)).await.unwrap();
        assert_eq!(body.members.len(), 1);
        assert_eq!(body.members[0].account_id, owner);
        assert_eq!(body.members[0].role, "owner");
    }

    #[tokio::test]
    async fn get_missing_group_is_404() {
        let state = testing::state();
        let err = get_group(State(state), Path("grp_missing".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn join_then_rejoin_upserts_role() {
        let state = testing::state();
        let owner = account(&state, "owner@example.com").await;
        let joiner = account(&state, "joiner@example.com").await;
        let (_, Json(group)) = create_group(
            State(state.clone()),
            Json(CreateGroupRequest {
                group_name: "study".to_string(),
                created_by: owner,
            }),
        )
        .await
        .unwrap();

        let (status, Json(first)) = join_group(
            State(state.clone()),
            Path(group.id.clone()),
            Json(JoinGroupRequest {
                user_id: joiner.clone(),
                role: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(first.role, "member");

        let (status, Json(second)) = join_group(
            State(state.clone()),
            Path(group.id.clone()),
            Json(JoinGroupRequest {
                user_id: joiner,
                role: Some("owner".to_string()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(second.id, first.id);
        assert_eq!(second.role, "owner");

        let Json(body) = list_members(State(state), Path(group.id)).await.unwrap();
        assert_eq!(body.members.len(), 2);
    }

    #[tokio::test]
    async fn unknown_role_is_422() {
        let state = testing::state();
        let owner = account(&state, "owner@example.com").await;
        let (_, Json(group)) = create_group(
            State(state.clone()),
            Json(CreateGroupRequest {
                group_name: "study".to_string(),
                created_by: owner.clone(),
            }),
        )
        .await
        .unwrap();

        let err = join_group(
            State(state),
            Path(group.id),
            Json(JoinGroupRequest {
                user_id: owner,
                role: Some("admin".to_string()),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code, "invalid_role");
    }

    #[tokio::test]
    async fn membership_shows_in_account_group_listing() {
        let state = testing::state();
        let owner = account(&state, "owner@example.com").await;
        let (_, Json(group)) = create_group(
            State(state.clone()),
            Json(CreateGroupRequest {
                group_name: "study".to_string(),
                created_by: owner.clone(),
            }),
        )
        .await
        .unwrap();

        let Json(body) =
            accounts::list_groups_for_account(State(state), Path(owner)).await.unwrap();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["groups"][0]["id"], group.id);
        assert_eq!(json["groups"][0]["role"], "owner");
    }
}
