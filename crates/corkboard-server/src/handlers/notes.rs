//! Note CRUD on a group's board.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use corkboard_store::row_types::NoteRow;
use corkboard_store::{BoardService, NoteCreateParams};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /api/groups/{id}/notes`.
#[derive(Deserialize)]
pub struct CreateNoteRequest {
    title: Option<String>,
    content: Option<String>,
    color: Option<String>,
    x: f64,
    y: f64,
    width: Option<f64>,
    height: Option<f64>,
    z_index: Option<i64>,
    created_by: Option<String>,
    can_edit: Option<bool>,
}

/// Body of `PATCH /api/notes/{id}`.
#[derive(Deserialize)]
pub struct UpdateNoteContentRequest {
    title: Option<String>,
    content: Option<String>,
    color: Option<String>,
}

/// Body of `PATCH /api/notes/{id}/position`.
#[derive(Deserialize)]
pub struct UpdateNotePositionRequest {
    x: f64,
    y: f64,
    width: Option<f64>,
    height: Option<f64>,
    z_index: Option<i64>,
}

/// Body of `GET /api/groups/{id}/notes`.
#[derive(Serialize)]
pub struct NotesResponse {
    notes: Vec<NoteRow>,
}

/// Body of `DELETE /api/groups/{id}/notes`.
#[derive(Serialize)]
pub struct ClearNotesResponse {
    deleted_count: usize,
}

/// `GET /api/groups/{id}/notes`
#[instrument(skip(state))]
pub async fn list_notes(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<NotesResponse>, ApiError> {
    let conn = state.conn()?;
    let notes = BoardService::list_notes(&conn, &group_id)?;
    Ok(Json(NotesResponse { notes }))
}

/// `POST /api/groups/{id}/notes`
#[instrument(skip(state, payload))]
pub async fn create_note(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
    Json(payload): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<NoteRow>), ApiError> {
    let conn = state.conn()?;
    let note = BoardService::create_note(
        &conn,
        &group_id,
        &NoteCreateParams {
            title: payload.title.as_deref(),
            content: payload.content.as_deref(),
            color: payload.color.as_deref(),
            x: payload.x,
            y: payload.y,
            width: payload.width,
            height: payload.height,
            z_index: payload.z_index,
            created_by: payload.created_by.as_deref(),
            can_edit: payload.can_edit.unwrap_or(false),
        },
    )?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// `GET /api/notes/{id}`
#[instrument(skip(state))]
pub async fn get_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<Json<NoteRow>, ApiError> {
    let conn = state.conn()?;
    let note = BoardService::get_note(&conn, &note_id)?;
    Ok(Json(note))
}

/// `PATCH /api/notes/{id}`
#[instrument(skip(state, payload))]
pub async fn update_note_content(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    Json(payload): Json<UpdateNoteContentRequest>,
) -> Result<StatusCode, ApiError> {
    let conn = state.conn()?;
    BoardService::update_note_content(
        &conn,
        &note_id,
        payload.title.as_deref(),
        payload.content.as_deref(),
        payload.color.as_deref(),
    )?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PATCH /api/notes/{id}/position`
#[instrument(skip(state, payload))]
pub async fn update_note_position(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    Json(payload): Json<UpdateNotePositionRequest>,
) -> Result<StatusCode, ApiError> {
    let conn = state.conn()?;
    BoardService::update_note_layout(
        &conn,
        &note_id,
        payload.x,
        payload.y,
        payload.width,
        payload.height,
        payload.z_index,
    )?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/notes/{id}`
#[instrument(skip(state))]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let conn = state.conn()?;
    BoardService::delete_note(&conn, &note_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/groups/{id}/notes`
#[instrument(skip(state))]
pub async fn clear_notes(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<ClearNotesResponse>, ApiError> {
    let conn = state.conn()?;
    let deleted_count = BoardService::clear_notes(&conn, &group_id)?;
    Ok(Json(ClearNotesResponse { deleted_count }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
