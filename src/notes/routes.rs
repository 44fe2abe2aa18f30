use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    extract::{Json, Path, Query},
    query::{SearchFilters, SortKey, SortOrder},
    state::AppState,
    Result,
};

use super::{handlers, CreateNote, NoteResponse, NoteUpdate, NotesResponse, TagsResponse};

#[derive(Debug, Deserialize)]
struct NoteIdPath {
    note_id: Uuid,
}

/// Query-string form of [`SearchFilters`]; `tags` is comma-separated.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FindNotesQuery {
    query: String,
    tags: Option<String>,
    sort_by: SortKey,
    sort_order: SortOrder,
}

impl From<FindNotesQuery> for SearchFilters {
    fn from(params: FindNotesQuery) -> Self {
        Self {
            query: params.query,
            tags: params
                .tags
                .map(|tags| {
                    tags.split(',')
                        .map(|tag| tag.trim().to_string())
                        .filter(|tag| !tag.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            sort_by: params.sort_by,
            sort_order: params.sort_order,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/notes", get(find_notes).post(create_note))
        .route(
            "/notes/{note_id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/tags", get(all_tags))
        .with_state(state)
}

async fn find_notes(
    Query(params): Query<FindNotesQuery>,
    State(state): State<AppState>,
) -> Result<Json<NotesResponse>> {
    let notes = handlers::find_notes(params.into(), &state).await?;
    Ok(Json(NotesResponse { notes }))
}

async fn create_note(
    State(state): State<AppState>,
    Json(args): Json<CreateNote>,
) -> Result<(StatusCode, Json<NoteResponse>)> {
    let note = handlers::create_note(args, &state).await?;
    Ok((StatusCode::CREATED, Json(NoteResponse { note })))
}

async fn get_note(
    Path(NoteIdPath { note_id }): Path<NoteIdPath>,
    State(state): State<AppState>,
) -> Result<Json<NoteResponse>> {
    let note = handlers::get_note(note_id, &state).await?;
    Ok(Json(NoteResponse { note }))
}

async fn update_note(
    Path(NoteIdPath { note_id }): Path<NoteIdPath>,
    State(state): State<AppState>,
    Json(args): Json<NoteUpdate>,
) -> Result<Json<NoteResponse>> {
    let note = handlers::update_note(note_id, args, &state).await?;
    Ok(Json(NoteResponse { note }))
}

async fn delete_note(
    Path(NoteIdPath { note_id }): Path<NoteIdPath>,
    State(state): State<AppState>,
) -> Result<Json<NoteResponse>> {
    let note = handlers::delete_note(note_id, &state).await?;
    Ok(Json(NoteResponse { note }))
}

async fn all_tags(State(state): State<AppState>) -> Result<Json<TagsResponse>> {
    let tags = handlers::all_tags(&state).await?;
    Ok(Json(TagsResponse { tags }))
}
