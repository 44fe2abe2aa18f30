use uuid::Uuid;

use crate::{
    query::{self, SearchFilters},
    state::AppState,
    Result,
};

use super::{CreateNote, Note, NoteUpdate};

pub async fn find_notes(filters: SearchFilters, state: &AppState) -> Result<Vec<Note>> {
    let notes = state.repo.read().await.list();
    Ok(query::filter_and_sort(&notes, &filters))
}

pub async fn create_note(args: CreateNote, state: &AppState) -> Result<Note> {
    state.repo.write().await.create(args)
}

pub async fn get_note(note_id: Uuid, state: &AppState) -> Result<Note> {
    state.repo.read().await.get(note_id)
}

pub async fn update_note(note_id: Uuid, args: NoteUpdate, state: &AppState) -> Result<Note> {
    state.repo.write().await.update(note_id, args)
}

pub async fn delete_note(note_id: Uuid, state: &AppState) -> Result<Note> {
    state.repo.write().await.delete(note_id)
}

pub async fn all_tags(state: &AppState) -> Result<Vec<String>> {
    let notes = state.repo.read().await.list();
    Ok(query::all_tags(&notes))
}
