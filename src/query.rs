//! Pure filtering and sorting over a note snapshot. Never mutates input.

use serde::{Deserialize, Serialize};

use crate::notes::Note;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    CreatedAt,
    #[default]
    UpdatedAt,
    Title,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    pub query: String,
    pub tags: Vec<String>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

/// Applies the query substring match, the AND-semantics tag filter and the
/// selected comparator, in that order.
pub fn filter_and_sort(notes: &[Note], filters: &SearchFilters) -> Vec<Note> {
    let query = filters.query.to_lowercase();
    let required: Vec<String> = filters
        .tags
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();

    let mut filtered: Vec<Note> = notes
        .iter()
        .filter(|note| query.is_empty() || matches_query(note, &query))
        .filter(|note| required.iter().all(|tag| note.tags.contains(tag)))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        let ordering = match filters.sort_by {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortKey::Title => a.title.cmp(&b.title),
        };
        match filters.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    filtered
}

// Tags are stored lowercased, so they only need a substring check.
fn matches_query(note: &Note, query: &str) -> bool {
    note.title.to_lowercase().contains(query)
        || note.content.to_lowercase().contains(query)
        || note.tags.iter().any(|tag| tag.contains(query))
}

/// Distinct tags across all notes, alphabetically sorted.
pub fn all_tags(notes: &[Note]) -> Vec<String> {
    let mut tags: Vec<String> = notes
        .iter()
        .flat_map(|note| note.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}
