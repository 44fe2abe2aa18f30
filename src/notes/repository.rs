use chrono::Utc;
use uuid::Uuid;

use crate::{Error, Result};

use super::{CreateNote, Note, NoteUpdate};

/// Owns the canonical in-memory note collection. Insertion order is
/// most-recently-created first. All validation happens before any mutation,
/// so a failed call leaves the collection untouched.
///
/// The repository itself is single-writer; callers share it behind the
/// `RwLock` in [`crate::state::AppState`].
#[derive(Debug, Default)]
pub struct NoteRepository {
    notes: Vec<Note>,
}

impl NoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the collection in insertion order.
    pub fn list(&self) -> Vec<Note> {
        self.notes.clone()
    }

    pub fn get(&self, id: Uuid) -> Result<Note> {
        self.notes
            .iter()
            .find(|note| note.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound("Note not found".into()))
    }

    pub fn create(&mut self, args: CreateNote) -> Result<Note> {
        if args.title.trim().is_empty() {
            return Err(Error::Validation("title is required".into()));
        }
        if args.content.trim().is_empty() {
            return Err(Error::Validation("content is required".into()));
        }
        let tags = normalize_tags(&args.tags);
        if tags.is_empty() {
            return Err(Error::Validation("at least one tag is required".into()));
        }

        let now = Utc::now();
        let note = Note {
            id: Uuid::now_v7(),
            title: args.title,
            content: args.content,
            tags,
            created_at: now,
            updated_at: now,
        };

        self.notes.insert(0, note.clone());
        Ok(note)
    }

    pub fn update(&mut self, id: Uuid, update: NoteUpdate) -> Result<Note> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or_else(|| Error::NotFound("Note not found".into()))?;

        if let Some(title) = &update.title {
            if title.trim().is_empty() {
                return Err(Error::Validation("title cannot be empty".into()));
            }
        }
        if let Some(content) = &update.content {
            if content.trim().is_empty() {
                return Err(Error::Validation("content cannot be empty".into()));
            }
        }
        let tags = match &update.tags {
            Some(tags) => {
                let tags = normalize_tags(tags);
                if tags.is_empty() {
                    return Err(Error::Validation("at least one tag is required".into()));
                }
                Some(tags)
            }
            None => None,
        };

        let note = &mut self.notes[index];
        if let Some(title) = update.title {
            note.title = title;
        }
        if let Some(content) = update.content {
            note.content = content;
        }
        if let Some(tags) = tags {
            note.tags = tags;
        }
        note.updated_at = Utc::now();

        Ok(note.clone())
    }

    /// Removes the note and returns its prior value.
    pub fn delete(&mut self, id: Uuid) -> Result<Note> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or_else(|| Error::NotFound("Note not found".into()))?;

        Ok(self.notes.remove(index))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// One-time demo seeding, invoked explicitly at startup when
    /// `SEED_DEMO_NOTES` is set. Deliberately not inferred from an empty
    /// collection: deleting the last note must leave the store empty.
    pub fn seed_demo_notes(&mut self) -> Result<usize> {
        let fixtures = [
            (
                "Welcome to Notes",
                "Create, tag and search short text notes. Use the AI assistant to summarize a note, suggest a title, or expand a rough idea into a draft.",
                &["getting-started"][..],
            ),
            (
                "Weekly planning",
                "Monday: review open items. Wednesday: sync with the team. Friday: write up progress and plan next week.",
                &["work", "planning"][..],
            ),
            (
                "Reading list",
                "Articles and papers to get through this month, roughly in priority order.",
                &["reading", "personal"][..],
            ),
        ];
        let count = fixtures.len();

        for (title, content, tags) in fixtures {
            self.create(CreateNote {
                title: title.into(),
                content: content.into(),
                tags: tags.iter().map(|tag| tag.to_string()).collect(),
            })?;
        }

        Ok(count)
    }
}

/// Trims, lowercases and deduplicates tags, preserving first-seen order.
fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_args(title: &str, content: &str, tags: &[&str]) -> CreateNote {
        CreateNote {
            title: title.into(),
            content: content.into(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    #[test]
    fn create_then_get_returns_same_fields() {
        let mut repo = NoteRepository::new();
        let note = repo
            .create(create_args("Groceries", "milk, eggs", &["home"]))
            .unwrap();

        let found = repo.get(note.id).unwrap();
        assert_eq!(found.title, "Groceries");
        assert_eq!(found.content, "milk, eggs");
        assert_eq!(found.tags, vec!["home"]);
        assert_eq!(found.created_at, found.updated_at);
    }

    #[test]
    fn create_rejects_missing_fields() {
        let mut repo = NoteRepository::new();

        for args in [
            create_args("", "content", &["a"]),
            create_args("title", "", &["a"]),
            create_args("title", "content", &[]),
            create_args("title", "content", &["", "  "]),
        ] {
            assert!(matches!(repo.create(args), Err(Error::Validation(_))));
            assert_eq!(repo.len(), 0);
        }
    }

    #[test]
    fn create_prepends() {
        let mut repo = NoteRepository::new();
        repo.create(create_args("first", "1", &["a"])).unwrap();
        repo.create(create_args("second", "2", &["a"])).unwrap();

        let notes = repo.list();
        assert_eq!(notes[0].title, "second");
        assert_eq!(notes[1].title, "first");
    }

    #[test]
    fn tags_are_normalized_and_deduplicated() {
        let mut repo = NoteRepository::new();
        let note = repo
            .create(create_args("t", "c", &[" Work ", "work", "URGENT"]))
            .unwrap();

        assert_eq!(note.tags, vec!["work", "urgent"]);
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let mut repo = NoteRepository::new();
        let note = repo.create(create_args("old", "body", &["a"])).unwrap();

        let updated = repo
            .update(
                note.id,
                NoteUpdate {
                    title: Some("new".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "new");
        assert_eq!(updated.content, "body");
        assert_eq!(updated.tags, vec!["a"]);
        assert_eq!(updated.created_at, note.created_at);
        assert!(updated.updated_at >= note.updated_at);
    }

    #[test]
    fn update_with_empty_tags_leaves_note_unmodified() {
        let mut repo = NoteRepository::new();
        let note = repo.create(create_args("t", "c", &["a"])).unwrap();

        let result = repo.update(
            note.id,
            NoteUpdate {
                tags: Some(vec![]),
                ..Default::default()
            },
        );

        assert!(matches!(result, Err(Error::Validation(_))));
        let unchanged = repo.get(note.id).unwrap();
        assert_eq!(unchanged.tags, vec!["a"]);
        assert_eq!(unchanged.updated_at, note.updated_at);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut repo = NoteRepository::new();
        let result = repo.update(Uuid::now_v7(), NoteUpdate::default());
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn delete_returns_prior_value_and_removes() {
        let mut repo = NoteRepository::new();
        let note = repo.create(create_args("t", "c", &["a"])).unwrap();
        repo.create(create_args("other", "c", &["b"])).unwrap();

        let deleted = repo.delete(note.id).unwrap();
        assert_eq!(deleted.title, "t");
        assert_eq!(repo.len(), 1);
        assert!(matches!(repo.get(note.id), Err(Error::NotFound(_))));
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut repo = NoteRepository::new();
        assert!(matches!(
            repo.delete(Uuid::now_v7()),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn seeding_is_explicit() {
        let mut repo = NoteRepository::new();
        let seeded = repo.seed_demo_notes().unwrap();
        assert_eq!(repo.len(), seeded);

        // Emptying the store does not trigger re-seeding.
        for note in repo.list() {
            repo.delete(note.id).unwrap();
        }
        assert!(repo.is_empty());
        assert!(repo.list().is_empty());
    }
}
