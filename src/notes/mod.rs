mod handlers;
mod model;
mod repository;
mod routes;

pub use model::{CreateNote, Note, NoteResponse, NoteUpdate, NotesResponse, TagsResponse};
pub use repository::NoteRepository;
pub use routes::router;
