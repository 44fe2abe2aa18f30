use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::RwLock;

use crate::{ai::AiClient, analytics::AiUsage, notes::NoteRepository};

/// Shared application state. The repository and the usage counters live
/// behind a single `RwLock` each; handlers keep lock scopes short and the
/// AI provider call is never made while a lock is held.
#[derive(FromRef, Clone)]
pub struct AppState {
    pub repo: Arc<RwLock<NoteRepository>>,
    pub usage: Arc<RwLock<AiUsage>>,
    pub ai: AiClient,
}

impl AppState {
    pub fn new(ai: AiClient) -> Self {
        Self {
            repo: Arc::new(RwLock::new(NoteRepository::new())),
            usage: Arc::new(RwLock::new(AiUsage::default())),
            ai,
        }
    }
}
