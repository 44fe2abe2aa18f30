mod app;
mod config;
mod errors;
mod extract;
mod state;

mod ai;
mod analytics;
mod notes;
mod query;

use tokio::net::TcpListener;
use tracing_subscriber::prelude::*;

pub use config::config;
pub use errors::{Error, Result};

use crate::{ai::AiClient, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ai_notes=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_file(true)
                .with_line_number(true)
                .with_target(false),
        )
        .try_init()
        .ok();

    let state = AppState::new(AiClient::new());

    if config.seed_demo_notes {
        let seeded = state.repo.write().await.seed_demo_notes()?;
        tracing::info!("seeded {seeded} demo notes");
    }

    let app = app::create(state);

    let port = config.port;
    let listener = TcpListener::bind(format!("127.0.0.1:{port}")).await.unwrap();

    tracing::info!("listening on http://{}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();

    Ok(())
}
