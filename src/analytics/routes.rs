use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use chrono::Utc;

use crate::{extract::Json, state::AppState, Result};

use super::{snapshot, AnalyticsData};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/analytics", get(get_analytics))
        .route("/analytics/reset", post(reset_analytics))
        .with_state(state)
}

async fn get_analytics(State(state): State<AppState>) -> Result<Json<AnalyticsData>> {
    let notes = state.repo.read().await.list();
    let usage = state.usage.read().await.clone();
    Ok(Json(snapshot(&notes, &usage, Utc::now())))
}

async fn reset_analytics(State(state): State<AppState>) -> StatusCode {
    state.usage.write().await.reset();
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        analytics::AnalyticsData,
        tests::{test_server, test_state},
        Result,
    };

    #[tokio::test]
    async fn analytics_reflect_notes_and_reset_clears_usage() -> Result<()> {
        let server = test_server(test_state())?;

        server
            .post("/notes")
            .json(&json!({ "title": "t", "content": "c", "tags": ["work"] }))
            .await;
        server
            .post("/ai")
            .json(&json!({ "action": "summarize", "content": "some note text" }))
            .await;

        let data = server.get("/analytics").await.json::<AnalyticsData>();
        assert_eq!(data.total_notes, 1);
        assert_eq!(data.notes_this_week, 1);
        assert_eq!(data.ai_usage_count, 1);
        assert_eq!(data.ai_feature_usage.summarize, 1);
        assert_eq!(data.tag_popularity[0].name, "work");

        let response = server.post("/analytics/reset").await;
        assert_eq!(response.status_code(), 204);

        let data = server.get("/analytics").await.json::<AnalyticsData>();
        assert_eq!(data.ai_usage_count, 0);
        assert_eq!(data.total_notes, 1);
        Ok(())
    }
}
