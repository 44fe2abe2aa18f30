use axum::{extract::State, routing::post, Router};

use crate::{extract::Json, state::AppState, Result};

use super::{fallback, AiRequest, AiResponse};

pub fn router(state: AppState) -> Router {
    Router::new().route("/ai", post(assist)).with_state(state)
}

/// Provider errors are never surfaced as hard failures: every response is
/// success-shaped, carrying either the completion or a deterministic
/// fallback. Usage is recorded exactly when `success` is true.
async fn assist(State(state): State<AppState>, Json(args): Json<AiRequest>) -> Result<Json<AiResponse>> {
    let AiRequest {
        action,
        content,
        prompt,
    } = args;
    let prompt = prompt.as_deref();

    if !state.ai.is_configured() {
        state.usage.write().await.record(action);
        return Ok(Json(AiResponse::success(fallback::unconfigured(
            action, &content, prompt,
        ))));
    }

    // No repository lock is held while the provider call is in flight.
    match state.ai.complete(action, &content, prompt).await {
        Ok(result) => {
            state.usage.write().await.record(action);
            Ok(Json(AiResponse::success(result)))
        }
        Err(error) => {
            tracing::warn!("AI provider call failed: {error}");
            Ok(Json(AiResponse::failed(fallback::provider_failed(
                action, &content, prompt,
            ))))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        ai::AiResponse,
        analytics::AnalyticsData,
        tests::{test_server, test_state},
        Result,
    };

    #[tokio::test]
    async fn unconfigured_provider_returns_fallback_and_records_usage() -> Result<()> {
        let server = test_server(test_state())?;

        let response = server
            .post("/ai")
            .json(&json!({ "action": "summarize", "content": "a note about planning" }))
            .await;

        assert_eq!(response.status_code(), 200);
        let body = response.json::<AiResponse>();
        assert!(body.success);
        let result = body.result.unwrap();
        assert!(result.starts_with("**Summary:**"));

        let data = server.get("/analytics").await.json::<AnalyticsData>();
        assert_eq!(data.ai_usage_count, 1);
        assert_eq!(data.ai_feature_usage.summarize, 1);
        Ok(())
    }

    #[tokio::test]
    async fn auto_title_fallback_uses_leading_words() -> Result<()> {
        let server = test_server(test_state())?;

        let response = server
            .post("/ai")
            .json(&json!({
                "action": "autoTitle",
                "content": "Shopping list for the long weekend: bread, cheese"
            }))
            .await;

        let body = response.json::<AiResponse>();
        assert!(body.success);
        assert_eq!(body.result.unwrap(), "Shopping list for the long weekend");
        Ok(())
    }

    #[tokio::test]
    async fn unknown_action_is_validation_error() -> Result<()> {
        let server = test_server(test_state())?;

        let response = server
            .post("/ai")
            .json(&json!({ "action": "translate", "content": "x" }))
            .await;

        assert_eq!(response.status_code(), 400);
        assert_eq!(response.json::<serde_json::Value>()["error"], "validation");
        Ok(())
    }
}
