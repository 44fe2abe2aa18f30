mod client;
pub mod fallback;
mod routes;

pub use client::{AiClient, ProviderError};
pub use routes::router;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AiAction {
    Summarize,
    AutoTitle,
    Generate,
}

#[derive(Debug, Deserialize)]
pub struct AiRequest {
    pub action: AiAction,
    pub content: String,
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

impl AiResponse {
    pub fn success(result: String) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
            fallback: None,
        }
    }

    pub fn failed(fallback: String) -> Self {
        Self {
            success: false,
            result: None,
            error: Some("AI service temporarily unavailable".into()),
            fallback: Some(fallback),
        }
    }
}
