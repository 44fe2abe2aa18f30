use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::config;

use super::AiAction;

#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("AI provider request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("AI provider returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("AI provider returned an empty completion")]
    EmptyCompletion,
}

/// Thin client for the chat-completion provider. The request is bounded by
/// the configured timeout; callers must not hold the repository lock across
/// [`AiClient::complete`].
#[derive(Clone)]
pub struct AiClient {
    http: reqwest::Client,
}

impl AiClient {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config().ai_timeout_secs))
            .build()
            .unwrap();

        Self { http }
    }

    pub fn is_configured(&self) -> bool {
        config().openai_api_key.is_some()
    }

    pub async fn complete(
        &self,
        action: AiAction,
        content: &str,
        prompt: Option<&str>,
    ) -> Result<String, ProviderError> {
        let config = config();
        let api_key = config.openai_api_key.as_deref().unwrap_or_default();

        let (system_prompt, user_prompt) = prompts(action, content, prompt);
        let request = ChatRequest {
            model: &config.openai_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt.into(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens: if action == AiAction::AutoTitle { 50 } else { 500 },
            temperature: 0.7,
        };

        let url = format!(
            "{}/chat/completions",
            config.openai_base_url.trim_end_matches('/')
        );

        let response = self
            .http
            .post(url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let completion: ChatResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(ProviderError::EmptyCompletion)
    }
}

fn prompts(action: AiAction, content: &str, prompt: Option<&str>) -> (&'static str, String) {
    match action {
        AiAction::Summarize => (
            "You are a helpful assistant that creates concise summaries of notes. \
             Keep summaries under 200 words and highlight key points.",
            format!("Please summarize this note:\n\n{content}"),
        ),
        AiAction::AutoTitle => (
            "You are a helpful assistant that creates short, descriptive titles for notes. \
             Keep titles under 60 characters and make them specific and clear.",
            format!("Create a title for this note:\n\n{content}"),
        ),
        AiAction::Generate => (
            "You are a helpful assistant that expands brief ideas into well-structured notes. \
             Create organized, detailed content while maintaining the original intent.",
            format!(
                "Expand this brief idea into a detailed note:\n\n{}",
                prompt.unwrap_or(content)
            ),
        ),
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
