//! Deterministic local substitutes for provider responses, so the caller
//! always receives something displayable.

use super::AiAction;

/// Substitute used when no provider is configured at all.
pub fn unconfigured(action: AiAction, content: &str, prompt: Option<&str>) -> String {
    match action {
        AiAction::Summarize => "**Summary:** This note discusses key topics and ideas. \
            Main points include various concepts that would benefit from further \
            organization and development."
            .into(),
        AiAction::AutoTitle => title_from_content(content),
        AiAction::Generate => format!(
            "Here's a note based on your input: \"{}\"\n\n\
             Key points to expand on:\n\
             \u{2022} Main topic or theme\n\
             \u{2022} Supporting details\n\
             \u{2022} Action items or next steps\n\
             \u{2022} Additional thoughts or ideas",
            prompt.unwrap_or_default()
        ),
    }
}

/// Substitute paired with a provider failure.
pub fn provider_failed(action: AiAction, content: &str, prompt: Option<&str>) -> String {
    match action {
        AiAction::Summarize => "**Summary:** This note covers several key topics. \
            Due to AI service limitations, please review the content manually for \
            the main points."
            .into(),
        AiAction::AutoTitle => "Untitled Note".into(),
        AiAction::Generate => format!(
            "Note: {}\n\n(AI generation temporarily unavailable - please expand manually)",
            prompt.unwrap_or(content)
        ),
    }
}

/// First six words of the content, stripped of punctuation.
fn title_from_content(content: &str) -> String {
    let title: String = content
        .split_whitespace()
        .take(6)
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect();
    let title = title.trim();

    if title.is_empty() {
        "New Note".into()
    } else {
        title.into()
    }
}
