//! Summary generation through the OpenRouter chat-completions API.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::CHAT_MODEL_ID;
use crate::http::check_response;

/// Anything that can turn a prompt into summary text.
///
/// The production implementation is [`OpenRouterClient`]; tests substitute a
/// canned generator.
pub trait SummaryGenerator {
    fn summarize(&self, prompt: &str) -> Result<String>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire types (chat-completions subset this pipeline uses)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// OpenRouterClient
// ─────────────────────────────────────────────────────────────────────────────

/// Blocking chat-completions client routed through an OpenRouter-compatible
/// gateway.
pub struct OpenRouterClient {
    base_url: String,
    api_key: String,
    agent: ureq::Agent,
}

impl OpenRouterClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            agent: ureq::Agent::new(),
        }
    }
}

impl SummaryGenerator for OpenRouterClient {
    /// Send `prompt` as a single user message and return the first choice's
    /// content. Transport errors, non-2xx statuses and empty choice lists
    /// all abort the run.
    fn summarize(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        log::debug!("POST {url} (model {CHAT_MODEL_ID})");

        let request = ChatRequest {
            model: CHAT_MODEL_ID,
            messages: vec![ChatMessage { role: "user", content: prompt }],
        };

        let response = check_response(
            "OpenRouter",
            self.agent
                .post(&url)
                .set("Authorization", &format!("Bearer {}", self.api_key))
                .send_json(&request),
        )?;

        let parsed: ChatResponse = response
            .into_json()
            .context("Failed to parse chat-completions response")?;

        match parsed.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content),
            None => bail!("Chat-completions response contained no choices"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = ChatRequest {
            model: CHAT_MODEL_ID,
            messages: vec![ChatMessage { role: "user", content: "hi" }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "openai/gpt-5-nano");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hi");
    }

    #[test]
    fn test_response_first_choice() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Hello world"}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.choices[0].message.content, "Hello world");
    }
}
