//! Chat-completions client for the Groq (OpenAI-compatible) API

use async_trait::async_trait;
use hospital_core::{AgentMessage, HospitalError};
use serde::{Deserialize, Serialize};

/// Disables tool calling for every request
const TOOL_CHOICE_NONE: &str = "none";

/// A hosted language model that answers an ordered list of messages with text
#[async_trait]
pub trait LanguageModelClient: Send + Sync {
    /// Send the conversation and return the reply text (possibly empty)
    async fn complete(&self, messages: &[AgentMessage]) -> Result<String, HospitalError>;
}

/// Client for the Groq chat completions API
#[derive(Clone)]
pub struct GroqClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

/// Request body for the chat completions API
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [AgentMessage],
    tool_choice: &'static str,
}

/// Response from the chat completions API
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Error detail from the chat completions API
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GroqClient {
    /// Create a new client for `model` served at `base_url`
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl LanguageModelClient for GroqClient {
    async fn complete(&self, messages: &[AgentMessage]) -> Result<String, HospitalError> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            tool_choice: TOOL_CHOICE_NONE,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| HospitalError::Provider(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            if let Ok(api_err) = serde_json::from_str::<ApiError>(&body) {
                return Err(HospitalError::Provider(format!(
                    "Groq API error ({}): {}",
                    status, api_err.error.message
                )));
            }
            return Err(HospitalError::Provider(format!(
                "Groq API error ({}): {}",
                status, body
            )));
        }

        let reply = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| HospitalError::Provider(format!("Failed to parse response: {}", e)))?;

        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| HospitalError::Provider("No choices in response".to_string()))
    }
}
