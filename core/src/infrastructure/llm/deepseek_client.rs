use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    assistant::ports::LlmClient,
    common::{LlmConfig, entities::app_errors::CoreError},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI-compatible chat-completions client (DeepSeek by default). One
/// request per call, no retry; failures surface as `ExternalService`.
#[derive(Debug, Clone)]
pub struct DeepSeekLlmClient {
    api_key: String,
    base_url: String,
    model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageResponse,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: String,
}

impl DeepSeekLlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, anyhow::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            api_key: config.api_key,
            base_url: config.base_url,
            model: config.model,
            client,
        })
    }

    async fn call_chat_api(&self, request: ChatRequest) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("chat completion request failed: {}", e);
                CoreError::ExternalService(format!("LLM API error: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("chat completion error: {} - {}", status, error_text);
            return Err(CoreError::ExternalService(format!(
                "LLM API returned error: {status} - {error_text}"
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("failed to parse chat completion response: {}", e);
            CoreError::ExternalService(format!("failed to parse LLM response: {e}"))
        })?;

        chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| CoreError::ExternalService("no response from LLM".to_string()))
    }
}

impl LlmClient for DeepSeekLlmClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        // json_object mode has no server-side schema enforcement, so the
        // schema rides along in the system message.
        let system = format!(
            "You are a helpful restaurant assistant. Respond only with a JSON object that \
             conforms to this schema, without markdown or explanations:\n{response_schema}"
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system,
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        self.call_chat_api(request).await
    }
}
