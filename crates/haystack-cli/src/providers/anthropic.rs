//! Anthropic messages adapter.
//!
//! Token counting goes through the `count_tokens` endpoint rather than a
//! local tokenizer, so it suspends on I/O like completion does.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use haystack_core::{EvalError, ModelSpec, Provider};
use serde_json::Value;

const MODELS: &[ModelSpec] = &[
    ModelSpec { name: "claude-2.0", max_tokens: 100_000 },
    ModelSpec { name: "claude-2.1", max_tokens: 200_000 },
    ModelSpec { name: "claude-instant-1.2", max_tokens: 100_000 },
];

const API_VERSION: &str = "2023-06-01";

pub struct AnthropicProvider {
    model: ModelSpec,
    client: reqwest::Client,
}

impl AnthropicProvider {
    pub fn models() -> &'static [ModelSpec] {
        MODELS
    }

    pub fn new(model_name: &str) -> Result<Self> {
        let model = *MODELS
            .iter()
            .find(|m| m.name == model_name)
            .ok_or_else(|| anyhow::anyhow!("unknown Anthropic model: {model_name}"))?;
        Ok(Self {
            model,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(120))
                .build()?,
        })
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, String> {
        let api_key =
            std::env::var("ANTHROPIC_KEY").map_err(|_| "ANTHROPIC_KEY is not set".to_string())?;
        let response = self
            .client
            .post(format!("https://api.anthropic.com/v1/{path}"))
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Anthropic API error ({status}): {body}"));
        }

        response.json().await.map_err(|e| e.to_string())
    }
}

#[async_trait]
impl Provider for AnthropicProvider {
    fn model_name(&self) -> &str {
        self.model.name
    }

    fn max_tokens(&self) -> u32 {
        self.model.max_tokens
    }

    async fn count_tokens(&self, text: &str) -> Result<u32, EvalError> {
        let body = serde_json::json!({
            "model": self.model.name,
            "messages": [{ "role": "user", "content": text }],
        });
        let json = self
            .post("messages/count_tokens", &body)
            .await
            .map_err(EvalError::TokenCount)?;
        json["input_tokens"]
            .as_u64()
            .map(|n| n as u32)
            .ok_or_else(|| EvalError::TokenCount("response carried no input_tokens".into()))
    }

    async fn generate_completion(
        &self,
        user_text: &str,
        system_text: Option<&str>,
    ) -> Result<String, EvalError> {
        let mut body = serde_json::json!({
            "model": self.model.name,
            "max_tokens": 300,
            "temperature": 0,
            "messages": [{ "role": "user", "content": user_text }],
        });
        if let Some(system) = system_text {
            body["system"] = Value::String(system.to_string());
        }
        let json = self
            .post("messages", &body)
            .await
            .map_err(EvalError::Completion)?;
        json["content"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| EvalError::Completion("response carried no text content".into()))
    }
}
