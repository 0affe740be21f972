//! OpenAI chat-completions adapter with local tiktoken counting.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use haystack_core::{EvalError, ModelSpec, Provider};
use serde_json::Value;
use tiktoken_rs::CoreBPE;

const MODELS: &[ModelSpec] = &[
    ModelSpec { name: "gpt-4-32k-0314", max_tokens: 32_000 },
    ModelSpec { name: "gpt-4-32k-0613", max_tokens: 32_000 },
    ModelSpec { name: "gpt-4-1106-preview", max_tokens: 128_000 },
    ModelSpec { name: "gpt-4o", max_tokens: 128_000 },
    ModelSpec { name: "gpt-4o-mini", max_tokens: 128_000 },
    ModelSpec { name: "gpt-3.5-turbo-1106", max_tokens: 16_000 },
    ModelSpec { name: "gpt-3.5-turbo-16k-0613", max_tokens: 16_000 },
    ModelSpec { name: "gpt-3.5-turbo-0125", max_tokens: 16_000 },
];

pub struct OpenAiProvider {
    model: ModelSpec,
    bpe: CoreBPE,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn models() -> &'static [ModelSpec] {
        MODELS
    }

    pub fn new(model_name: &str) -> Result<Self> {
        let model = *MODELS
            .iter()
            .find(|m| m.name == model_name)
            .ok_or_else(|| anyhow::anyhow!("unknown OpenAI model: {model_name}"))?;
        // The 4o family moved to the o200k vocabulary.
        let bpe = if matches!(model.name, "gpt-4o" | "gpt-4o-mini") {
            tiktoken_rs::o200k_base()?
        } else {
            tiktoken_rs::cl100k_base()?
        };
        Ok(Self {
            model,
            bpe,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(120))
                .build()?,
        })
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn model_name(&self) -> &str {
        self.model.name
    }

    fn max_tokens(&self) -> u32 {
        self.model.max_tokens
    }

    async fn count_tokens(&self, text: &str) -> Result<u32, EvalError> {
        Ok(self.bpe.encode_with_special_tokens(text).len() as u32)
    }

    async fn generate_completion(
        &self,
        user_text: &str,
        system_text: Option<&str>,
    ) -> Result<String, EvalError> {
        let api_key = std::env::var("OPENAI_KEY")
            .map_err(|_| EvalError::Completion("OPENAI_KEY is not set".into()))?;

        let mut messages = Vec::new();
        if let Some(system) = system_text {
            messages.push(serde_json::json!({ "role": "system", "content": system }));
        }
        messages.push(serde_json::json!({ "role": "user", "content": user_text }));
        let body = serde_json::json!({
            "model": self.model.name,
            "temperature": 0,
            "max_tokens": 300,
            "messages": messages,
        });

        let response = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| EvalError::Completion(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EvalError::Completion(format!(
                "OpenAI API error ({status}): {body}"
            )));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| EvalError::Completion(e.to_string()))?;
        json["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| EvalError::Completion("response carried no message content".into()))
    }
}
