//! Mistral Codestral adapter, running the identifier presentation.
//!
//! Counting is local through a Hugging Face tokenizer fetched once per
//! process. Codestral's exact tokenizer is not distributed; the open v3
//! instruct tokenizer is the closest public stand-in.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use haystack_core::{EvalError, ModelSpec, Presentation, Provider};
use serde_json::Value;
use tokenizers::Tokenizer;
use tokio::sync::OnceCell;

const MODELS: &[ModelSpec] = &[
    ModelSpec { name: "codestral-mamba-latest", max_tokens: 32_000 },
    ModelSpec { name: "codestral-latest", max_tokens: 256_000 },
];

const TOKENIZER_REPO: &str = "mistralai/Mistral-7B-Instruct-v0.3";

pub struct MistralProvider {
    model: ModelSpec,
    client: reqwest::Client,
    tokenizer: OnceCell<Tokenizer>,
}

impl MistralProvider {
    pub fn models() -> &'static [ModelSpec] {
        MODELS
    }

    pub fn new(model_name: &str) -> Result<Self> {
        let model = *MODELS
            .iter()
            .find(|m| m.name == model_name)
            .ok_or_else(|| anyhow::anyhow!("unknown Mistral model: {model_name}"))?;
        Ok(Self {
            model,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(120))
                .build()?,
            tokenizer: OnceCell::new(),
        })
    }

    async fn tokenizer(&self) -> Result<&Tokenizer, EvalError> {
        self.tokenizer
            .get_or_try_init(|| async {
                tokio::task::spawn_blocking(|| {
                    let path = hf_hub::api::sync::Api::new()
                        .map_err(|e| EvalError::TokenCount(e.to_string()))?
                        .model(TOKENIZER_REPO.to_string())
                        .get("tokenizer.json")
                        .map_err(|e| EvalError::TokenCount(e.to_string()))?;
                    Tokenizer::from_file(path).map_err(|e| EvalError::TokenCount(e.to_string()))
                })
                .await
                .map_err(|e| EvalError::TokenCount(e.to_string()))?
            })
            .await
    }
}

#[async_trait]
impl Provider for MistralProvider {
    fn model_name(&self) -> &str {
        self.model.name
    }

    fn max_tokens(&self) -> u32 {
        self.model.max_tokens
    }

    fn presentation(&self) -> Presentation {
        Presentation::Identifier
    }

    async fn count_tokens(&self, text: &str) -> Result<u32, EvalError> {
        let tokenizer = self.tokenizer().await?;
        let encoding = tokenizer
            .encode(text, false)
            .map_err(|e| EvalError::TokenCount(e.to_string()))?;
        Ok(encoding.get_ids().len() as u32)
    }

    async fn generate_completion(
        &self,
        user_text: &str,
        system_text: Option<&str>,
    ) -> Result<String, EvalError> {
        let api_key = std::env::var("MISTRAL_KEY")
            .map_err(|_| EvalError::Completion("MISTRAL_KEY is not set".into()))?;

        let mut messages = Vec::new();
        if let Some(system) = system_text {
            messages.push(serde_json::json!({ "role": "system", "content": system }));
        }
        messages.push(serde_json::json!({ "role": "user", "content": user_text }));
        let body = serde_json::json!({
            "model": self.model.name,
            "temperature": 0,
            "max_tokens": 500,
            "messages": messages,
        });

        let response = self
            .client
            .post("https://api.mistral.ai/v1/chat/completions")
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| EvalError::Completion(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EvalError::Completion(format!(
                "Mistral API error ({status}): {body}"
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
