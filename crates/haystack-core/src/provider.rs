//! Provider capability contract consumed by the engine.

use async_trait::async_trait;

use crate::error::EvalError;

/// A model a provider can run, with its advertised context ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSpec {
    pub name: &'static str,
    /// Advertised context window, in provider-counted tokens.
    pub max_tokens: u32,
}

/// How the haystack is rendered and how answers come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presentation {
    /// Natural-language sentences; answers as a JSON array of records.
    #[default]
    Record,
    /// Function-like declarations in a fenced code block; answers as
    /// `name()` calls.
    Identifier,
}

/// One completion provider bound to a concrete model.
///
/// The engine depends only on this trait; concrete API adapters live with
/// the driver binary. `count_tokens` may be pure local computation or
/// suspend on network I/O, the synthesizer does not care which.
#[async_trait]
pub trait Provider: Send + Sync {
    fn model_name(&self) -> &str;

    fn max_tokens(&self) -> u32;

    /// Prompt/parse presentation this model expects.
    fn presentation(&self) -> Presentation {
        Presentation::Record
    }

    /// Number of tokens `text` occupies in this model's context window.
    async fn count_tokens(&self, text: &str) -> Result<u32, EvalError>;

    /// One completion for `user_text`, with an optional task instruction
    /// delivered as the system message where the API supports one.
    async fn generate_completion(
        &self,
        user_text: &str,
        system_text: Option<&str>,
    ) -> Result<String, EvalError>;
}
