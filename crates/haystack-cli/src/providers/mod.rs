//! Concrete provider adapters.
//!
//! Each adapter binds one vendor API to the [`Provider`] capability trait
//! and carries a static catalog of the models it can drive.

pub mod anthropic;
pub mod mistral;
pub mod openai;

pub use anthropic::AnthropicProvider;
pub use mistral::MistralProvider;
pub use openai::OpenAiProvider;

use anyhow::Result;
use haystack_core::{ModelSpec, Provider};

/// Every model the driver can offer, tagged with its vendor.
pub fn catalog() -> Vec<(&'static str, ModelSpec)> {
    let mut entries = Vec::new();
    entries.extend(OpenAiProvider::models().iter().map(|m| ("openai", *m)));
    entries.extend(AnthropicProvider::models().iter().map(|m| ("anthropic", *m)));
    entries.extend(MistralProvider::models().iter().map(|m| ("mistral", *m)));
    entries
}

/// Constructs the adapter owning `model_name`.
///
/// An unknown model is the one fatal configuration error the benchmark has.
pub fn build(model_name: &str) -> Result<Box<dyn Provider>> {
    if OpenAiProvider::models().iter().any(|m| m.name == model_name) {
        return Ok(Box::new(OpenAiProvider::new(model_name)?));
    }
    if AnthropicProvider::models().iter().any(|m| m.name == model_name) {
        return Ok(Box::new(AnthropicProvider::new(model_name)?));
    }
    if MistralProvider::models().iter().any(|m| m.name == model_name) {
        return Ok(Box::new(MistralProvider::new(model_name)?));
    }
    anyhow::bail!("unknown model: {model_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique() {
        let names: Vec<&str> = catalog().iter().map(|(_, m)| m.name).collect();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn unknown_model_is_a_fatal_config_error() {
        assert!(build("gpt-does-not-exist").is_err());
    }
}
