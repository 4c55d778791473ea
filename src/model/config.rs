use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Subset of a hub `config.json` that identifies the architecture.
///
/// Field names vary little across causal LM families, but none are guaranteed,
/// so everything except `model_type` is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub model_type: Option<String>,
    #[serde(default)]
    pub architectures: Vec<String>,
    #[serde(default)]
    pub hidden_size: Option<usize>,
    #[serde(default)]
    pub num_hidden_layers: Option<usize>,
    #[serde(default)]
    pub num_attention_heads: Option<usize>,
    #[serde(default)]
    pub num_key_value_heads: Option<usize>,
    #[serde(default)]
    pub vocab_size: Option<usize>,
    #[serde(default)]
    pub max_position_embeddings: Option<usize>,
}

impl ModelConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read model config: {:?}", path))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Malformed model config.json")
    }

    /// Display name for the architecture, preferring the `architectures` list
    /// over the lowercase `model_type`.
    pub fn architecture(&self) -> &str {
        self.architectures
            .first()
            .map(|s| s.as_str())
            .or(self.model_type.as_deref())
            .unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_llama_style_config() {
        let raw = r#"{
            "architectures": ["Qwen2ForCausalLM"],
            "model_type": "qwen2",
            "hidden_size": 896,
            "num_hidden_layers": 24,
            "num_attention_heads": 14,
            "num_key_value_heads": 2,
            "vocab_size": 151936,
            "max_position_embeddings": 32768,
            "rope_theta": 1000000.0
        }"#;
        let config = ModelConfig::from_json(raw).unwrap();
        assert_eq!(config.architecture(), "Qwen2ForCausalLM");
        assert_eq!(config.hidden_size, Some(896));
        assert_eq!(config.num_hidden_layers, Some(24));
        assert_eq!(config.vocab_size, Some(151936));
    }

    #[test]
    fn test_tolerates_sparse_config() {
        let config = ModelConfig::from_json(r#"{"model_type": "gpt2"}"#).unwrap();
        assert_eq!(config.architecture(), "gpt2");
        assert_eq!(config.hidden_size, None);
    }

    #[test]
    fn test_unknown_architecture_fallback() {
        let config = ModelConfig::from_json("{}").unwrap();
        assert_eq!(config.architecture(), "unknown");
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(ModelConfig::from_json("{").is_err());
    }
}
