use anyhow::{bail, Result};

/// Model identifier used when neither `--model` nor `MODEL_NAME` is given.
pub const DEFAULT_MODEL_ID: &str = "Qwen/Qwen2.5-0.5B-Instruct";

/// Resolved startup configuration.
///
/// Construction is the fail-fast gate: a missing token is rejected here,
/// before any hub client exists.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    pub model_id: String,
    pub revision: String,
    pub token: String,
}

impl LoadConfig {
    pub fn resolve(
        model_id: Option<String>,
        revision: Option<String>,
        token: Option<String>,
    ) -> Result<Self> {
        let token = match token {
            Some(t) if !t.trim().is_empty() => t,
            _ => bail!("Hugging Face token is not set (pass --token or export HF_TOKEN)"),
        };

        let model_id = model_id
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());

        let revision = revision
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| "main".to_string());

        Ok(Self {
            model_id,
            revision,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_rejected() {
        let err = LoadConfig::resolve(Some("org/model".into()), None, None);
        assert!(err.is_err());
    }

    #[test]
    fn test_blank_token_is_rejected() {
        let err = LoadConfig::resolve(Some("org/model".into()), None, Some("   ".into()));
        assert!(err.is_err());
    }

    #[test]
    fn test_model_id_defaults_when_absent() {
        let config = LoadConfig::resolve(None, None, Some("hf_abc".into())).unwrap();
        assert_eq!(config.model_id, DEFAULT_MODEL_ID);
        assert_eq!(config.revision, "main");
    }

    #[test]
    fn test_explicit_values_pass_through() {
        let config = LoadConfig::resolve(
            Some("org/model".into()),
            Some("refs/pr/1".into()),
            Some("hf_abc".into()),
        )
        .unwrap();
        assert_eq!(config.model_id, "org/model");
        assert_eq!(config.revision, "refs/pr/1");
        assert_eq!(config.token, "hf_abc");
    }
}
