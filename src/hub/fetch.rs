use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use hf_hub::api::sync::{Api, ApiBuilder, ApiRepo};
use hf_hub::{Repo, RepoType};

use crate::config::LoadConfig;

const CONFIG_FILE: &str = "config.json";
const TOKENIZER_FILE: &str = "tokenizer.json";
const WEIGHTS_FILE: &str = "model.safetensors";
const WEIGHTS_INDEX_FILE: &str = "model.safetensors.index.json";

/// Local (cache) paths of the artifacts a causal LM needs.
#[derive(Debug, Clone)]
pub struct RepoFiles {
    pub config: PathBuf,
    pub tokenizer: PathBuf,
    pub weights: Vec<PathBuf>,
}

/// Authenticated handle to one model repo on the hub.
///
/// Download and cache placement are owned by `hf-hub`; this only decides
/// which files to ask for.
pub struct HubClient {
    repo: ApiRepo,
    model_id: String,
}

impl HubClient {
    pub fn new(config: &LoadConfig) -> Result<Self> {
        let api: Api = ApiBuilder::new()
            .with_token(Some(config.token.clone()))
            .build()
            .context("Failed to build hub client")?;

        let repo = api.repo(Repo::with_revision(
            config.model_id.clone(),
            RepoType::Model,
            config.revision.clone(),
        ));

        Ok(Self {
            repo,
            model_id: config.model_id.clone(),
        })
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Fetch config, tokenizer, and weight files, reusing the hub cache when
    /// the files are already present.
    pub fn fetch_repo(&self) -> Result<RepoFiles> {
        let config = self
            .repo
            .get(CONFIG_FILE)
            .with_context(|| format!("Failed to fetch {} from {}", CONFIG_FILE, self.model_id))?;
        tracing::debug!("Fetched {} -> {:?}", CONFIG_FILE, config);

        let tokenizer = self.repo.get(TOKENIZER_FILE).with_context(|| {
            format!("Failed to fetch {} from {}", TOKENIZER_FILE, self.model_id)
        })?;
        tracing::debug!("Fetched {} -> {:?}", TOKENIZER_FILE, tokenizer);

        let weights = self.fetch_weights()?;

        Ok(RepoFiles {
            config,
            tokenizer,
            weights,
        })
    }

    /// Sharded checkpoints publish an index file naming their shards; single-file
    /// checkpoints just have `model.safetensors`.
    fn fetch_weights(&self) -> Result<Vec<PathBuf>> {
        if let Ok(index_path) = self.repo.get(WEIGHTS_INDEX_FILE) {
            let index = std::fs::read_to_string(&index_path)
                .with_context(|| format!("Failed to read {:?}", index_path))?;
            let shards = shards_from_index(&index)?;
            tracing::info!("Sharded checkpoint: {} shard(s)", shards.len());

            let mut paths = Vec::with_capacity(shards.len());
            for shard in &shards {
                let path = self.repo.get(shard).with_context(|| {
                    format!("Failed to fetch shard {} from {}", shard, self.model_id)
                })?;
                tracing::debug!("Fetched {} -> {:?}", shard, path);
                paths.push(path);
            }
            return Ok(paths);
        }

        let path = self
            .repo
            .get(WEIGHTS_FILE)
            .with_context(|| format!("Failed to fetch {} from {}", WEIGHTS_FILE, self.model_id))?;
        Ok(vec![path])
    }
}

/// Extract the unique shard filenames from a `model.safetensors.index.json`
/// weight map, in stable order.
fn shards_from_index(index_json: &str) -> Result<Vec<String>> {
    let index: serde_json::Value =
        serde_json::from_str(index_json).context("Malformed safetensors index")?;

    let weight_map = index
        .get("weight_map")
        .and_then(|v| v.as_object())
        .context("Safetensors index is missing weight_map")?;

    let shards: BTreeSet<String> = weight_map
        .values()
        .filter_map(|v| v.as_str())
        .map(|s| s.to_string())
        .collect();

    anyhow::ensure!(!shards.is_empty(), "Safetensors index names no shards");
    Ok(shards.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shards_from_index_dedupes_and_sorts() {
        let index = r#"{
            "metadata": {"total_size": 4},
            "weight_map": {
                "model.layers.1.weight": "model-00002-of-00002.safetensors",
                "model.embed.weight": "model-00001-of-00002.safetensors",
                "model.layers.0.weight": "model-00001-of-00002.safetensors"
            }
        }"#;
        let shards = shards_from_index(index).unwrap();
        assert_eq!(
            shards,
            vec![
                "model-00001-of-00002.safetensors".to_string(),
                "model-00002-of-00002.safetensors".to_string()
            ]
        );
    }

    #[test]
    fn test_shards_from_index_rejects_missing_weight_map() {
        assert!(shards_from_index(r#"{"metadata": {}}"#).is_err());
    }

    #[test]
    fn test_shards_from_index_rejects_empty_weight_map() {
        assert!(shards_from_index(r#"{"weight_map": {}}"#).is_err());
    }

    #[test]
    fn test_shards_from_index_rejects_garbage() {
        assert!(shards_from_index("not json").is_err());
    }
}
