use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use candle_core::{Device, Tensor};

use super::config::ModelConfig;

#[derive(Debug, Clone)]
pub struct ModelMetadata {
    pub name: String,
    pub architecture: String,
    pub n_layer: usize,
    pub n_embd: usize,
    pub n_head: usize,
    pub vocab_size: usize,
    pub context_length: usize,
    pub num_tensors: usize,
    pub num_params: usize,
    pub weight_bytes: u64,
}

/// A pretrained causal LM instantiated from safetensors checkpoints.
///
/// All tensors are materialized on the CPU device; the struct owns them for
/// the lifetime of the process.
pub struct Model {
    tensors: HashMap<String, Tensor>,
    config: ModelConfig,
    metadata: ModelMetadata,
}

impl Model {
    pub fn load(name: &str, config_path: &Path, weight_paths: &[PathBuf]) -> Result<Self> {
        let config = ModelConfig::from_file(config_path)?;
        let device = Device::Cpu;

        let mut tensors = HashMap::new();
        let mut weight_bytes = 0u64;
        for path in weight_paths {
            weight_bytes += std::fs::metadata(path)
                .with_context(|| format!("Failed to stat weight file: {:?}", path))?
                .len();

            let shard = candle_core::safetensors::load(path, &device)
                .with_context(|| format!("Failed to load safetensors: {:?}", path))?;
            tensors.extend(shard);
        }
        anyhow::ensure!(!tensors.is_empty(), "Checkpoint contains no tensors");

        let num_params = count_params(tensors.values());
        let metadata = ModelMetadata {
            name: name.to_string(),
            architecture: config.architecture().to_string(),
            n_layer: config.num_hidden_layers.unwrap_or(0),
            n_embd: config.hidden_size.unwrap_or(0),
            n_head: config.num_attention_heads.unwrap_or(0),
            vocab_size: config.vocab_size.unwrap_or(0),
            context_length: config.max_position_embeddings.unwrap_or(0),
            num_tensors: tensors.len(),
            num_params,
            weight_bytes,
        };

        tracing::info!(
            "Loaded model: {} ({}, {} tensors, {} params)",
            metadata.name,
            metadata.architecture,
            metadata.num_tensors,
            metadata.num_params
        );

        Ok(Self {
            tensors,
            config,
            metadata,
        })
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn tensor(&self, name: &str) -> Option<&Tensor> {
        self.tensors.get(name)
    }
}

fn count_params<'a>(tensors: impl Iterator<Item = &'a Tensor>) -> usize {
    tensors.map(|t| t.elem_count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use candle_core::DType;

    #[test]
    fn test_count_params_sums_elements() {
        let device = Device::Cpu;
        let a = Tensor::zeros((2, 3), DType::F32, &device).unwrap();
        let b = Tensor::zeros(5, DType::F32, &device).unwrap();
        assert_eq!(count_params([&a, &b].into_iter()), 11);
    }

    #[test]
    fn test_load_roundtrip_from_saved_checkpoint() {
        let dir = std::env::temp_dir().join("hubload-loader-test");
        std::fs::create_dir_all(&dir).unwrap();

        let device = Device::Cpu;
        let mut tensors = HashMap::new();
        tensors.insert(
            "embed.weight".to_string(),
            Tensor::zeros((4, 2), DType::F32, &device).unwrap(),
        );
        let weights_path = dir.join("model.safetensors");
        candle_core::safetensors::save(&tensors, &weights_path).unwrap();

        let config_path = dir.join("config.json");
        std::fs::write(
            &config_path,
            r#"{"model_type": "llama", "hidden_size": 2, "num_hidden_layers": 1}"#,
        )
        .unwrap();

        let model = Model::load("tiny", &config_path, &[weights_path]).unwrap();
        assert_eq!(model.metadata().num_tensors, 1);
        assert_eq!(model.metadata().num_params, 8);
        assert_eq!(model.metadata().architecture, "llama");
        assert!(model.tensor("embed.weight").is_some());
    }

    #[test]
    fn test_load_fails_on_missing_config() {
        let missing = std::env::temp_dir().join("hubload-no-such-config.json");
        assert!(Model::load("x", &missing, &[]).is_err());
    }
}
