//! Hubload
//!
//! Fetch a pretrained causal language model and its tokenizer from the
//! Hugging Face Hub and instantiate both in memory.
//!
//! # Features
//!
//! - Authenticated downloads via `HF_TOKEN` (fail-fast when unset)
//! - Safetensors checkpoints, single-file and sharded
//! - Tokenizer loading from `tokenizer.json`
//! - Hub cache reuse across runs
//!
//! # Quick Start
//!
//! ```bash
//! export HF_TOKEN=hf_...
//! export MODEL_NAME=Qwen/Qwen2.5-0.5B-Instruct
//! hubload
//! ```
//!
//! ## Library Usage
//!
//! ```rust,ignore
//! use hubload::{load_pretrained, LoadConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LoadConfig::resolve(
//!         Some("Qwen/Qwen2.5-0.5B-Instruct".into()),
//!         None,
//!         std::env::var("HF_TOKEN").ok(),
//!     )?;
//!     let pretrained = load_pretrained(&config)?;
//!     println!("{} params", pretrained.model.metadata().num_params);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod hub;
pub mod model;

use anyhow::Result;

pub use config::{LoadConfig, DEFAULT_MODEL_ID};
pub use hub::{HubClient, RepoFiles};
pub use model::{Model, ModelConfig, ModelMetadata, TokenizerWrapper};

/// A model and its companion tokenizer, both fully instantiated.
pub struct Pretrained {
    pub model: Model,
    pub tokenizer: TokenizerWrapper,
}

/// Fetch the repo named by `config` and instantiate the model and tokenizer.
///
/// The token must already have been validated by [`LoadConfig::resolve`];
/// hub, parse, and I/O failures all propagate as errors.
pub fn load_pretrained(config: &LoadConfig) -> Result<Pretrained> {
    let client = HubClient::new(config)?;
    let files = client.fetch_repo()?;

    let model = Model::load(client.model_id(), &files.config, &files.weights)?;
    let tokenizer = TokenizerWrapper::from_file(&files.tokenizer)?;

    Ok(Pretrained { model, tokenizer })
}
