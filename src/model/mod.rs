pub mod config;
pub mod loader;
pub mod tokenizer;

pub use config::ModelConfig;
pub use loader::{Model, ModelMetadata};
pub use tokenizer::TokenizerWrapper;
