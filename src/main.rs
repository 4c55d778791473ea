use anyhow::Result;
use clap::Parser;
use hubload::cli::{print_model_info, FetchSpinner};
use hubload::{load_pretrained, LoadConfig, DEFAULT_MODEL_ID};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Hub model identifier (falls back to a small instruct model)
    #[arg(short, long, env = "MODEL_NAME")]
    model: Option<String>,

    /// Repo revision (branch, tag, or commit)
    #[arg(long, env = "MODEL_REVISION")]
    revision: Option<String>,

    /// Hugging Face access token
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hubload=error".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Token is checked before any hub access.
    let config = LoadConfig::resolve(args.model, args.revision, args.token)?;
    if config.model_id == DEFAULT_MODEL_ID {
        tracing::info!("MODEL_NAME not set, using {}", DEFAULT_MODEL_ID);
    }

    let spinner = FetchSpinner::new(&format!("Loading {}", config.model_id));

    let pretrained = match load_pretrained(&config) {
        Ok(p) => {
            spinner.finish(&config.model_id);
            p
        }
        Err(e) => {
            spinner.finish_with_error(&format!("Failed: {}", e));
            return Err(e);
        }
    };

    print_model_info(pretrained.model.metadata());
    tracing::debug!(
        "Tokenizer vocab size: {}",
        pretrained.tokenizer.vocab_size()
    );

    println!("Model loaded successfully!");

    Ok(())
}
