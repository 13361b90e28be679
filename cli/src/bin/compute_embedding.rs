//! `compute-embedding <text>`: print the embedding of one text as a JSON
//! array. Used to precompute job embeddings when postings are created.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jobmatch_cli::{AppConfig, logging, output};
use jobmatch_embeddings::{Embedding, EmbeddingProvider};

#[derive(Debug, Parser)]
#[command(
    name = "compute-embedding",
    version,
    about = "Print the embedding vector of a text"
)]
struct Cli {
    /// Text to embed, used as-is.
    text: String,

    /// TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return output::usage_error(err),
    };
    logging::init();

    match run(cli).await {
        Ok(embedding) => output::emit(&embedding),
        Err(err) => output::fail(&err),
    }
}

async fn run(cli: Cli) -> anyhow::Result<Embedding> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let provider = config.embedding.shared_provider().get().await?;
    Ok(provider.embed_text(&cli.text).await?)
}
