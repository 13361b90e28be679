//! Runtime configuration for the command-line tools.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `JOBMATCH_*` environment variables (a `.env` file in the
//! working directory is loaded first). Command-line flags are applied by
//! the binaries on top of the result.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use jobmatch_embeddings::{
    DEFAULT_DIMENSION, DEFAULT_MODEL, EmbeddingError, OpenAICompatibleProvider, SharedProvider,
};
use jobmatch_recommender::RecommenderConfig;
use serde::{Deserialize, Serialize};

static SHARED_PROVIDER: OnceLock<SharedProvider<OpenAICompatibleProvider>> = OnceLock::new();

/// Complete configuration for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the exported student and job collections.
    pub store_dir: PathBuf,

    /// Embedding model endpoint.
    pub embedding: EmbeddingSettings,

    /// Ranking behaviour.
    pub recommender: RecommenderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from("data"),
            embedding: EmbeddingSettings::default(),
            recommender: RecommenderConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load defaults, the optional TOML file and the process environment.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();

        let mut config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("invalid configuration")
    }

    fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Override fields from `JOBMATCH_*` variables resolved through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("JOBMATCH_STORE_DIR") {
            self.store_dir = PathBuf::from(dir);
        }
        if let Some(url) = lookup("JOBMATCH_EMBEDDING_BASE_URL") {
            self.embedding.base_url = url;
        }
        if let Some(model) = lookup("JOBMATCH_EMBEDDING_MODEL") {
            self.embedding.model = model;
        }
        if let Some(key) = lookup("JOBMATCH_EMBEDDING_API_KEY") {
            self.embedding.api_key = Some(key).filter(|k| !k.is_empty());
        }
        if let Some(dimension) = parse_var(&lookup, "JOBMATCH_EMBEDDING_DIMENSION")? {
            self.embedding.dimension = dimension;
        }
        if let Some(timeout) = parse_var(&lookup, "JOBMATCH_EMBEDDING_TIMEOUT_SECS")? {
            self.embedding.timeout_secs = timeout;
        }
        if let Some(max_results) = parse_var(&lookup, "JOBMATCH_MAX_RESULTS")? {
            self.recommender.max_results = max_results;
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> anyhow::Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .with_context(|| format!("invalid value for {key}: {raw:?}"))
        })
        .transpose()
}

/// Where and how to reach the embedding model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    /// Base URL of an OpenAI-compatible embeddings API.
    pub base_url: String,

    /// Model name sent with every request.
    pub model: String,

    /// Optional bearer token.
    pub api_key: Option<String>,

    /// Dimension the model produces; stored job embeddings must match it.
    pub dimension: usize,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/v1".to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            dimension: DEFAULT_DIMENSION,
            timeout_secs: 30,
        }
    }
}

impl EmbeddingSettings {
    /// The process-wide provider handle. The model is built from the
    /// settings of the first caller; later callers get the same handle.
    pub fn shared_provider(&self) -> &'static SharedProvider<OpenAICompatibleProvider> {
        SHARED_PROVIDER.get_or_init(|| {
            let settings = self.clone();
            SharedProvider::new(move || settings.build_provider())
        })
    }

    /// Build a provider from these settings.
    pub fn build_provider(&self) -> jobmatch_embeddings::Result<OpenAICompatibleProvider> {
        if self.base_url.trim().is_empty() {
            return Err(EmbeddingError::ModelUnavailable(
                "no embedding endpoint configured".to_string(),
            ));
        }
        if self.dimension == 0 {
            return Err(EmbeddingError::ModelUnavailable(
                "embedding dimension must be positive".to_string(),
            ));
        }

        let mut provider = OpenAICompatibleProvider::new()
            .with_base_url(&self.base_url)
            .with_model(&self.model)
            .with_dimension(self.dimension)
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(key) = &self.api_key {
            provider = provider.with_api_key(key);
        }
        Ok(provider)
    }
}
