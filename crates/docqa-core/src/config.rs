//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars
//! (nested keys separated by `__`, e.g. `APP_ASSISTANT__TOP_K=5`), plus
//! [`expand_path`] for `~` and `${VAR}` in document paths.
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::chunker::{ChunkingConfig, DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP};
use crate::error::{Error, Result};
use crate::prompt::PromptTemplate;

pub const DEFAULT_TOP_K: usize = 3;
pub const ASSISTANT_SECTION: &str = "assistant";

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            other => tracing::warn!(env = other, "unknown RUST_ENV, using config.toml only"),
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        AssistantSettings::from_config(&config)?;
        Ok(config)
    }

    pub fn from_figment(figment: Figment) -> Self { Self { figment } }

    pub fn contains(&self, key: &str) -> bool { self.figment.contains(key) }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }
}

/// Setup of a document assistant: window geometry, result count and prompt wording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantSettings {
    pub chunk_size: usize,
    pub overlap: usize,
    pub top_k: usize,
    /// Results scoring below this are dropped before prompting. `None` keeps all.
    pub min_score: Option<f32>,
    pub prompt: PromptTemplate,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
            top_k: DEFAULT_TOP_K,
            min_score: None,
            prompt: PromptTemplate::default(),
        }
    }
}

impl AssistantSettings {
    /// Validated settings with the default prompt.
    pub fn new(chunk_size: usize, overlap: usize, top_k: usize) -> Result<Self> {
        let settings = Self { chunk_size, overlap, top_k, ..Self::default() };
        settings.validate()?;
        Ok(settings)
    }

    /// Reads the `assistant` section; a missing section yields the defaults.
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings = if config.contains(ASSISTANT_SECTION) {
            config.get::<Self>(ASSISTANT_SECTION).map_err(|e| Error::invalid_config(e.to_string()))?
        } else {
            Self::default()
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn chunking(&self) -> ChunkingConfig {
        ChunkingConfig { chunk_size: self.chunk_size, overlap: self.overlap }
    }

    pub fn validate(&self) -> Result<()> {
        self.chunking().validate()?;
        if self.top_k == 0 {
            return Err(Error::invalid_config("top_k must be greater than zero"));
        }
        if let Some(min) = self.min_score {
            if !(-1.0..=1.0).contains(&min) {
                return Err(Error::invalid_config(format!("min_score ({min}) must lie in [-1, 1]")));
            }
        }
        Ok(())
    }
}

/// Expands a leading `~` and `$VAR` / `${VAR}` references in a document path.
///
/// Non-UTF-8 paths and paths naming an unset variable come back unchanged.
pub fn expand_path(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else { return path.to_path_buf() };
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(e) => {
            tracing::debug!(path = raw, error = %e, "leaving path unexpanded");
            path.to_path_buf()
        }
    }
}
