use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::translate::{Lang, LanguagePair};

const DEFAULT_CONFIG_PATH: &str = "conf.yaml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub model_service: ModelServiceConfig,
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Where the opus-mt models are served from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelServiceConfig {
    pub base_url: String,
    /// Bearer token; falls back to `HF_TOKEN` when unset
    pub api_token: Option<String>,
    /// Transport timeout. Unset means requests may block indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ModelServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api-inference.huggingface.co".to_string(),
            api_token: None,
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub max_length: usize,
    pub warm_up: bool,
    pub engines: Vec<EngineConfig>,
}

fn default_engines() -> Vec<EngineConfig> {
    vec![
        EngineConfig {
            source: Lang::En,
            target: Lang::Vi,
            model: "Helsinki-NLP/opus-mt-en-vi".to_string(),
        },
        EngineConfig {
            source: Lang::Vi,
            target: Lang::En,
            model: "Helsinki-NLP/opus-mt-vi-en".to_string(),
        },
    ]
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            max_length: 512,
            warm_up: true,
            engines: default_engines(),
        }
    }
}

/// One translation direction and the model serving it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub source: Lang,
    pub target: Lang,
    pub model: String,
}

impl EngineConfig {
    pub fn pair(&self) -> LanguagePair {
        LanguagePair::new(self.source, self.target)
    }
}

impl Config {
    /// Layer defaults, the YAML file and `TRANSLATOR__*` env vars.
    ///
    /// The file comes from `path`, then `CONFIG_PATH`, then `conf.yaml`, and
    /// may be absent. A plain `PORT` variable overrides `server.port`.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let path = path
            .map(str::to_string)
            .or_else(|| std::env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        debug!("Reading configuration from {}", path);

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(&path).required(false))
            .add_source(
                config::Environment::with_prefix("TRANSLATOR")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Ok(port) = std::env::var("PORT") {
            let port: u16 = port
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", port))?;
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        let config: Config = builder
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path))?
            .try_deserialize()
            .context("Invalid configuration")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let translation = &self.translation;
        if translation.max_length == 0 {
            anyhow::bail!("translation.max_length must be greater than zero");
        }
        if translation.engines.is_empty() {
            anyhow::bail!("translation.engines must list at least one direction");
        }

        let mut seen = HashSet::new();
        for engine in &translation.engines {
            if engine.source == engine.target {
                anyhow::bail!("Engine {} translates a language into itself", engine.model);
            }
            if !seen.insert(engine.pair()) {
                anyhow::bail!("Direction {} is configured more than once", engine.pair());
            }
        }
        Ok(())
    }
}
