use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

use super::interface::{LanguagePair, TranslationEngine};
use super::registry::EngineRegistry;

pub const DEFAULT_MAX_LENGTH: usize = 512;

const MODELS_NOT_LOADED: &str = "Translation models are not loaded. Please try again later.";
const BATCH_MODELS_NOT_LOADED: &str = "Translation models are not loaded";

/// Blank after stripping whitespace, counting the ASCII information
/// separators U+001C..=U+001F as whitespace too.
fn is_blank(text: &str) -> bool {
    text.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
        .is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    EngineFailure(String),
}

/// Outcome of a single translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchItem {
    pub original: String,
    pub translated: String,
}

/// Routes translation requests to the engine for their language pair
pub struct Dispatcher {
    registry: Arc<EngineRegistry>,
    max_length: usize,
}

impl Dispatcher {
    pub fn new(registry: Arc<EngineRegistry>, max_length: usize) -> Self {
        Self {
            registry,
            max_length,
        }
    }

    pub fn registry(&self) -> &EngineRegistry {
        &self.registry
    }

    pub fn models_loaded(&self) -> bool {
        self.registry.all_loaded()
    }

    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<TranslationResult, DispatchError> {
        if is_blank(text) {
            return Err(DispatchError::InvalidInput("Text cannot be empty".to_string()));
        }
        self.ensure_loaded(MODELS_NOT_LOADED)?;
        let (pair, engine) = self.select(source_lang, target_lang)?;

        debug!("Translating {} chars {}", text.chars().count(), pair);
        let translated_text = engine
            .translate(text, self.max_length)
            .await
            .map_err(|e| {
                error!("{} translation failed: {}", pair, e);
                DispatchError::EngineFailure(e.to_string())
            })?;

        Ok(TranslationResult {
            original_text: text.to_string(),
            translated_text,
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        })
    }

    /// Translate every text with the same pair, in order.
    ///
    /// Fail-fast: the first engine error aborts the batch and nothing that
    /// was already translated is returned. Blank items are passed through to
    /// the engine as-is.
    pub async fn translate_batch(
        &self,
        texts: &[String],
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Vec<BatchItem>, DispatchError> {
        if texts.is_empty() {
            return Err(DispatchError::InvalidInput("Texts list cannot be empty".to_string()));
        }
        self.ensure_loaded(BATCH_MODELS_NOT_LOADED)?;
        let (pair, engine) = self.select(source_lang, target_lang)?;

        debug!("Translating batch of {} items {}", texts.len(), pair);
        let mut results = Vec::with_capacity(texts.len());
        for (index, text) in texts.iter().enumerate() {
            let translated = engine
                .translate(text, self.max_length)
                .await
                .map_err(|e| {
                    error!("{} batch item {} failed: {}", pair, index, e);
                    DispatchError::EngineFailure(e.to_string())
                })?;
            results.push(BatchItem {
                original: text.clone(),
                translated,
            });
        }

        Ok(results)
    }

    fn ensure_loaded(&self, message: &str) -> Result<(), DispatchError> {
        if self.registry.all_loaded() {
            Ok(())
        } else {
            Err(DispatchError::ServiceUnavailable(message.to_string()))
        }
    }

    fn select(
        &self,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<(LanguagePair, Arc<dyn TranslationEngine>), DispatchError> {
        LanguagePair::parse(source_lang, target_lang)
            .and_then(|pair| self.registry.get(&pair).map(|engine| (pair, engine)))
            .ok_or_else(|| {
                DispatchError::InvalidInput(
                    "Invalid language pair. Supported: en->vi or vi->en".to_string(),
                )
            })
    }
}
