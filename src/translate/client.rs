use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::interface::{EngineError, LanguagePair, TranslationEngine};
use crate::model_service::ModelServiceClient;

const WARM_UP_TEXT: &str = "Hello";
const WARM_UP_MAX_LENGTH: usize = 16;

/// Translation engine backed by one opus-mt model on the model service
pub struct ModelServiceEngine {
    model_service: Arc<ModelServiceClient>,
    model: String,
    pair: LanguagePair,
}

impl ModelServiceEngine {
    pub fn new(model_service: Arc<ModelServiceClient>, model: String, pair: LanguagePair) -> Self {
        Self {
            model_service,
            model,
            pair,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TranslationEngine for ModelServiceEngine {
    async fn translate(&self, text: &str, max_length: usize) -> Result<String, EngineError> {
        let outputs = self
            .model_service
            .translate(&self.model, text, max_length)
            .await?;

        // The pipeline yields one output per input; only the first matters.
        let first = outputs.into_iter().next().ok_or(EngineError::EmptyOutput)?;
        debug!("{} translation produced {} chars", self.pair, first.translation_text.chars().count());
        Ok(first.translation_text)
    }

    async fn warm_up(&self) -> Result<(), EngineError> {
        self.translate(WARM_UP_TEXT, WARM_UP_MAX_LENGTH).await.map(|_| ())
    }
}
