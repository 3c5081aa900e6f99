use std::sync::Arc;
use tracing::{info, warn};

use super::client::ModelServiceEngine;
use super::interface::TranslationEngine;
use super::registry::EngineRegistry;
use crate::config::TranslationConfig;
use crate::model_service::ModelServiceClient;

/// Factory for creating the directional translation engines
pub struct EngineFactory;

impl EngineFactory {
    /// Create one engine per configured direction.
    ///
    /// With `warm_up` enabled every engine translates a probe sentence first;
    /// an engine that fails is left out of the registry and reported as not
    /// loaded. Startup is never aborted because of it.
    pub async fn create_registry(
        translation_config: &TranslationConfig,
        model_service: Arc<ModelServiceClient>,
    ) -> EngineRegistry {
        let required = translation_config.engines.iter().map(|e| e.pair()).collect();
        let mut registry = EngineRegistry::new(required);

        for engine_config in &translation_config.engines {
            let pair = engine_config.pair();
            info!("Initializing {} engine: {}", pair, engine_config.model);

            let engine = ModelServiceEngine::new(
                model_service.clone(),
                engine_config.model.clone(),
                pair,
            );

            if translation_config.warm_up {
                if let Err(e) = engine.warm_up().await {
                    warn!("Error loading {} model {}: {}", pair, engine.model(), e);
                    continue;
                }
            }

            registry.insert(pair, Arc::new(engine));
        }

        if registry.all_loaded() {
            info!("Models loaded successfully!");
        } else {
            warn!("Some translation models are not loaded; translation requests will be refused");
        }

        registry
    }
}
