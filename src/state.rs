use std::sync::Arc;

use crate::config::Config;
use crate::model_service::ModelServiceClient;
use crate::translate::{Dispatcher, EngineFactory, EngineRegistry};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Connect to the model service and load every configured engine
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let model_service = Arc::new(ModelServiceClient::from_config(&config.model_service)?);
        tracing::info!("Using model service at {}", model_service.base_url());

        let registry = EngineFactory::create_registry(&config.translation, model_service).await;
        Ok(Self::with_registry(config, registry))
    }

    /// Build state around an already populated registry
    pub fn with_registry(config: Config, registry: EngineRegistry) -> Self {
        let dispatcher = Dispatcher::new(Arc::new(registry), config.translation.max_length);
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        }
    }
}
