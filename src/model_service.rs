use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ModelServiceConfig;
use crate::translate::EngineError;

/// HTTP client for the inference service hosting the opus-mt models
#[derive(Debug, Clone)]
pub struct ModelServiceClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationParameters {
    pub max_length: usize,
}

/// Block until a cold model is loaded instead of answering 503
#[derive(Debug, Serialize, Deserialize)]
pub struct InferenceOptions {
    pub wait_for_model: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub inputs: String,
    pub parameters: TranslationParameters,
    pub options: InferenceOptions,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InferenceOutput {
    pub translation_text: String,
}

impl ModelServiceClient {
    pub fn new(base_url: String, api_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        }
    }

    pub fn from_config(config: &ModelServiceConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        let api_token = config
            .api_token
            .clone()
            .or_else(|| std::env::var("HF_TOKEN").ok())
            .filter(|t| !t.is_empty());

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run the translation pipeline of `model` on `text`
    pub async fn translate(
        &self,
        model: &str,
        text: &str,
        max_length: usize,
    ) -> Result<Vec<InferenceOutput>, EngineError> {
        let url = format!("{}/models/{}", self.base_url, model);
        let request = InferenceRequest {
            inputs: text.to_string(),
            parameters: TranslationParameters { max_length },
            options: InferenceOptions { wait_for_model: true },
        };

        debug!("Sending translation request: model={}, chars={}", model, text.chars().count());

        let mut builder = self.client.post(&url).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Vec<InferenceOutput>>(&body)
            .map_err(|e| EngineError::Decode(e.to_string()))
    }
}
