use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use crate::translate::{BatchItem, TranslationResult};

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "vi".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchTranslateRequest {
    pub texts: Vec<String>,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchTranslateResponse {
    pub results: Vec<BatchItem>,
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/translate", post(translate))
        .route("/translate/batch", post(translate_batch))
}

/// Full application: routes, permissive CORS and request tracing
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "online",
        "message": "Vietnam Tourism Translation API",
        "models_loaded": state.dispatcher.models_loaded()
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let registry = state.dispatcher.registry();
    let mut body = Map::new();
    body.insert("status".to_string(), json!("healthy"));
    for pair in registry.required() {
        let status = if registry.is_loaded(pair) { "loaded" } else { "not loaded" };
        body.insert(pair.model_key(), json!(status));
    }
    Json(Value::Object(body))
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslationResult>, ApiError> {
    let span = info_span!(
        "translate",
        request_id = %Uuid::new_v4(),
        source = %request.source_lang,
        target = %request.target_lang
    );

    async move {
        state
            .dispatcher
            .translate(&request.text, &request.source_lang, &request.target_lang)
            .await
            .map(Json)
            .map_err(|e| ApiError::from_dispatch(e, "Translation error"))
    }
    .instrument(span)
    .await
}

async fn translate_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchTranslateRequest>,
) -> Result<Json<BatchTranslateResponse>, ApiError> {
    let span = info_span!(
        "translate_batch",
        request_id = %Uuid::new_v4(),
        items = request.texts.len(),
        source = %request.source_lang,
        target = %request.target_lang
    );

    async move {
        let results = state
            .dispatcher
            .translate_batch(&request.texts, &request.source_lang, &request.target_lang)
            .await
            .map_err(|e| ApiError::from_dispatch(e, "Batch translation error"))?;
        Ok(Json(BatchTranslateResponse { results }))
    }
    .instrument(span)
    .await
}
