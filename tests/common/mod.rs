#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use vietnam_translation_backend::translate::{
    Dispatcher, EngineError, EngineRegistry, LanguagePair, TranslationEngine, DEFAULT_MAX_LENGTH,
};

/// Maps every input to a fixed string
pub struct ConstantEngine(pub &'static str);

#[async_trait]
impl TranslationEngine for ConstantEngine {
    async fn translate(&self, _text: &str, _max_length: usize) -> Result<String, EngineError> {
        Ok(self.0.to_string())
    }
}

/// Uppercases its input and records every text it sees
#[derive(Default)]
pub struct RecordingEngine {
    pub seen: std::sync::Mutex<Vec<String>>,
}

#[async_trait]
impl TranslationEngine for RecordingEngine {
    async fn translate(&self, text: &str, _max_length: usize) -> Result<String, EngineError> {
        self.seen.lock().unwrap().push(text.to_string());
        Ok(text.to_uppercase())
    }
}

/// Fails on the n-th call (1-based) and counts calls
pub struct FailingEngine {
    pub fail_on: usize,
    pub calls: AtomicUsize,
}

impl FailingEngine {
    pub fn new(fail_on: usize) -> Self {
        Self {
            fail_on,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TranslationEngine for FailingEngine {
    async fn translate(&self, text: &str, _max_length: usize) -> Result<String, EngineError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call == self.fail_on {
            Err(EngineError::Other("CUDA out of memory".to_string()))
        } else {
            Ok(format!("ok:{}", text))
        }
    }
}

pub fn registry(
    en_vi: Arc<dyn TranslationEngine>,
    vi_en: Arc<dyn TranslationEngine>,
) -> EngineRegistry {
    EngineRegistry::with_engines(vec![(LanguagePair::EN_VI, en_vi), (LanguagePair::VI_EN, vi_en)])
}

pub fn dispatcher(registry: EngineRegistry) -> Dispatcher {
    Dispatcher::new(Arc::new(registry), DEFAULT_MAX_LENGTH)
}

/// Registry whose vi->en engine failed to load
pub fn half_loaded_registry() -> EngineRegistry {
    let mut registry = EngineRegistry::new(vec![LanguagePair::EN_VI, LanguagePair::VI_EN]);
    registry.insert(LanguagePair::EN_VI, Arc::new(ConstantEngine("<translated>")));
    registry
}
