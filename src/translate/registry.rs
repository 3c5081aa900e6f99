use std::collections::HashMap;
use std::sync::Arc;

use super::interface::{LanguagePair, TranslationEngine};

/// Engines available to the dispatcher, fixed at startup.
///
/// `required` lists every configured direction; `engines` holds the ones that
/// initialized. The set is read-only once built.
#[derive(Clone, Default)]
pub struct EngineRegistry {
    required: Vec<LanguagePair>,
    engines: HashMap<LanguagePair, Arc<dyn TranslationEngine>>,
}

impl EngineRegistry {
    pub fn new(required: Vec<LanguagePair>) -> Self {
        Self {
            required,
            engines: HashMap::new(),
        }
    }

    /// Registry where every required direction is loaded
    pub fn with_engines(engines: Vec<(LanguagePair, Arc<dyn TranslationEngine>)>) -> Self {
        let required = engines.iter().map(|(pair, _)| *pair).collect();
        Self {
            required,
            engines: engines.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, pair: LanguagePair, engine: Arc<dyn TranslationEngine>) {
        if !self.required.contains(&pair) {
            self.required.push(pair);
        }
        self.engines.insert(pair, engine);
    }

    pub fn get(&self, pair: &LanguagePair) -> Option<Arc<dyn TranslationEngine>> {
        self.engines.get(pair).cloned()
    }

    pub fn is_loaded(&self, pair: &LanguagePair) -> bool {
        self.engines.contains_key(pair)
    }

    /// True when every required direction has an engine
    pub fn all_loaded(&self) -> bool {
        !self.required.is_empty() && self.required.iter().all(|pair| self.is_loaded(pair))
    }

    pub fn required(&self) -> &[LanguagePair] {
        &self.required
    }
}
