pub mod interface;
pub mod client;
pub mod registry;
pub mod factory;
pub mod dispatcher;

pub use interface::{EngineError, Lang, LanguagePair, TranslationEngine};
pub use client::ModelServiceEngine;
pub use registry::EngineRegistry;
pub use factory::EngineFactory;
pub use dispatcher::{BatchItem, DispatchError, Dispatcher, TranslationResult, DEFAULT_MAX_LENGTH};
