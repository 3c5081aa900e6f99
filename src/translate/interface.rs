use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Languages the service knows how to route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Vi,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Vi => "vi",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Lang::En),
            "vi" => Ok(Lang::Vi),
            other => Err(format!("unsupported language tag: {}", other)),
        }
    }
}

/// Ordered (source, target) pair, the key of the engine lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: Lang,
    pub target: Lang,
}

impl LanguagePair {
    pub const EN_VI: LanguagePair = LanguagePair { source: Lang::En, target: Lang::Vi };
    pub const VI_EN: LanguagePair = LanguagePair { source: Lang::Vi, target: Lang::En };

    pub fn new(source: Lang, target: Lang) -> Self {
        Self { source, target }
    }

    /// Parse raw request tags. Returns `None` for any tag outside `Lang`.
    pub fn parse(source: &str, target: &str) -> Option<Self> {
        let source = source.parse().ok()?;
        let target = target.parse().ok()?;
        Some(Self { source, target })
    }

    /// Key used by the health endpoint, e.g. `en_vi_model`
    pub fn model_key(&self) -> String {
        format!("{}_{}_model", self.source, self.target)
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

/// Failures raised by a translation backend
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("request to model service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode model output: {0}")]
    Decode(String),

    #[error("model produced no translation")]
    EmptyOutput,

    /// Failure reported by a backend outside this crate, such as an
    /// in-process model runtime
    #[error("{0}")]
    Other(String),
}

/// One fixed-direction translation capability
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    /// Translate `text`, producing at most `max_length` tokens of output
    async fn translate(&self, text: &str, max_length: usize) -> Result<String, EngineError>;

    /// Make sure the backing model is loaded. Called once at startup.
    async fn warm_up(&self) -> Result<(), EngineError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_tags() {
        assert_eq!("en".parse::<Lang>(), Ok(Lang::En));
        assert_eq!("vi".parse::<Lang>(), Ok(Lang::Vi));
        assert!("fr".parse::<Lang>().is_err());
        assert!("EN".parse::<Lang>().is_err());
    }

    #[test]
    fn pair_parse_rejects_unknown_tags() {
        assert_eq!(LanguagePair::parse("en", "vi"), Some(LanguagePair::EN_VI));
        assert_eq!(LanguagePair::parse("vi", "en"), Some(LanguagePair::VI_EN));
        assert_eq!(LanguagePair::parse("fr", "vi"), None);
        assert_eq!(
            LanguagePair::parse("en", "en"),
            Some(LanguagePair::new(Lang::En, Lang::En))
        );
    }

    #[test]
    fn model_key_follows_direction() {
        assert_eq!(LanguagePair::EN_VI.model_key(), "en_vi_model");
        assert_eq!(LanguagePair::VI_EN.model_key(), "vi_en_model");
        assert_eq!(LanguagePair::VI_EN.to_string(), "vi->en");
    }
}
