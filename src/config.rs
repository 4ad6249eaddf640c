//! Configuration management

use crate::error::{ReviewError, Result};
use crate::sentiment::{Lexicon, NEGATIVE_WORDS, POSITIVE_WORDS};
use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix, e.g. `REVIEW_SENTIMENT_OUTPUT__FORMAT=json`
pub const ENV_PREFIX: &str = "REVIEW_SENTIMENT";

const MAX_PRECISION: usize = 12;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconConfig {
    /// Replaces the built-in positive words when set
    pub positive_words: Option<Vec<String>>,
    /// Replaces the built-in negative words when set
    pub negative_words: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Decimal places for scores in text output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

/// Word lists come in comma separated, e.g. `REVIEW_SENTIMENT_LEXICON__POSITIVE_WORDS=epic,goat`
fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("lexicon.positive_words")
        .with_list_parse_key("lexicon.negative_words")
}

fn default_precision() -> usize {
    3
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: default_precision(),
        }
    }
}

impl LexiconConfig {
    /// True when neither word list is overridden
    pub fn is_builtin(&self) -> bool {
        self.positive_words.is_none() && self.negative_words.is_none()
    }

    /// Build the configured lexicon, falling back to built-in lists per side
    pub fn build(&self) -> Result<Lexicon> {
        if self.is_builtin() {
            return Ok(Lexicon::builtin().clone());
        }

        let positive: Vec<String> = match &self.positive_words {
            Some(words) => words.clone(),
            None => POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
        };
        let negative: Vec<String> = match &self.negative_words {
            Some(words) => words.clone(),
            None => NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
        };

        Lexicon::new(positive, negative)
    }
}

impl Config {
    /// Load configuration from file, then environment overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.to_str().ok_or_else(|| {
            ReviewError::InvalidConfig(format!("non UTF-8 config path: {}", path.display()))
        })?;

        let settings = config::Config::builder()
            .add_source(config::File::with_name(path_str))
            .add_source(env_source())
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;

        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from default locations, or environment only when no file exists
    pub fn load_default() -> Result<Self> {
        let paths = [
            "review-sentiment.toml",
            "review-sentiment.yaml",
            "~/.config/review-sentiment/config.toml",
        ];

        for path in paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                return Self::load(expanded.as_ref());
            }
        }

        tracing::debug!("No configuration file found, using defaults");
        Self::from_env()
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Result<Self> {
        Self::from_environment(env_source())
    }

    fn from_environment(env: config::Environment) -> Result<Self> {
        let settings = config::Config::builder().add_source(env).build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.precision > MAX_PRECISION {
            return Err(ReviewError::InvalidConfig(format!(
                "output.precision must be at most {}, got {}",
                MAX_PRECISION, self.output.precision
            )));
        }
        Ok(())
    }
}
