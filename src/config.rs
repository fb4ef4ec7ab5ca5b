use std::env;

use anyhow::{Context, Result};

use crate::moderation::registry::Language;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so these can live there
/// during local development.
#[derive(Debug, Clone)]
pub struct Config {
    /// Language of the fixed safety messages (STORYGUARD_LANG, default "en")
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::English,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `load` uses the process
    /// environment; tests pass a closure.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let language = match lookup("STORYGUARD_LANG") {
            Some(code) if !code.trim().is_empty() => code
                .parse::<Language>()
                .context("Invalid STORYGUARD_LANG in environment")?,
            _ => Language::English,
        };

        Ok(Self { language })
    }

    /// Apply a command-line override on top of the environment.
    pub fn with_language(mut self, language: Option<Language>) -> Self {
        if let Some(language) = language {
            self.language = language;
        }
        self
    }
}
