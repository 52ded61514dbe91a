//! Session configuration - reply delays and search limits.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{ConfigError, Result};
use crate::navigation::ReplyKind;

/// Shortest accepted typing delay.
pub const MIN_DELAY_MS: u64 = 400;

/// Longest accepted typing delay.
pub const MAX_DELAY_MS: u64 = 1000;

/// Typing delay for each kind of reply, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyDelays {
    pub welcome_ms: u64,
    pub search_prompt_ms: u64,
    pub main_menu_ms: u64,
    pub section_ms: u64,
    pub sub_fact_ms: u64,
    pub search_results_ms: u64,
}

impl Default for ReplyDelays {
    fn default() -> Self {
        Self {
            welcome_ms: 400,
            search_prompt_ms: 700,
            main_menu_ms: 500,
            section_ms: 900,
            sub_fact_ms: 800,
            search_results_ms: 900,
        }
    }
}

impl ReplyDelays {
    /// Delay before a reply of the given kind appears.
    pub fn for_kind(&self, kind: ReplyKind) -> Duration {
        let ms = match kind {
            ReplyKind::Welcome => self.welcome_ms,
            ReplyKind::SearchPrompt => self.search_prompt_ms,
            ReplyKind::MainMenu => self.main_menu_ms,
            ReplyKind::Section => self.section_ms,
            ReplyKind::SubFact => self.sub_fact_ms,
            ReplyKind::SearchResults => self.search_results_ms,
        };
        Duration::from_millis(ms)
    }

    fn fields(&self) -> [(&'static str, u64); 6] {
        [
            ("welcome_ms", self.welcome_ms),
            ("search_prompt_ms", self.search_prompt_ms),
            ("main_menu_ms", self.main_menu_ms),
            ("section_ms", self.section_ms),
            ("sub_fact_ms", self.sub_fact_ms),
            ("search_results_ms", self.search_results_ms),
        ]
    }
}

/// Configuration of a conversation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KioskConfig {
    pub delays: ReplyDelays,

    /// Maximum number of search results listed.
    pub max_results: usize,

    /// Characters kept in a search result preview.
    pub preview_chars: usize,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            delays: ReplyDelays::default(),
            max_results: 5,
            preview_chars: 90,
        }
    }
}

impl KioskConfig {
    /// Parse and validate a TOML configuration. Missing fields take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: KioskConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check delays and limits.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.delays.fields() {
            if !(MIN_DELAY_MS..=MAX_DELAY_MS).contains(&value) {
                return Err(ConfigError::DelayOutOfRange {
                    field,
                    value,
                    min: MIN_DELAY_MS,
                    max: MAX_DELAY_MS,
                });
            }
        }
        if self.max_results == 0 {
            return Err(ConfigError::ZeroLimit("max_results"));
        }
        if self.preview_chars == 0 {
            return Err(ConfigError::ZeroLimit("preview_chars"));
        }
        Ok(())
    }
}
