//! Engine configuration.
//!
//! Configuration is read from TOML. Every key is optional:
//!
//! ```toml
//! api_url = "https://api.scryfall.com"
//! image_base = "https://cards.scryfall.io"
//! timeout_secs = 30
//! user_agent = "deckstats/1.0"
//! fuzzy = true
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::face::DEFAULT_IMAGE_BASE;

/// Settings for talking to Scryfall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// API root.
    pub api_url: String,
    /// Image host used for card image links.
    pub image_base: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header; Scryfall asks clients to identify themselves.
    pub user_agent: Option<String>,
    /// Resolve names with fuzzy matching instead of exact lookup.
    pub fuzzy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://api.scryfall.com".to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            timeout_secs: 30,
            user_agent: None,
            fuzzy: true,
        }
    }
}

impl Config {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be positive".to_string()));
        }
        for (key, url) in [("api_url", &self.api_url), ("image_base", &self.image_base)] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(Error::Config(format!("{} must be an http(s) URL", key)));
            }
        }
        Ok(())
    }
}
