use std::env;

use crate::error::{EnvVarError, Error};

pub const API_KEY_VAR: &str = "BRAWL_STARS_API_KEY";
pub const BASE_URL_VAR: &str = "BRAWL_STARS_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://api.brawlstars.com/v1";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    // requires BRAWL_STARS_API_KEY env var, BRAWL_STARS_BASE_URL is optional
    // can use dotenv
    pub fn from_env() -> Result<Self, Error> {
        let api_key = env::var(API_KEY_VAR).map_err(|e| EnvVarError::new(API_KEY_VAR, e))?;
        let config = Self::new(api_key);

        Ok(match env::var(BASE_URL_VAR) {
            Ok(base_url) if !base_url.trim().is_empty() => config.with_base_url(base_url),
            _ => config,
        })
    }
}

// keeps the key out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
