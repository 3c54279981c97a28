//! Runtime Configuration
//!
//! Read once at startup from `localStorage` so demo timings can be tuned
//! from the browser console without a rebuild:
//!
//! ```js
//! localStorage.setItem("movie-shelf.config", JSON.stringify({ fetch_delay_ms: 50 }))
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// `localStorage` key holding the JSON config
pub const STORAGE_KEY: &str = "movie-shelf.config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Latency of the simulated movie fetch
    pub fetch_delay_ms: u32,
    /// Latency of the deferred tutorial section load
    pub section_delay_ms: u32,
    pub log_level: String,
    /// Rows rendered by the low-urgency update demo
    pub slow_list_len: usize,
    /// Part names, in order, used by the configurable product cards
    pub card_layout: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: 600,
            section_delay_ms: 400,
            log_level: "info".to_string(),
            slow_list_len: 2000,
            card_layout: ["image", "title", "description", "price", "rating", "button"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON document; absent fields keep their defaults
    pub fn from_json(raw: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Configured level, `Info` when the name is not recognised
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Load from `localStorage`. A missing key yields the defaults.
    pub fn load() -> AppResult<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(AppError::StorageUnavailable)?;
        match storage.get_item(STORAGE_KEY).ok().flatten() {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }
}
