//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Configuration loaded at startup
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Snapshot of the configuration
    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn fetch_delay_ms(&self) -> u32 {
        self.config.with_value(|c| c.fetch_delay_ms)
    }

    pub fn section_delay_ms(&self) -> u32 {
        self.config.with_value(|c| c.section_delay_ms)
    }
}

/// Get the app context, panics if `App` did not provide it
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
