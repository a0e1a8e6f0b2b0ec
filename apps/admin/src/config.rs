//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STORE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use store_client::DEFAULT_BASE_URL;

/// Delay before the post-success catalog reload, in milliseconds.
///
/// The storefront waits a fixed beat after a successful purchase before
/// re-fetching server-authoritative stock, so the user can read the
/// confirmation first.
pub const DEFAULT_RELOAD_DELAY_MS: u64 = 2000;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Base URL of the inventory/pricing service.
    pub base_url: String,

    /// Store name shown in listing headers.
    pub store_name: String,

    /// Post-success reload delay in milliseconds.
    pub reload_delay_ms: u64,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            base_url: DEFAULT_BASE_URL.to_string(),
            store_name: "Store Management System".to_string(),
            reload_delay_ms: DEFAULT_RELOAD_DELAY_MS,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STORE_API_URL`: Override the inventory service base URL
    /// - `STORE_NAME`: Override the store name
    /// - `STORE_RELOAD_DELAY_MS`: Override the post-success reload delay
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(base_url) = std::env::var("STORE_API_URL") {
            config.base_url = base_url;
        }

        if let Ok(store_name) = std::env::var("STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(delay) = std::env::var("STORE_RELOAD_DELAY_MS") {
            if let Ok(ms) = delay.parse::<u64>() {
                config.reload_delay_ms = ms;
            }
        }

        config
    }

    /// The reload delay as a Duration.
    pub fn reload_delay(&self) -> Duration {
        Duration::from_millis(self.reload_delay_ms)
    }
}
