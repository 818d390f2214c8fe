//! Application configuration loaded from the environment.

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Result};

/// Runtime configuration for the service.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_addr: String,
    /// Shared bearer secret. Injected at startup, never compiled in.
    pub api_token: String,
    /// Simulated processing latency applied to every query request.
    pub processing_delay: Duration,
}

impl AppConfig {
    /// Loads the configuration from environment variables (honoring .env if present).
    pub fn from_env() -> Result<Self> {
        let api_token =
            env::var("API_TOKEN").map_err(|_| anyhow!("API_TOKEN missing from environment"))?;
        if api_token.trim().is_empty() {
            return Err(anyhow!("API_TOKEN must not be empty"));
        }

        let server_addr =
            env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:10000".to_string());

        let processing_delay_ms = match env::var("PROCESSING_DELAY_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| anyhow!("PROCESSING_DELAY_MS must be an integer: {raw}"))?,
            Err(_) => 500,
        };

        Ok(Self {
            server_addr,
            api_token,
            processing_delay: Duration::from_millis(processing_delay_ms),
        })
    }
}
