//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export SHIPENGINE_API_KEY="TEST_xxxxxxxxxxxxxxxxxxxx"
//! export LISTEN="0.0.0.0:3000"
//! ```
//!
//! ## Required Variables
//!
//! - `SHIPENGINE_API_KEY` - ShipEngine API key
//!
//! ## Optional Variables
//!
//! - `SHIPENGINE_BASE_URL` - Provider API root (default: `https://api.shipengine.com`)
//! - `SHIPENGINE_TIMEOUT_SECS` - Per-request timeout (default: 15, range 1..=120)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Key rate limits on forwarded client IPs (default: `false`)
//! - `RATE_LIMIT_ENABLED` - Per-IP rate limiting (default: `true`)
//! - `RATE_LIMIT_REPLENISH_SECS` - Seconds to replenish one request token (default: 1)
//! - `RATE_LIMIT_BURST` - Token bucket size (default: 30)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::infrastructure::shipengine::DEFAULT_BASE_URL;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the ShipEngine tracking provider. Never logged in full.
    pub shipengine_api_key: String,
    pub shipengine_base_url: String,
    pub shipengine_timeout_secs: u64,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub rate_limit_enabled: bool,
    pub rate_limit_replenish_secs: u64,
    pub rate_limit_burst: u32,
}

/// Per-IP token bucket parameters for the public routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub replenish_secs: u64,
    pub burst: u32,
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SHIPENGINE_API_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        let shipengine_api_key =
            env::var("SHIPENGINE_API_KEY").context("SHIPENGINE_API_KEY must be set")?;

        let shipengine_base_url =
            env::var("SHIPENGINE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let shipengine_timeout_secs = parse_var("SHIPENGINE_TIMEOUT_SECS").unwrap_or(15);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = flag_var("BEHIND_PROXY").unwrap_or(false);
        let rate_limit_enabled = flag_var("RATE_LIMIT_ENABLED").unwrap_or(true);
        let rate_limit_replenish_secs = parse_var("RATE_LIMIT_REPLENISH_SECS").unwrap_or(1);
        let rate_limit_burst = parse_var("RATE_LIMIT_BURST").unwrap_or(30);

        Ok(Self {
            shipengine_api_key,
            shipengine_base_url,
            shipengine_timeout_secs,
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            rate_limit_enabled,
            rate_limit_replenish_secs,
            rate_limit_burst,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `shipengine_api_key` is blank
    /// - `shipengine_base_url` is not an http(s) URL
    /// - `shipengine_timeout_secs` is outside 1..=120
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - rate limiting is enabled with a zero period or burst
    pub fn validate(&self) -> Result<()> {
        if self.shipengine_api_key.trim().is_empty() {
            anyhow::bail!("SHIPENGINE_API_KEY must not be empty");
        }

        let base_url = url::Url::parse(&self.shipengine_base_url).with_context(|| {
            format!(
                "SHIPENGINE_BASE_URL is not a valid URL: '{}'",
                self.shipengine_base_url
            )
        })?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            anyhow::bail!(
                "SHIPENGINE_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.shipengine_base_url
            );
        }

        if self.shipengine_timeout_secs == 0 || self.shipengine_timeout_secs > 120 {
            anyhow::bail!(
                "SHIPENGINE_TIMEOUT_SECS must be between 1 and 120, got {}",
                self.shipengine_timeout_secs
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.rate_limit_enabled {
            if self.rate_limit_replenish_secs == 0 {
                anyhow::bail!("RATE_LIMIT_REPLENISH_SECS must be greater than 0");
            }
            if self.rate_limit_burst == 0 {
                anyhow::bail!("RATE_LIMIT_BURST must be at least 1");
            }
        }

        Ok(())
    }

    /// Provider request timeout.
    pub fn shipengine_timeout(&self) -> Duration {
        Duration::from_secs(self.shipengine_timeout_secs)
    }

    /// Rate limiter parameters, or `None` when rate limiting is disabled.
    pub fn rate_limit(&self) -> Option<RateLimitSettings> {
        self.rate_limit_enabled.then_some(RateLimitSettings {
            replenish_secs: self.rate_limit_replenish_secs,
            burst: self.rate_limit_burst,
            behind_proxy: self.behind_proxy,
        })
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  ShipEngine: {}", self.shipengine_base_url);
        tracing::info!("  ShipEngine API key: {}", mask_secret(&self.shipengine_api_key));
        tracing::info!("  ShipEngine timeout: {}s", self.shipengine_timeout_secs);

        match self.rate_limit() {
            Some(limit) => tracing::info!(
                "  Rate limit: 1 request per {}s, burst {}{}",
                limit.replenish_secs,
                limit.burst,
                if limit.behind_proxy {
                    " (forwarded client IPs)"
                } else {
                    ""
                }
            ),
            None => tracing::info!("  Rate limit: disabled"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

fn flag_var(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

/// Masks a secret for logging, keeping a short prefix to tell keys apart.
///
/// - `TEST_abcdef123456` → `TEST***`
/// - `short` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
