//! Configuration for nodeinfo
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

/// Timeout used when acquiring a connection for an info request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Effectively unbounded timeout (one year)
pub const NO_TIMEOUT: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Largest response body accepted by default (128 MB)
pub const DEFAULT_MAX_BODY_SIZE: usize = 128 * 1024 * 1024;

/// Client configuration for info requests
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Timeout for connect, read and write on a fresh connection
    pub timeout: Duration,

    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// Max body length a response header may declare (in bytes)
    pub max_body_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the connection timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connection timeout (in milliseconds); 0 means no timeout
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeout = if ms == 0 {
            NO_TIMEOUT
        } else {
            Duration::from_millis(ms)
        };
        self
    }

    /// Set the max response body size (in bytes)
    pub fn max_body_size(mut self, size: usize) -> Self {
        self.config.max_body_size = size;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
