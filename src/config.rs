//! Configuration for FakeNUT
//!
//! Centralized configuration with sensible defaults. Only the listen
//! address and log verbosity are configurable; device values are not.

use crate::error::{FakeNutError, Result};

/// Environment variable overriding the listen host
pub const ENV_HOST: &str = "NUT_SERVER";

/// Environment variable overriding the listen port
pub const ENV_PORT: &str = "NUT_PORT";

/// Default listen host
pub const DEFAULT_HOST: &str = "localhost";

/// Default upsd port
pub const DEFAULT_PORT: u16 = 3493;

/// Main configuration for a FakeNUT server instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Hostname or IP address to listen on
    pub host: String,

    /// TCP port to listen on (0 lets the OS pick one)
    pub port: u16,

    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    /// Log every received command at info level
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            verbose: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Defaults overlaid with `NUT_SERVER` / `NUT_PORT` from the process environment
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlay host/port from `lookup`, which maps a variable name to its value
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port.trim().parse().map_err(|_| {
                FakeNutError::Config(format!("{} is not a valid port: {:?}", ENV_PORT, port))
            })?;
        }
        Ok(())
    }

    /// The `host:port` string handed to the listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the listen host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Enable per-command logging
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
