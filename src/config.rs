//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// The defaults mirror a classic small deployment: a 100-entry fast tier over
/// a 1 MiB secondary tier.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries in the fast tier
    pub fast_capacity: usize,
    /// Byte budget for the secondary tier
    pub secondary_budget_bytes: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `FAST_CAPACITY` - Fast tier entry capacity (default: 100)
    /// - `SECONDARY_BUDGET_BYTES` - Secondary tier byte budget (default: 1048576)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            fast_capacity: env::var("FAST_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            secondary_budget_bytes: env::var("SECONDARY_BUDGET_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1024 * 1024),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fast_capacity: 100,
            secondary_budget_bytes: 1024 * 1024,
            server_port: 3000,
        }
    }
}
