//! Service configuration
//!
//! Loaded from a JSON file, then overridden by `USERSVC_*` environment
//! variables. A missing file is not an error: defaults are used.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};
use usersvc_core::MOCKDB;

pub const DEFAULT_CONFIG_PATH: &str = "configuration/config.json";
pub const DEFAULT_ENDPOINT: &str = "localhost:8080";
pub const DEFAULT_AMQP_BROKER: &str = "test";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Storage backend tag
    pub database_type: String,
    /// Address the HTTP server binds to
    pub endpoint: String,
    /// Backend connection descriptor, unused by the in-memory backend
    pub connection: String,
    #[serde(alias = "amqp_brooker")]
    pub amqp_broker: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            database_type: MOCKDB.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connection: String::new(),
            amqp_broker: DEFAULT_AMQP_BROKER.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load from `path` and apply environment overrides
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse `path`, falling back to defaults when it does not exist
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                "Configuration file {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        info!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse configuration {}", path.display()))?;

        Ok(config)
    }

    /// Override fields from `lookup`, which maps a variable name to its value
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("USERSVC_DATABASE_TYPE") {
            self.database_type = v;
        }
        if let Some(v) = lookup("USERSVC_ENDPOINT") {
            self.endpoint = v;
        }
        if let Some(v) = lookup("USERSVC_CONNECTION") {
            self.connection = v;
        }
        if let Some(v) = lookup("USERSVC_AMQP_BROKER") {
            self.amqp_broker = v;
        }
    }
}
