//! Server configuration: YAML file plus command-line overrides.

use crate::error::{ServerError, ServerResult};
use rb_ship::ShipSystem;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address.
    pub bind: SocketAddr,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Attach a permissive CORS layer.
    pub cors: bool,
    /// `null` picks one at random on the first query.
    pub initial_damaged_system: Option<ShipSystem>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            log_level: "info".to_string(),
            cors: true,
            initial_damaged_system: Some(ShipSystem::Navigation),
        }
    }
}

impl ServerConfig {
    /// Apply `--bind` / `--damaged` overrides. `random` clears the seed.
    pub fn apply_overrides(
        &mut self,
        bind: Option<SocketAddr>,
        damaged: Option<&str>,
    ) -> ServerResult<()> {
        if let Some(addr) = bind {
            self.bind = addr;
        }
        match damaged.map(str::trim) {
            None => {}
            Some("random") => self.initial_damaged_system = None,
            Some(name) => self.initial_damaged_system = Some(name.parse()?),
        }
        Ok(())
    }
}

/// Load configuration from a YAML file.
pub fn load_config(path: &Path) -> ServerResult<ServerConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ServerError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> ServerResult<ServerConfig> {
    serde_yaml::from_str(content)
        .map_err(|e| ServerError::Config(format!("Failed to parse config YAML: {}", e)))
}
