// rest_api/src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PATIENT_COUNT: usize = 15;

/// Server configuration, loaded from `server_config.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins the CORS layer will accept, typically the frontend dev hosts.
    pub allowed_origins: Vec<String>,
    /// Number of synthetic patients seeded into the in-memory store.
    pub synthetic_patient_count: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:3001".to_string(),
            ],
            synthetic_patient_count: DEFAULT_PATIENT_COUNT,
        }
    }
}

// Matches the top-level `server:` key in the YAML file.
#[derive(Debug, Deserialize)]
struct ServerConfigWrapper {
    server: ServerConfig,
}

/// Load the server configuration. An explicit path must exist and parse;
/// with no path given, the crate-local `server_config.yaml` is used when
/// present, otherwise the compiled-in defaults.
pub fn load_server_config(config_file_path: Option<PathBuf>) -> Result<ServerConfig> {
    let (path, required) = match config_file_path {
        Some(path) => (path, true),
        None => (
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("server_config.yaml"),
            false,
        ),
    };

    if !path.exists() {
        if required {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        return Ok(ServerConfig::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let wrapper: ServerConfigWrapper = serde_yaml2::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse config file {}: {}", path.display(), e))?;

    Ok(wrapper.server)
}

#[cfg(test)]
mod tests {
    use super::{load_server_config, ServerConfig};
    use std::path::PathBuf;

    #[test]
    fn defaults_cover_the_demo_frontend() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.allowed_origins.len(), 2);
        assert_eq!(config.synthetic_patient_count, 15);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let result = load_server_config(Some(PathBuf::from("/nonexistent/config.yaml")));
        assert!(result.is_err());
    }
}
