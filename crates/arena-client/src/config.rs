//! Connection settings for a client session

use arena_core::{ArenaError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 31001;
pub const DEFAULT_TOKEN: &str = "0000000000000000";

/// Where the game server listens and how to identify to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server host (default: 127.0.0.1)
    pub host: String,
    /// Server port (default: 31001)
    pub port: u16,
    /// Token sent during the handshake
    pub token: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            token: DEFAULT_TOKEN.into(),
        }
    }
}

impl ClientConfig {
    /// Load settings from a JSON file; missing fields keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ArenaError::Config(format!("Failed to open {}: {}", path.display(), e))
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            ArenaError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// `host:port` for logging
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.address(), "127.0.0.1:31001");
        assert_eq!(config.token.len(), 16);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"port": 32000, "token": "abc"}}"#).unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, 32000);
        assert_eq!(config.token, "abc");
    }

    #[test]
    fn test_load_missing_file() {
        let err = ClientConfig::load("/nonexistent/arena.json").unwrap_err();
        assert!(matches!(err, ArenaError::Config(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "port = 1").unwrap();

        let err = ClientConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
