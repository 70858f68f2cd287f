use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use albums_types::SeedCatalog;

use crate::error::{ServerError, ServerResult};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub bind_addr: SocketAddr,
    /// Albums the store holds at startup.
    pub seed: SeedCatalog,
    /// Stop accepting connections on SIGINT/SIGTERM and drain in-flight requests.
    pub graceful_shutdown: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            seed: SeedCatalog::default(),
            graceful_shutdown: true,
        }
    }
}

impl ServerConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded server configuration");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> ServerResult<String> {
        toml::to_string(self).map_err(|e| ServerError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(c.seed, SeedCatalog::Standard);
        assert!(c.graceful_shutdown);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ServerConfig::from_toml_str(r#"seed = "catalog""#).unwrap();
        assert_eq!(c.seed, SeedCatalog::Catalog);
        assert_eq!(c.bind_addr.port(), DEFAULT_PORT);
        assert!(c.graceful_shutdown);
    }

    #[test]
    fn full_toml() {
        let c = ServerConfig::from_toml_str(
            r#"
            bind_addr = "127.0.0.1:3000"
            seed = "empty"
            graceful_shutdown = false
            "#,
        )
        .unwrap();
        assert_eq!(c.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.seed, SeedCatalog::Empty);
        assert!(!c.graceful_shutdown);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = ServerConfig::from_toml_str(r#"seed = "vinyl""#).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));

        let err = ServerConfig::from_toml_str("bind_addr = 8080").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn toml_round_trips_default() {
        let text = ServerConfig::default().to_toml_string().unwrap();
        assert!(text.contains("bind_addr = \"0.0.0.0:8080\""));
        assert_eq!(
            ServerConfig::from_toml_str(&text).unwrap(),
            ServerConfig::default()
        );
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"127.0.0.1:9090\"").unwrap();
        let c = ServerConfig::load(file.path()).unwrap();
        assert_eq!(c.bind_addr.port(), 9090);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }
}
