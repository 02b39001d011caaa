//! Connection configuration for a Weaviate instance.
//!
//! A [`ConnectionParameters`] value is assembled once at startup and never
//! mutated afterwards. It can optionally be persisted to a `config.toml`
//! style file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::constants::{CLOUD_SCHEME, LOCAL_HOST, LOCAL_SCHEME};

/// Parameters describing how to reach a Weaviate instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionParameters {
    /// Transport scheme ("https" for cloud, "http" for local)
    pub scheme: String,
    /// Instance host, taken verbatim from the environment
    pub host: String,
    /// Extra outbound headers forwarded on every request, e.g. a third-party
    /// provider credential. Absent when no third-party key is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl ConnectionParameters {
    /// Create cloud connection parameters for the given host.
    pub fn new<S: Into<String>>(host: S) -> Self {
        Self {
            scheme: CLOUD_SCHEME.to_string(),
            host: host.into(),
            headers: None,
        }
    }

    /// Create parameters for an unauthenticated local instance.
    pub fn local() -> Self {
        Self {
            scheme: LOCAL_SCHEME.to_string(),
            host: LOCAL_HOST.to_string(),
            headers: None,
        }
    }

    /// Attach additional outbound headers.
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Load connection parameters from a TOML file.
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, std::io::Error> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to parse config: {}", e),
            )
        })
    }

    /// Save connection parameters to a TOML file.
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let contents = toml::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to serialize config: {}", e),
            )
        })?;
        std::fs::write(path, contents)
    }
}

/// API-key credential for the instance.
///
/// The wrapped value is a secret; `Debug` redacts it so it cannot leak into
/// logs or panic messages.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key value.
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self(key.into())
    }

    /// The raw key value, for handing to the client factory.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_connection_parameters_new() {
        let params = ConnectionParameters::new("my-instance.weaviate.network");
        assert_eq!(params.scheme, "https");
        assert_eq!(params.host, "my-instance.weaviate.network");
        assert_eq!(params.headers, None);
    }

    #[test]
    fn test_connection_parameters_local() {
        let params = ConnectionParameters::local();
        assert_eq!(params.scheme, "http");
        assert_eq!(params.host, "localhost:8080");
        assert_eq!(params.headers, None);
    }

    #[test]
    fn test_with_headers() {
        let mut map = HashMap::new();
        map.insert("X-Cohere-Api-Key".to_string(), "c1".to_string());
        let params = ConnectionParameters::new("x.wcd.io").with_headers(map.clone());
        assert_eq!(params.headers, Some(map));
    }

    #[test]
    fn test_save_and_load() -> Result<(), std::io::Error> {
        let mut map = HashMap::new();
        map.insert("X-Cohere-Api-Key".to_string(), "c1".to_string());
        let params = ConnectionParameters::new("my-instance.weaviate.network").with_headers(map);

        let temp_file = NamedTempFile::new()?;
        let path = temp_file.path().to_owned();

        params.save_to_file(&path)?;

        let contents = std::fs::read_to_string(&path)?;
        assert!(contents.contains("scheme"));
        assert!(contents.contains("host"));
        assert!(contents.contains("X-Cohere-Api-Key"));

        let loaded = ConnectionParameters::load_from_file(&path)?;
        assert_eq!(loaded, params);

        Ok(())
    }

    #[test]
    fn test_load_without_headers_section() -> Result<(), std::io::Error> {
        let temp_file = NamedTempFile::new()?;
        std::fs::write(
            temp_file.path(),
            "scheme = \"https\"\nhost = \"x.wcd.io\"\n",
        )?;
        let loaded = ConnectionParameters::load_from_file(temp_file.path())?;
        assert_eq!(loaded.scheme, "https");
        assert_eq!(loaded.host, "x.wcd.io");
        assert_eq!(loaded.headers, None);
        Ok(())
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("abc123");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert_eq!(key.expose(), "abc123");
    }
}
