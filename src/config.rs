use std::env;

use anyhow::{Context, Result};

use crate::moderation::client::DEFAULT_SERVICE_URL;

/// Default interface the server binds to.
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Default port (the chat backend expects the service on :8000).
pub const DEFAULT_PORT: u16 = 8000;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
/// CLI flags override whatever is loaded here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Interface to bind (MODERATION_BIND)
    pub bind: String,
    /// Port to listen on (MODERATION_PORT)
    pub port: u16,
    /// Base URL of a running service, for remote checks (MODERATION_URL)
    pub service_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            service_url: DEFAULT_SERVICE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only a malformed port is an error.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("MODERATION_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("MODERATION_PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            bind: lookup("MODERATION_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            port,
            service_url: lookup("MODERATION_URL")
                .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()),
        })
    }

    /// The `host:port` string the server listens on.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.listen_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("MODERATION_BIND", "127.0.0.1"),
            ("MODERATION_PORT", "9100"),
            ("MODERATION_URL", "http://mod.internal:8000"),
        ]))
        .unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:9100");
        assert_eq!(config.service_url, "http://mod.internal:8000");
    }

    #[test]
    fn test_bad_port_is_error() {
        let err = Config::from_lookup(lookup_from(&[("MODERATION_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("MODERATION_PORT"));
    }
}
