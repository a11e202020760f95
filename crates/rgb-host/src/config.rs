//! Application configuration

use std::env;
use std::path::PathBuf;

use rgb_host_sdk::endpoint::EndpointParseError;
use rgb_host_sdk::network::NetworkParseError;
use rgb_host_sdk::{Endpoint, Network};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory for the runtime's on-disk state
    pub data_dir: PathBuf,

    /// Network the runtime is constructed against
    pub network: Network,

    /// Node/indexer endpoint the runtime is configured to contact
    pub endpoint: Endpoint,

    /// Directory the runtime shared library is looked up in
    pub library_dir: PathBuf,

    /// Bare library name, decorated per platform (e.g. "rgb" -> "librgb.so")
    pub library_name: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults; set-but-malformed network or
    /// endpoint values are errors rather than silent fallbacks, since a wrong
    /// network context must never be absorbed quietly.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            data_dir: env::var("RGB_HOST_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),

            network: match env::var("RGB_HOST_NETWORK") {
                Ok(raw) => raw.parse().map_err(|source| ConfigError::Network {
                    var: "RGB_HOST_NETWORK",
                    source,
                })?,
                Err(_) => Network::Testnet,
            },

            endpoint: match env::var("RGB_HOST_ENDPOINT") {
                Ok(raw) => raw.parse().map_err(|source| ConfigError::Endpoint {
                    var: "RGB_HOST_ENDPOINT",
                    source,
                })?,
                Err(_) => Endpoint::new("pandora.network", 60001)
                    .expect("default endpoint is well-formed"),
            },

            library_dir: env::var("RGB_HOST_LIBRARY_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),

            library_name: env::var("RGB_HOST_LIBRARY_NAME").unwrap_or_else(|_| "rgb".to_string()),
        })
    }
}

/// Errors produced while reading configuration from the environment
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {source}")]
    Network {
        var: &'static str,
        source: NetworkParseError,
    },

    #[error("invalid {var}: {source}")]
    Endpoint {
        var: &'static str,
        source: EndpointParseError,
    },
}
