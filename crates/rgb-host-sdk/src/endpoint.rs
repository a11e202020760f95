//! Node endpoint addresses
//!
//! A `host:port` address of the remote node or indexing service the runtime
//! contacts. The address is parsed and carried, never resolved or probed:
//! reachability is the runtime's concern, not the host's.

use serde::{Deserialize, Serialize};

/// A `host:port` endpoint address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    /// Create an endpoint from an already-validated host and port
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, EndpointParseError> {
        let host = host.into();
        if host.is_empty() {
            return Err(EndpointParseError::EmptyHost);
        }
        Ok(Self { host, port })
    }

    /// Hostname, IPv4 literal, or bracketed IPv6 literal
    pub fn host(&self) -> &str {
        &self.host
    }

    /// TCP port
    pub fn port(&self) -> u16 {
        self.port
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl std::str::FromStr for Endpoint {
    type Err = EndpointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split on the last colon so bracketed IPv6 hosts keep their colons
        let (host, port) = s
            .rsplit_once(':')
            .ok_or_else(|| EndpointParseError::MissingPort {
                input: s.to_string(),
            })?;
        if host.is_empty() {
            return Err(EndpointParseError::EmptyHost);
        }
        let port: u16 = port.parse().map_err(|_| EndpointParseError::InvalidPort {
            input: port.to_string(),
        })?;
        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

impl TryFrom<String> for Endpoint {
    type Error = EndpointParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.to_string()
    }
}

/// Errors produced when parsing a `host:port` string
#[derive(Debug, Clone, thiserror::Error)]
pub enum EndpointParseError {
    #[error("endpoint {input:?} has no port (expected host:port)")]
    MissingPort { input: String },

    #[error("endpoint has an empty host")]
    EmptyHost,

    #[error("endpoint port {input:?} is not a number in 0-65535")]
    InvalidPort { input: String },
}
