//! Network identifiers
//!
//! The runtime operates against exactly one blockchain network context,
//! selected at construction time from a small fixed set.

use serde::{Deserialize, Serialize};

/// Blockchain network the runtime is constructed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network
    Mainnet,
    /// Public test network
    Testnet,
    /// Local regression-test network
    Regtest,
}

impl Network {
    /// All recognized identifiers, in the form accepted by [`FromStr`](std::str::FromStr)
    pub const IDENTIFIERS: [&'static str; 3] = ["mainnet", "testnet", "regtest"];

    /// The lowercase identifier for this network
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Network {
    type Err = NetworkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            other => Err(NetworkParseError {
                input: other.to_string(),
            }),
        }
    }
}

/// Error returned when a network identifier is not one of the recognized set
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown network identifier {input:?} (expected one of: mainnet, testnet, regtest)")]
pub struct NetworkParseError {
    /// The rejected identifier
    pub input: String,
}
