//! RGB Host SDK - Types and contracts for native RGB runtime providers
//!
//! This crate defines what a native runtime implementation must look like to
//! the host process that loads it:
//! - The construction parameter vocabulary (network, endpoint, storage dir)
//! - The typed failure taxonomy (load vs. construction failures)
//! - The C ABI a runtime shared library must export
//! - The object-safe trait the host uses to hold a constructed runtime

pub mod abi;
pub mod endpoint;
pub mod error;
pub mod network;
pub mod params;
pub mod runtime;

pub mod prelude {
    //! Common imports for runtime provider implementations
    pub use crate::endpoint::Endpoint;
    pub use crate::error::{ConstructionError, FailureKind, InitError, LoadError};
    pub use crate::network::Network;
    pub use crate::params::RuntimeParams;
    pub use crate::runtime::NativeRuntime;
}

// Re-export key types at crate root
pub use endpoint::Endpoint;
pub use error::{ConstructionError, FailureKind, InitError, LoadError};
pub use network::Network;
pub use params::RuntimeParams;
pub use runtime::NativeRuntime;
