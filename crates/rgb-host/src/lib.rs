//! RGB Host - loads the native RGB runtime and owns its lifecycle
//!
//! This crate is the thin front-end over an externally implemented runtime
//! shared library. It provides:
//! - Environment-driven configuration
//! - A pluggable provider seam over "how the runtime gets into the process"
//! - A libloading-backed provider for the production path
//! - `RuntimeHost`, the single lifecycle owner embedders inject where needed
//! - A one-way diagnostic channel for startup status and failures

pub mod config;
pub mod diagnostics;
pub mod loader;
pub mod provider;
pub mod runtime;

pub use config::AppConfig;
pub use diagnostics::{DiagnosticSink, RecordingSink, StartupEvent, TracingSink};
pub use loader::DynamicLibraryProvider;
pub use provider::{FallbackProvider, RuntimeProvider};
pub use runtime::{RuntimeHandle, RuntimeHost};
