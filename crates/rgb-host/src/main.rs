//! RGB Host - Main entry point
//!
//! Startup sequence:
//! - Initialize tracing
//! - Load configuration from the environment
//! - Resolve the writable data directory
//! - Load the native runtime library and construct the runtime
//!
//! Initialization failures are terminal for the attempt but not for the
//! process: the host logs the failure and keeps going without a runtime.

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rgb_host::{AppConfig, DynamicLibraryProvider, RuntimeHost, TracingSink};
use rgb_host_sdk::RuntimeParams;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rgb_host=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RGB host");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    // The per-application data directory must exist before the runtime
    // opens its state under it
    fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("creating data directory {:?}", config.data_dir))?;

    let provider = DynamicLibraryProvider::from_dir(&config.library_dir, &config.library_name);
    tracing::info!(path = ?provider.library_path(), "Loading '{}' library", config.library_name);

    let host = RuntimeHost::new(Arc::new(provider), Arc::new(TracingSink));
    let params = RuntimeParams::new(config.data_dir, config.network, config.endpoint);

    // Both failure kinds are reported on the diagnostic channel by the host;
    // the process continues degraded, and dependent components must handle
    // the absent handle
    match host.initialize(params) {
        Ok(handle) => {
            tracing::info!(
                network = %handle.network(),
                endpoint = %handle.endpoint(),
                "Runtime initialized"
            );
        }
        Err(_) => {
            tracing::warn!("Continuing without a native runtime");
        }
    }

    Ok(())
}
