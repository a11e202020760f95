//! The constructed runtime handle

use std::path::Path;
use std::time::{Duration, Instant};

use rgb_host_sdk::{Endpoint, NativeRuntime, Network, RuntimeParams};

/// A successfully constructed runtime and its construction record
///
/// Handed out as `Arc<RuntimeHandle>`; dropping the last reference releases
/// the underlying runtime. The parameters are retained verbatim so any
/// holder can see what this runtime was built with.
pub struct RuntimeHandle {
    params: RuntimeParams,
    runtime: Box<dyn NativeRuntime>,
    constructed_at: Instant,
}

impl RuntimeHandle {
    pub(crate) fn new(params: RuntimeParams, runtime: Box<dyn NativeRuntime>) -> Self {
        Self {
            params,
            runtime,
            constructed_at: Instant::now(),
        }
    }

    /// The full construction triple
    pub fn params(&self) -> &RuntimeParams {
        &self.params
    }

    /// Directory the runtime keeps its on-disk state under
    pub fn data_dir(&self) -> &Path {
        &self.params.data_dir
    }

    /// Network the runtime was constructed against
    pub fn network(&self) -> Network {
        self.params.network
    }

    /// Endpoint the runtime is configured to contact
    pub fn endpoint(&self) -> &Endpoint {
        &self.params.endpoint
    }

    /// Backing implementation identifier, for diagnostics
    pub fn runtime_kind(&self) -> &'static str {
        self.runtime.kind()
    }

    /// Time since construction
    pub fn age(&self) -> Duration {
        self.constructed_at.elapsed()
    }
}

impl std::fmt::Debug for RuntimeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeHandle")
            .field("params", &self.params)
            .field("runtime_kind", &self.runtime.kind())
            .finish()
    }
}
