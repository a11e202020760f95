//! The provider seam
//!
//! `RuntimeProvider` abstracts over how the native runtime gets into the
//! process. The production implementation is [`DynamicLibraryProvider`]
//! (dynamic linking); `FallbackProvider` runs a constructor in-process for
//! platforms without dynamic loading and for tests. The host never depends
//! on a particular linking facility.
//!
//! [`DynamicLibraryProvider`]: crate::loader::DynamicLibraryProvider

use rgb_host_sdk::{InitError, NativeRuntime, RuntimeParams};

/// Source of native runtime instances
pub trait RuntimeProvider: Send + Sync {
    /// Short identifier for diagnostics (e.g. `"dynamic-library"`)
    fn name(&self) -> &str;

    /// Load the native component if needed and construct a runtime
    ///
    /// Errors keep the two failure phases apart: a [`LoadError`] means the
    /// component never made it into the process, a [`ConstructionError`]
    /// means it did but refused the parameters or failed its own setup.
    ///
    /// [`LoadError`]: rgb_host_sdk::LoadError
    /// [`ConstructionError`]: rgb_host_sdk::ConstructionError
    fn provide(&self, params: &RuntimeParams) -> Result<Box<dyn NativeRuntime>, InitError>;
}

type FallbackCtor =
    dyn Fn(&RuntimeParams) -> Result<Box<dyn NativeRuntime>, InitError> + Send + Sync;

/// Provider that can be used when dynamic loading is not available
/// or for testing purposes
pub struct FallbackProvider {
    ctor: Box<FallbackCtor>,
}

impl FallbackProvider {
    /// Wrap a constructor function
    pub fn new<F>(ctor: F) -> Self
    where
        F: Fn(&RuntimeParams) -> Result<Box<dyn NativeRuntime>, InitError> + Send + Sync + 'static,
    {
        Self {
            ctor: Box::new(ctor),
        }
    }
}

impl RuntimeProvider for FallbackProvider {
    fn name(&self) -> &str {
        "fallback"
    }

    fn provide(&self, params: &RuntimeParams) -> Result<Box<dyn NativeRuntime>, InitError> {
        (self.ctor)(params)
    }
}
