//! The constructed runtime, as the host sees it

/// An opaque, fully constructed native runtime
///
/// The host never looks inside: wallet, contract, and chain logic all live
/// behind this trait. The runtime is released by dropping the last reference
/// to it; the host layer performs no explicit destruction.
pub trait NativeRuntime: Send + Sync {
    /// Identifier of the backing implementation, for diagnostics
    /// (e.g. `"dynamic-library"`, `"in-process"`)
    fn kind(&self) -> &'static str;
}
