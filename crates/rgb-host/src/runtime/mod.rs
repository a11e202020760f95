//! Runtime lifecycle ownership
//!
//! - `RuntimeHandle`: a constructed runtime plus the exact parameters it was
//!   built from
//! - `RuntimeHost`: the single, dependency-injected owner of the current
//!   handle

pub mod handle;
pub mod host;

pub use handle::RuntimeHandle;
pub use host::RuntimeHost;
