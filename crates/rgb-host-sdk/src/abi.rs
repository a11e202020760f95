//! C ABI contract for native runtime libraries
//!
//! A runtime shared library must export three symbols:
//!
//! ```ignore
//! #[no_mangle]
//! pub extern "C" fn rgb_runtime_create(
//!     data_dir: *const c_char,
//!     network: *const c_char,
//!     endpoint: *const c_char,
//! ) -> *mut c_void;
//!
//! #[no_mangle]
//! pub extern "C" fn rgb_runtime_destroy(runtime: *mut c_void);
//!
//! #[no_mangle]
//! pub extern "C" fn rgb_runtime_last_error() -> *const c_char;
//! ```
//!
//! All string arguments are NUL-terminated and encode the same identifiers
//! the host-side types produce (`Network::as_str`, `Endpoint::to_string`).
//! `rgb_runtime_create` returns null on failure; `rgb_runtime_last_error`
//! then yields the most recent failure message, or null if the library does
//! not keep one. The returned error pointer must stay valid until the next
//! call into the library on the same thread.
//!
//! `rgb_runtime_last_error` is optional: the host treats its absence as
//! "no message available", not as a load failure.

use std::os::raw::{c_char, c_void};

/// Symbol name of the runtime constructor export
pub const CREATE_SYMBOL: &[u8] = b"rgb_runtime_create";

/// Symbol name of the runtime destructor export
pub const DESTROY_SYMBOL: &[u8] = b"rgb_runtime_destroy";

/// Symbol name of the optional last-error export
pub const LAST_ERROR_SYMBOL: &[u8] = b"rgb_runtime_last_error";

/// Constructor export: `(data_dir, network, endpoint) -> runtime | null`
pub type CreateFn =
    unsafe extern "C" fn(*const c_char, *const c_char, *const c_char) -> *mut c_void;

/// Destructor export: releases a runtime returned by [`CreateFn`]
pub type DestroyFn = unsafe extern "C" fn(*mut c_void);

/// Last-error export: most recent construction failure message, or null
pub type LastErrorFn = unsafe extern "C" fn() -> *const c_char;
