//! Dynamic library runtime provider
//!
//! Loads the runtime shared library (.so/.dll/.dylib) and constructs runtime
//! instances through the C ABI declared in `rgb_host_sdk::abi`. The library
//! stays mapped for as long as any runtime constructed from it is alive.

use std::ffi::{CStr, CString};
use std::os::raw::c_void;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use libloading::{Library, Symbol};

use rgb_host_sdk::abi::{self, CreateFn, DestroyFn, LastErrorFn};
use rgb_host_sdk::{ConstructionError, InitError, LoadError, NativeRuntime, RuntimeParams};

use crate::provider::RuntimeProvider;

/// A runtime shared library mapped into the process
///
/// Resolves the full runtime ABI at open time, so a library missing its
/// create or destroy export fails as a load error rather than at first use.
pub struct NativeLibrary {
    /// The loaded library (must stay mapped while any runtime is in use)
    _library: Library,
    create: CreateFn,
    destroy: DestroyFn,
    last_error: Option<LastErrorFn>,
    path: PathBuf,
}

impl NativeLibrary {
    /// Load a library and resolve the runtime exports
    ///
    /// # Safety
    /// Loading executes the library's initialization routines. The library
    /// must be a trusted runtime implementation following the documented ABI.
    pub unsafe fn open(path: &Path) -> Result<Self, LoadError> {
        let library = Library::new(path).map_err(|e| LoadError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let create: Symbol<CreateFn> =
            library.get(abi::CREATE_SYMBOL).map_err(|e| LoadError::MissingSymbol {
                path: path.to_path_buf(),
                symbol: "rgb_runtime_create",
                message: e.to_string(),
            })?;
        let create = *create;

        let destroy: Symbol<DestroyFn> =
            library.get(abi::DESTROY_SYMBOL).map_err(|e| LoadError::MissingSymbol {
                path: path.to_path_buf(),
                symbol: "rgb_runtime_destroy",
                message: e.to_string(),
            })?;
        let destroy = *destroy;

        // The last-error export is optional; absence only costs diagnostics
        let last_error = library
            .get::<LastErrorFn>(abi::LAST_ERROR_SYMBOL)
            .ok()
            .map(|symbol| *symbol);

        Ok(Self {
            _library: library,
            create,
            destroy,
            last_error,
            path: path.to_path_buf(),
        })
    }

    /// Construct a runtime through the C ABI
    pub fn construct(
        self: &Arc<Self>,
        params: &RuntimeParams,
    ) -> Result<DynamicRuntime, ConstructionError> {
        let data_dir = params.data_dir.to_str().ok_or_else(|| {
            ConstructionError::Rejected(format!(
                "storage path {:?} is not valid UTF-8",
                params.data_dir
            ))
        })?;
        let data_dir = CString::new(data_dir)
            .map_err(|_| ConstructionError::Rejected("storage path contains a NUL byte".into()))?;
        let network = CString::new(params.network.as_str())
            .expect("network identifiers contain no NUL");
        let endpoint = CString::new(params.endpoint.to_string())
            .map_err(|_| ConstructionError::Rejected("endpoint contains a NUL byte".into()))?;

        // Safety: all three pointers are valid NUL-terminated strings and the
        // create export follows the documented ABI
        let raw = unsafe { (self.create)(data_dir.as_ptr(), network.as_ptr(), endpoint.as_ptr()) };
        if raw.is_null() {
            return Err(ConstructionError::Native(self.take_last_error()));
        }

        Ok(DynamicRuntime {
            raw,
            library: Arc::clone(self),
        })
    }

    /// Path the library was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn take_last_error(&self) -> String {
        const NO_MESSAGE: &str = "no error message available";
        let Some(last_error) = self.last_error else {
            return NO_MESSAGE.to_string();
        };
        // Safety: the export returns null or a pointer valid until the next
        // call into the library
        let ptr = unsafe { last_error() };
        if ptr.is_null() {
            return NO_MESSAGE.to_string();
        }
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }
}

/// A runtime constructed through the C ABI
pub struct DynamicRuntime {
    raw: *mut c_void,

    /// Keeps the library mapped for as long as the runtime exists
    library: Arc<NativeLibrary>,
}

impl NativeRuntime for DynamicRuntime {
    fn kind(&self) -> &'static str {
        "dynamic-library"
    }
}

impl Drop for DynamicRuntime {
    fn drop(&mut self) {
        // Safety: `raw` came from this library's create export and is
        // released exactly once
        unsafe { (self.library.destroy)(self.raw) };
    }
}

// Safety: the raw pointer is owned exclusively by this wrapper, the library
// behind it stays mapped via the Arc, and the runtime ABI requires the
// native side to tolerate shared cross-thread use
unsafe impl Send for DynamicRuntime {}
unsafe impl Sync for DynamicRuntime {}

/// Provider that loads the runtime from a shared library on disk
pub struct DynamicLibraryProvider {
    library_path: PathBuf,
}

impl DynamicLibraryProvider {
    /// Look the library up in `dir` under its platform-decorated name
    pub fn from_dir(dir: &Path, name: &str) -> Self {
        Self {
            library_path: dir.join(format_library_name(name)),
        }
    }

    /// Use an explicit library path
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            library_path: path.into(),
        }
    }

    /// The path the provider will load from
    pub fn library_path(&self) -> &Path {
        &self.library_path
    }
}

impl RuntimeProvider for DynamicLibraryProvider {
    fn name(&self) -> &str {
        "dynamic-library"
    }

    fn provide(&self, params: &RuntimeParams) -> Result<Box<dyn NativeRuntime>, InitError> {
        if !self.library_path.exists() {
            return Err(LoadError::NotFound {
                path: self.library_path.clone(),
            }
            .into());
        }

        // Safety: the operator pointed the host at this path; it is trusted
        // to be a runtime library following the documented ABI
        let library = unsafe { NativeLibrary::open(&self.library_path)? };
        let library = Arc::new(library);

        let runtime = library.construct(params)?;
        tracing::debug!(path = ?library.path(), "Native runtime constructed");
        Ok(Box::new(runtime))
    }
}

/// Format the library filename for the current platform
#[cfg(target_os = "windows")]
fn format_library_name(name: &str) -> String {
    format!("{}.dll", name)
}

#[cfg(target_os = "macos")]
fn format_library_name(name: &str) -> String {
    format!("lib{}.dylib", name)
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn format_library_name(name: &str) -> String {
    format!("lib{}.so", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb_host_sdk::{FailureKind, Network};

    #[test]
    fn test_library_name_format() {
        let name = format_library_name("rgb");

        #[cfg(target_os = "windows")]
        assert_eq!(name, "rgb.dll");

        #[cfg(target_os = "macos")]
        assert_eq!(name, "librgb.dylib");

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        assert_eq!(name, "librgb.so");
    }

    #[test]
    fn missing_library_is_a_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DynamicLibraryProvider::from_dir(dir.path(), "rgb");

        let params = RuntimeParams::new(
            dir.path(),
            Network::Testnet,
            "pandora.network:60001".parse().unwrap(),
        );
        let Err(err) = provider.provide(&params) else {
            panic!("expected provide to fail");
        };
        assert_eq!(err.kind(), FailureKind::LibraryLoad);
        assert!(matches!(
            err,
            InitError::LibraryLoad(LoadError::NotFound { .. })
        ));
    }

    #[test]
    fn file_that_is_not_a_library_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format_library_name("rgb"));
        std::fs::write(&path, b"not an object file").unwrap();

        let provider = DynamicLibraryProvider::from_path(&path);
        let params = RuntimeParams::new(
            dir.path(),
            Network::Testnet,
            "127.0.0.1:50001".parse().unwrap(),
        );
        let Err(err) = provider.provide(&params) else {
            panic!("expected provide to fail");
        };
        assert!(matches!(err, InitError::LibraryLoad(LoadError::Open { .. })));
    }
}
