//! Failure taxonomy for runtime initialization
//!
//! Initialization can fail in exactly two ways, and callers must be able to
//! tell them apart programmatically:
//! - [`LoadError`]: the native component never made it into the process
//! - [`ConstructionError`]: the component rejected the parameters or failed
//!   its own internal setup
//!
//! Both are terminal for that attempt. There is no retry and no fallback at
//! this level; policy belongs to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// The native component could not be loaded into the process
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("native library not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to load native library {path:?}: {message}")]
    Open { path: PathBuf, message: String },

    #[error("library {path:?} is missing required symbol `{symbol}`: {message}")]
    MissingSymbol {
        path: PathBuf,
        symbol: &'static str,
        message: String,
    },
}

/// The native component rejected the parameters or failed internal setup
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("storage directory {path:?} does not exist")]
    StorageDirMissing { path: PathBuf },

    #[error("storage path {path:?} is not a directory")]
    StorageDirNotADirectory { path: PathBuf },

    #[error("storage directory {path:?} is not writable: {message}")]
    StorageDirNotWritable { path: PathBuf, message: String },

    #[error("runtime rejected parameters: {0}")]
    Rejected(String),

    #[error("native initialization failed: {0}")]
    Native(String),
}

/// Any failure produced by a runtime initialization attempt
#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    LibraryLoad(#[from] LoadError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

impl InitError {
    /// Which of the two failure kinds this is
    pub fn kind(&self) -> FailureKind {
        match self {
            InitError::LibraryLoad(_) => FailureKind::LibraryLoad,
            InitError::Construction(_) => FailureKind::Construction,
        }
    }
}

/// The two failure kinds, as a flat tag for diagnostics and dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    LibraryLoad,
    Construction,
}
