//! Runtime construction parameters

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;
use crate::error::ConstructionError;
use crate::network::Network;

/// The triple a runtime is constructed from
///
/// Carried by value into the provider and retained by the host for the
/// lifetime of the handle, so callers can always see exactly what a runtime
/// was built with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeParams {
    /// Directory the runtime keeps its on-disk state under
    pub data_dir: PathBuf,

    /// Blockchain network context
    pub network: Network,

    /// Node/indexer address the runtime is configured to contact
    pub endpoint: Endpoint,
}

impl RuntimeParams {
    pub fn new(data_dir: impl Into<PathBuf>, network: Network, endpoint: Endpoint) -> Self {
        Self {
            data_dir: data_dir.into(),
            network,
            endpoint,
        }
    }

    /// Check the storage directory before handing the parameters to a provider
    ///
    /// The directory must exist, be a directory, and be writable. Writability
    /// is probed by creating and removing a marker file, since permission
    /// bits alone do not answer the question on every platform. The endpoint
    /// is deliberately not probed.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        match fs::metadata(&self.data_dir) {
            Err(_) => {
                return Err(ConstructionError::StorageDirMissing {
                    path: self.data_dir.clone(),
                })
            }
            Ok(meta) if !meta.is_dir() => {
                return Err(ConstructionError::StorageDirNotADirectory {
                    path: self.data_dir.clone(),
                })
            }
            Ok(_) => {}
        }
        probe_writable(&self.data_dir)
    }
}

fn probe_writable(dir: &Path) -> Result<(), ConstructionError> {
    let marker = dir.join(".rgb-host-write-probe");
    match fs::write(&marker, b"") {
        Ok(()) => {
            let _ = fs::remove_file(&marker);
            Ok(())
        }
        Err(e) => Err(ConstructionError::StorageDirNotWritable {
            path: dir.to_path_buf(),
            message: e.to_string(),
        }),
    }
}
