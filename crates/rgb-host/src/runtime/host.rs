//! The runtime lifecycle owner

use std::sync::{Arc, RwLock};

use rgb_host_sdk::{InitError, RuntimeParams};

use crate::diagnostics::{self, DiagnosticSink, StartupEvent};
use crate::provider::RuntimeProvider;
use crate::runtime::handle::RuntimeHandle;

/// Owns the process's runtime handle
///
/// One `RuntimeHost` is created on the startup path and passed (or cloned
/// behind an `Arc`) to whichever components need runtime access; there is no
/// globally reachable instance. Initialization is synchronous and blocking:
/// it completes, successfully or not, before the caller proceeds.
///
/// Failure policy belongs to the caller. `initialize` reports failures on
/// the diagnostic channel and returns them as typed errors; it never
/// retries, and a failed attempt leaves any previously stored handle
/// untouched.
pub struct RuntimeHost {
    provider: Arc<dyn RuntimeProvider>,
    diagnostics: Arc<dyn DiagnosticSink>,

    /// Current handle; replaced wholesale by a successful `initialize`
    current: RwLock<Option<Arc<RuntimeHandle>>>,
}

impl RuntimeHost {
    pub fn new(provider: Arc<dyn RuntimeProvider>, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            provider,
            diagnostics,
            current: RwLock::new(None),
        }
    }

    /// Attempt to construct and store a runtime
    ///
    /// Validates the storage directory, asks the provider for a runtime, and
    /// on success stores the new handle, replacing any previous one. Callers
    /// that initialized earlier keep their `Arc` until they drop it, at
    /// which point the old runtime is released.
    ///
    /// Exactly one failure event is emitted per failed attempt, matching the
    /// kind of the returned error.
    pub fn initialize(&self, params: RuntimeParams) -> Result<Arc<RuntimeHandle>, InitError> {
        self.diagnostics.emit(&StartupEvent::LibraryLoading {
            provider: self.provider.name().to_string(),
        });

        let result = params
            .validate()
            .map_err(InitError::from)
            .and_then(|()| self.provider.provide(&params));

        let runtime = match result {
            Ok(runtime) => runtime,
            Err(err) => {
                self.diagnostics
                    .emit(&StartupEvent::failure(err.kind(), err.to_string()));
                return Err(err);
            }
        };

        let handle = Arc::new(RuntimeHandle::new(params, runtime));
        self.diagnostics
            .emit(&diagnostics::ready_event(handle.params(), handle.runtime_kind()));

        let mut current = self.current.write().expect("runtime slot lock poisoned");
        *current = Some(Arc::clone(&handle));
        Ok(handle)
    }

    /// The current handle, or `None` if no initialization has succeeded
    ///
    /// Pure accessor; callers must handle the absent case themselves.
    pub fn get(&self) -> Option<Arc<RuntimeHandle>> {
        self.current
            .read()
            .expect("runtime slot lock poisoned")
            .clone()
    }

    /// Whether a runtime is currently available
    pub fn is_ready(&self) -> bool {
        self.current
            .read()
            .expect("runtime slot lock poisoned")
            .is_some()
    }
}

impl std::fmt::Debug for RuntimeHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeHost")
            .field("provider", &self.provider.name())
            .field("is_ready", &self.is_ready())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;
    use crate::provider::FallbackProvider;
    use rgb_host_sdk::{ConstructionError, FailureKind, LoadError, NativeRuntime, Network};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubRuntime {
        released: Arc<AtomicUsize>,
    }

    impl NativeRuntime for StubRuntime {
        fn kind(&self) -> &'static str {
            "in-process"
        }
    }

    impl Drop for StubRuntime {
        fn drop(&mut self) {
            self.released.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn working_provider(released: Arc<AtomicUsize>) -> Arc<dyn RuntimeProvider> {
        Arc::new(FallbackProvider::new(move |_| {
            Ok(Box::new(StubRuntime {
                released: Arc::clone(&released),
            }) as Box<dyn NativeRuntime>)
        }))
    }

    fn params_in(dir: &std::path::Path, network: Network) -> RuntimeParams {
        RuntimeParams::new(dir, network, "pandora.network:60001".parse().unwrap())
    }

    #[test]
    fn get_before_initialize_is_absent() {
        let sink = Arc::new(RecordingSink::new());
        let host = RuntimeHost::new(working_provider(Arc::default()), sink.clone());

        assert!(host.get().is_none());
        assert!(!host.is_ready());
        // Pure accessor: nothing was emitted
        assert!(sink.events().is_empty());
    }

    #[test]
    fn successful_initialize_stores_a_handle_with_the_exact_params() {
        let dir = tempfile::tempdir().unwrap();
        let sink = Arc::new(RecordingSink::new());
        let host = RuntimeHost::new(working_provider(Arc::default()), sink.clone());

        let handle = host
            .initialize(params_in(dir.path(), Network::Regtest))
            .unwrap();
        assert_eq!(handle.data_dir(), dir.path());
        assert_eq!(handle.network(), Network::Regtest);
        assert_eq!(handle.endpoint().to_string(), "pandora.network:60001");
        assert_eq!(handle.runtime_kind(), "in-process");

        let stored = host.get().expect("handle stored");
        assert!(Arc::ptr_eq(&stored, &handle));
        assert!(sink
            .events()
            .iter()
            .any(|e| matches!(e, StartupEvent::RuntimeReady { .. })));
    }

    #[test]
    fn load_failure_leaves_host_empty_and_emits_one_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let provider = Arc::new(FallbackProvider::new(|_| {
            Err(LoadError::NotFound {
                path: "/nonexistent/librgb.so".into(),
            }
            .into())
        }));
        let sink = Arc::new(RecordingSink::new());
        let host = RuntimeHost::new(provider, sink.clone());

        let err = host
            .initialize(params_in(dir.path(), Network::Testnet))
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::LibraryLoad);
        assert!(host.get().is_none());
        assert_eq!(sink.failure_count(FailureKind::LibraryLoad), 1);
        assert_eq!(sink.failure_count(FailureKind::Construction), 0);
    }

    #[test]
    fn construction_failure_leaves_host_empty_and_emits_one_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        // Simulate the native side rejecting the network
        let provider = Arc::new(FallbackProvider::new(|params: &RuntimeParams| {
            Err(ConstructionError::Rejected(format!(
                "unsupported network {}",
                params.network
            ))
            .into())
        }));
        let sink = Arc::new(RecordingSink::new());
        let host = RuntimeHost::new(provider, sink.clone());

        let err = host
            .initialize(params_in(dir.path(), Network::Mainnet))
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::Construction);
        assert!(host.get().is_none());
        assert_eq!(sink.failure_count(FailureKind::Construction), 1);
        assert_eq!(sink.failure_count(FailureKind::LibraryLoad), 0);
    }

    #[test]
    fn invalid_storage_dir_is_a_construction_failure() {
        let dir = tempfile::tempdir().unwrap();
        let sink = Arc::new(RecordingSink::new());
        let host = RuntimeHost::new(working_provider(Arc::default()), sink.clone());

        let missing = dir.path().join("not-created");
        let err = host
            .initialize(params_in(&missing, Network::Testnet))
            .unwrap_err();
        assert!(matches!(
            err,
            InitError::Construction(ConstructionError::StorageDirMissing { .. })
        ));
        assert!(host.get().is_none());
        assert_eq!(sink.failure_count(FailureKind::Construction), 1);
    }

    #[test]
    fn second_initialize_is_independent_and_overwrites_on_success() {
        // Documents current behavior: attempts are not merged or rejected;
        // a second success replaces the stored reference, and the first
        // runtime survives until its last holder drops it
        let dir = tempfile::tempdir().unwrap();
        let released = Arc::new(AtomicUsize::new(0));
        let host = RuntimeHost::new(
            working_provider(Arc::clone(&released)),
            Arc::new(RecordingSink::new()),
        );

        let first = host
            .initialize(params_in(dir.path(), Network::Testnet))
            .unwrap();
        let second = host
            .initialize(params_in(dir.path(), Network::Regtest))
            .unwrap();

        let stored = host.get().unwrap();
        assert!(Arc::ptr_eq(&stored, &second));
        assert_eq!(stored.network(), Network::Regtest);

        // First handle still alive in our hands; nothing released yet
        assert_eq!(first.network(), Network::Testnet);
        assert_eq!(released.load(Ordering::SeqCst), 0);

        drop(first);
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_attempt_keeps_the_previous_handle() {
        let dir = tempfile::tempdir().unwrap();
        let sink = Arc::new(RecordingSink::new());

        let host = RuntimeHost::new(working_provider(Arc::default()), sink.clone());
        let first = host
            .initialize(params_in(dir.path(), Network::Testnet))
            .unwrap();

        // Second attempt fails on storage validation
        let missing = dir.path().join("gone");
        assert!(host.initialize(params_in(&missing, Network::Testnet)).is_err());

        let stored = host.get().expect("previous handle retained");
        assert!(Arc::ptr_eq(&stored, &first));
    }

    #[test]
    fn dropping_the_last_reference_releases_the_runtime() {
        let dir = tempfile::tempdir().unwrap();
        let released = Arc::new(AtomicUsize::new(0));
        let host = RuntimeHost::new(
            working_provider(Arc::clone(&released)),
            Arc::new(RecordingSink::new()),
        );

        let handle = host
            .initialize(params_in(dir.path(), Network::Testnet))
            .unwrap();
        drop(handle);
        // Host still holds a reference
        assert_eq!(released.load(Ordering::SeqCst), 0);

        drop(host);
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }
}
