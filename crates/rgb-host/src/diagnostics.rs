//! Startup diagnostics
//!
//! A one-way, append-only channel for startup status and failure reporting.
//! Nothing reads it back programmatically on the production path; the
//! recording sink exists so embedders and tests can count and inspect what
//! was emitted.

use std::sync::Mutex;

use rgb_host_sdk::{Endpoint, FailureKind, Network, RuntimeParams};

/// Events emitted during a runtime initialization attempt
#[derive(Debug, Clone)]
pub enum StartupEvent {
    /// The host is about to ask a provider for a runtime
    LibraryLoading { provider: String },

    /// A runtime was constructed and stored
    RuntimeReady {
        network: Network,
        endpoint: Endpoint,
        runtime_kind: &'static str,
    },

    /// The native component could not be brought into the process
    LibraryLoadFailed { message: String },

    /// The native component rejected the parameters or failed setup
    RuntimeConstructionFailed { message: String },
}

impl StartupEvent {
    /// Build the failure event matching a failure kind
    pub fn failure(kind: FailureKind, message: String) -> Self {
        match kind {
            FailureKind::LibraryLoad => StartupEvent::LibraryLoadFailed { message },
            FailureKind::Construction => StartupEvent::RuntimeConstructionFailed { message },
        }
    }

    /// The failure kind this event reports, if it reports one
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            StartupEvent::LibraryLoadFailed { .. } => Some(FailureKind::LibraryLoad),
            StartupEvent::RuntimeConstructionFailed { .. } => Some(FailureKind::Construction),
            _ => None,
        }
    }
}

/// One-way sink for startup events
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, event: &StartupEvent);
}

/// Production sink: forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, event: &StartupEvent) {
        match event {
            StartupEvent::LibraryLoading { provider } => {
                tracing::info!(%provider, "Loading native runtime");
            }
            StartupEvent::RuntimeReady {
                network,
                endpoint,
                runtime_kind,
            } => {
                tracing::info!(%network, %endpoint, runtime_kind, "Runtime ready");
            }
            StartupEvent::LibraryLoadFailed { message } => {
                tracing::error!("Error loading runtime library: {}", message);
            }
            StartupEvent::RuntimeConstructionFailed { message } => {
                tracing::error!("Runtime construction failed: {}", message);
            }
        }
    }
}

/// Recording sink: appends events to an in-memory log
pub struct RecordingSink {
    events: Mutex<Vec<StartupEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything emitted so far
    pub fn events(&self) -> Vec<StartupEvent> {
        self.events.lock().expect("diagnostics lock poisoned").clone()
    }

    /// Number of failure events of the given kind emitted so far
    pub fn failure_count(&self, kind: FailureKind) -> usize {
        self.events()
            .iter()
            .filter(|e| e.failure_kind() == Some(kind))
            .count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, event: &StartupEvent) {
        self.events
            .lock()
            .expect("diagnostics lock poisoned")
            .push(event.clone());
    }
}

/// Convenience: the ready event for a stored handle
pub(crate) fn ready_event(params: &RuntimeParams, runtime_kind: &'static str) -> StartupEvent {
    StartupEvent::RuntimeReady {
        network: params.network,
        endpoint: params.endpoint.clone(),
        runtime_kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_events_round_trip_their_kind() {
        let load = StartupEvent::failure(FailureKind::LibraryLoad, "no library".into());
        assert_eq!(load.failure_kind(), Some(FailureKind::LibraryLoad));

        let construction = StartupEvent::failure(FailureKind::Construction, "rejected".into());
        assert_eq!(construction.failure_kind(), Some(FailureKind::Construction));
    }

    #[test]
    fn recording_sink_counts_by_kind() {
        let sink = RecordingSink::new();
        sink.emit(&StartupEvent::LibraryLoading {
            provider: "dynamic-library".into(),
        });
        sink.emit(&StartupEvent::failure(
            FailureKind::Construction,
            "bad network".into(),
        ));

        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.failure_count(FailureKind::Construction), 1);
        assert_eq!(sink.failure_count(FailureKind::LibraryLoad), 0);
    }
}
