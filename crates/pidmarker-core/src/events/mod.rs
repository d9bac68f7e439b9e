//! Marker lifecycle events.
//!
//! One event exists: the marker could not be written and the exit policy is
//! about to terminate the process. Observers run synchronously, on the
//! writing thread, in registration order.
//!
//! # Wire Format
//!
//! ```json
//! { "path": "/var/run/worker.pid", "pid": 4242 }
//! ```

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Notification delivered right before a policy-triggered process exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteErrorEvent {
    /// Path of the marker file that could not be written.
    pub path: PathBuf,
    /// Process id the marker should have recorded.
    pub pid: u32,
}

impl WriteErrorEvent {
    /// Create a new write-error event.
    pub const fn new(path: PathBuf, pid: u32) -> Self {
        Self { path, pid }
    }
}

/// Callback invoked with a `WriteErrorEvent`.
///
/// Must return quickly: the process terminates as soon as every observer
/// has run.
pub type WriteErrorObserver = Box<dyn Fn(&WriteErrorEvent) + Send + Sync>;

/// Ordered set of write-error observers.
#[derive(Default)]
pub struct WriteErrorObservers {
    observers: Vec<WriteErrorObserver>,
}

impl WriteErrorObservers {
    /// Create an empty observer list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. Delivery follows registration order.
    pub fn register(&mut self, observer: WriteErrorObserver) {
        self.observers.push(observer);
    }

    /// Deliver `event` to every observer.
    pub fn notify(&self, event: &WriteErrorEvent) {
        for observer in &self.observers {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for WriteErrorObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteErrorObservers")
            .field("count", &self.observers.len())
            .finish()
    }
}
