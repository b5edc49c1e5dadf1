//! Cache-invalidation seam.
//!
//! After a successful write, actions tell the rendering layer to discard
//! its cached copy of a page. The rendering layer itself is an external
//! collaborator, so the hook is a trait; the production implementation
//! just records the signal in the logs.

use std::sync::Mutex;

/// Signal that a rendered page path is stale and must be regenerated.
pub trait Revalidator: Send + Sync + 'static {
    fn invalidate(&self, path: &str);
}

/// Production revalidator: emits a tracing event for the host
/// rendering layer to pick up.
pub struct TracingRevalidator;

impl Revalidator for TracingRevalidator {
    fn invalidate(&self, path: &str) {
        tracing::info!(path, "revalidate");
    }
}

/// Test revalidator that remembers every invalidated path.
pub struct RecordingRevalidator {
    paths: Mutex<Vec<String>>,
}

impl RecordingRevalidator {
    pub fn new() -> Self {
        Self {
            paths: Mutex::new(Vec::new()),
        }
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Default for RecordingRevalidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Revalidator for RecordingRevalidator {
    fn invalidate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_owned());
    }
}
