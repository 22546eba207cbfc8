//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the example registry, the optional issue tracker, and the rate
//! limiter for the submission endpoint.

use std::sync::Arc;

use crate::issues::CreateIssue;
use crate::rate_limit::RateLimiter;
use crate::registry::ExampleRegistry;

/// Shared application state. Clone is required by Axum; all inner fields
/// are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ExampleRegistry>,
    /// Optional issue tracker. `None` when the GitHub env vars are not
    /// configured; submissions return 503 in that case.
    pub tracker: Option<Arc<dyn CreateIssue>>,
    /// In-memory rate limiter for icon requests.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(registry: Arc<ExampleRegistry>, tracker: Option<Arc<dyn CreateIssue>>) -> Self {
        Self { registry, tracker, rate_limiter: RateLimiter::new() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::issues::{CreatedIssue, IssueError, IssueRequest};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Create a test `AppState` with the built-in registry and no tracker.
    #[must_use]
    pub fn test_app_state() -> AppState {
        let registry = ExampleRegistry::builtin(env!("CARGO_MANIFEST_DIR")).expect("builtin registry");
        AppState::new(Arc::new(registry), None)
    }

    /// Create a test `AppState` with a mock tracker.
    #[must_use]
    pub fn test_app_state_with_tracker(tracker: Arc<dyn CreateIssue>) -> AppState {
        let registry = ExampleRegistry::builtin(env!("CARGO_MANIFEST_DIR")).expect("builtin registry");
        AppState::new(Arc::new(registry), Some(tracker))
    }

    /// Tracker mock that plays back scripted results and counts calls.
    /// Once the script runs out it answers with a canned success.
    pub struct ScriptedTracker {
        results: Mutex<Vec<Result<CreatedIssue, IssueError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedTracker {
        #[must_use]
        pub fn new(results: Vec<Result<CreatedIssue, IssueError>>) -> Self {
            Self { results: Mutex::new(results), calls: AtomicUsize::new(0) }
        }

        /// Number of `create_issue` calls observed so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl CreateIssue for ScriptedTracker {
        async fn create_issue(&self, _request: &IssueRequest) -> Result<CreatedIssue, IssueError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut results = self.results.lock().unwrap();
            if results.is_empty() {
                Ok(CreatedIssue { url: "https://github.com/acme/icons/issues/1".into(), number: 1 })
            } else {
                results.remove(0)
            }
        }
    }
}
