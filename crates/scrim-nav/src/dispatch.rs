#![forbid(unsafe_code)]

//! Injected collaborator seams.
//!
//! The chrome never performs navigation or analytics itself; it calls
//! through these traits. Both are synchronous and fire-and-forget: no
//! return value is consumed, nothing is retried.

use std::collections::HashMap;

/// Client-side navigation, injected by the host.
pub trait NavigationResolver {
    /// Navigate to the given path.
    fn navigate(&mut self, path: &str);
}

/// Analytics dispatch, injected by the host.
pub trait AnalyticsSink {
    /// Report a selection. Fire-and-forget.
    fn notify(&mut self, destination: &str, event_name: &str, metadata: &HashMap<String, String>);
}

/// A resolver/sink that does nothing, for hosts without routing or
/// analytics wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDispatch;

impl NavigationResolver for NullDispatch {
    fn navigate(&mut self, _path: &str) {}
}

impl AnalyticsSink for NullDispatch {
    fn notify(
        &mut self,
        _destination: &str,
        _event_name: &str,
        _metadata: &HashMap<String, String>,
    ) {
    }
}

#[cfg(any(test, feature = "test-helpers"))]
pub use recording::RecordingDispatch;

#[cfg(any(test, feature = "test-helpers"))]
mod recording {
    use super::{AnalyticsSink, NavigationResolver};
    use std::collections::HashMap;

    /// Records every call, for tests.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingDispatch {
        /// Paths navigated to, in order.
        pub navigations: Vec<String>,
        /// `(destination, event_name, metadata)` triples, in order.
        pub notifications: Vec<(String, String, HashMap<String, String>)>,
    }

    impl RecordingDispatch {
        /// Create an empty recorder.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl NavigationResolver for RecordingDispatch {
        fn navigate(&mut self, path: &str) {
            self.navigations.push(path.to_string());
        }
    }

    impl AnalyticsSink for RecordingDispatch {
        fn notify(
            &mut self,
            destination: &str,
            event_name: &str,
            metadata: &HashMap<String, String>,
        ) {
            self.notifications.push((
                destination.to_string(),
                event_name.to_string(),
                metadata.clone(),
            ));
        }
    }
}
