//! Diagnostic sink
//!
//! Every mock invocation reports "plugin unavailable" through a
//! [`DiagnosticSink`]. The default sink emits one `tracing` line per call,
//! which is the most informative behavior for debugging a degraded guest.
//! Guests that hammer a mock in a tight loop can wrap any sink in
//! [`OncePerPlugin`] to cap output at one line per plugin family.
//!
//! A sink failing to emit (no subscriber installed, line filtered out) never
//! changes the status code the guest sees.

use parking_lot::Mutex;
use tracing::warn;

use crate::descriptor::PluginFamily;

/// Receiver for "mock plugin invoked" notices.
///
/// Implementations must tolerate concurrent emission; mocks may be called
/// from any number of guest threads at once.
pub trait DiagnosticSink: Send + Sync {
    /// Record that a mock belonging to `family` was invoked.
    fn plugin_unavailable(&self, family: PluginFamily);
}

/// Default sink: one `warn!` line per invocation.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn plugin_unavailable(&self, family: PluginFamily) {
        warn!(
            "{} plugin is not loaded; mock host function returned unavailable. \
             Install the plugin to enable this API.",
            family
        );
    }
}

/// Rate-limiting wrapper: forwards the first notice per plugin family and
/// swallows the rest for the life of the process.
pub struct OncePerPlugin<S> {
    inner: S,
    seen: Mutex<Vec<PluginFamily>>,
}

impl<S: DiagnosticSink> OncePerPlugin<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl<S: DiagnosticSink> DiagnosticSink for OncePerPlugin<S> {
    fn plugin_unavailable(&self, family: PluginFamily) {
        {
            let mut seen = self.seen.lock();
            if seen.contains(&family) {
                return;
            }
            seen.push(family);
        }
        self.inner.plugin_unavailable(family);
    }
}
