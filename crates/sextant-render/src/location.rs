//! Location boundary
//!
//! The fragment is the only piece of state the core persists; everything
//! else is derived from it.

use parking_lot::RwLock;
use std::sync::Arc;

/// Access to the location fragment and its change signal.
pub trait Location: Send + Sync {
    /// Current fragment, possibly with a leading `#`
    fn fragment(&self) -> String;

    /// Write the fragment (no leading `#`)
    fn set_fragment(&self, id: &str);

    /// Install the change listener. A single persistent subscription:
    /// a later call replaces the earlier listener.
    fn on_change(&self, listener: Box<dyn Fn() + Send + Sync>);
}

/// In-memory location for tests and headless embedders.
pub struct MemoryLocation {
    fragment: Arc<RwLock<String>>,
    listener: Arc<RwLock<Option<Arc<dyn Fn() + Send + Sync>>>>,
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self {
            fragment: Arc::new(RwLock::new(String::new())),
            listener: Arc::new(RwLock::new(None)),
        }
    }

    pub fn with_fragment(fragment: impl Into<String>) -> Self {
        let location = Self::new();
        *location.fragment.write() = fragment.into();
        location
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.fragment.read().clone()
    }

    fn set_fragment(&self, id: &str) {
        {
            let mut fragment = self.fragment.write();
            // Writing the value already present fires no change signal,
            // matching browser hashchange semantics
            if *fragment == id {
                return;
            }
            *fragment = id.to_string();
        }

        tracing::trace!(fragment = %id, "Fragment updated");

        // Notify with no lock held; the listener may read the fragment back
        let listener = self.listener.read().clone();
        if let Some(listener) = listener {
            listener();
        }
    }

    fn on_change(&self, listener: Box<dyn Fn() + Send + Sync>) {
        *self.listener.write() = Some(Arc::from(listener));
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryLocation {
    fn clone(&self) -> Self {
        Self {
            fragment: Arc::clone(&self.fragment),
            listener: Arc::clone(&self.listener),
        }
    }
}
