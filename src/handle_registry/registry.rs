use crate::native::handle::{CaptureHandle, ViewRef};
use crate::native::interface::HandleResolver;
use std::sync::{Arc, Mutex};

/// Tracks the native session handle of one mounted scanner.
///
/// Clones share state, so a delivery strategy can read the same handle the
/// instance writes. The registry only ever reflects the latest `attach`.
#[derive(Clone)]
pub struct HandleRegistry {
    resolver: Arc<dyn HandleResolver + Send + Sync>,
    handle: Arc<Mutex<Option<CaptureHandle>>>,
}

impl HandleRegistry {
    pub fn new(resolver: Arc<dyn HandleResolver + Send + Sync>) -> Self {
        Self {
            resolver,
            handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Stores the handle resolved from `view`, or clears it when the view is
    /// gone. A view that resolves to nothing also clears the handle.
    pub fn attach(&self, view: Option<&ViewRef>) {
        let resolved = view.and_then(|view| self.resolver.resolve(view));
        if let Ok(mut handle) = self.handle.lock() {
            *handle = resolved;
        }
    }

    pub fn current(&self) -> Option<CaptureHandle> {
        self.handle.lock().ok().and_then(|handle| *handle)
    }

    pub fn is_live(&self) -> bool {
        self.current().is_some()
    }
}
