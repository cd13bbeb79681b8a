use crate::native::event::EventHandler;

/// Process-wide named broadcast channel provided by the platform.
///
/// Not scoped to any scanner instance and never cleans up on its own.
pub trait EventBus: Send + Sync {
    fn add_listener(&self, event_name: &str, listener: EventHandler);
    /// Removes one registration of `listener`, compared by identity.
    fn remove_listener(&self, event_name: &str, listener: &EventHandler);
}
