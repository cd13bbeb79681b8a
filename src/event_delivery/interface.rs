use crate::native::event::{EventHandler, EventName};

/// How native events reach host handlers on this platform. Fixed for the
/// life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Native side broadcasts on a process-wide named bus.
    GlobalBus,
    /// Native view invokes its own per-instance callback props.
    DirectCallback,
}

impl DeliveryMode {
    pub fn for_platform() -> Self {
        if cfg!(target_os = "android") {
            DeliveryMode::GlobalBus
        } else {
            DeliveryMode::DirectCallback
        }
    }
}

pub trait EventDelivery: Send {
    fn mode(&self) -> DeliveryMode;
    fn subscribe(&mut self, event_name: EventName, handler: &EventHandler);
    fn unsubscribe(&mut self, event_name: EventName, handler: &EventHandler);
}
