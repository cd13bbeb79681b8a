use crate::event_delivery::interface::{DeliveryMode, EventDelivery};
use crate::library::logger::interface::Logger;
use crate::native::event::{EventHandler, EventName};
use std::sync::Arc;

/// The native view calls back into the instance, which looks up the handler
/// in its current props at delivery time. Nothing to add or remove here.
pub struct DirectCallbackDelivery {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DirectCallbackDelivery {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("delivery").with_namespace("direct"),
        }
    }
}

impl EventDelivery for DirectCallbackDelivery {
    fn mode(&self) -> DeliveryMode {
        DeliveryMode::DirectCallback
    }

    fn subscribe(&mut self, event_name: EventName, _handler: &EventHandler) {
        let _ = self
            .logger
            .info(&format!("{} bound through view props", event_name));
    }

    fn unsubscribe(&mut self, event_name: EventName, _handler: &EventHandler) {
        let _ = self
            .logger
            .info(&format!("{} unbound through view props", event_name));
    }
}
