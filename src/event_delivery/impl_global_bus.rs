use crate::event_bus::interface::EventBus;
use crate::event_delivery::interface::{DeliveryMode, EventDelivery};
use crate::handle_registry::registry::HandleRegistry;
use crate::library::logger::interface::Logger;
use crate::native::event::{EventHandler, EventName};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

struct Registration {
    handler: EventHandler,
    listener: EventHandler,
    active: Arc<AtomicBool>,
}

/// Subscribes host handlers on the shared bus, one registration per event
/// name for this instance.
///
/// The bus is not instance-scoped, so every handler is wrapped in a listener
/// that drops events targeted at another session's handle. Untargeted events
/// are delivered to every instance.
pub struct GlobalBusDelivery {
    bus: Arc<dyn EventBus + Send + Sync>,
    registry: HandleRegistry,
    logger: Arc<dyn Logger + Send + Sync>,
    registrations: HashMap<EventName, Registration>,
}

impl GlobalBusDelivery {
    pub fn new(
        bus: Arc<dyn EventBus + Send + Sync>,
        registry: HandleRegistry,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            bus,
            registry,
            logger: logger.with_namespace("delivery").with_namespace("bus"),
            registrations: HashMap::new(),
        }
    }

    fn listener_for(&self, handler: &EventHandler, active: Arc<AtomicBool>) -> EventHandler {
        let registry = self.registry.clone();
        let handler = handler.clone();
        EventHandler::new(move |event| {
            if !active.load(Ordering::SeqCst) {
                return;
            }
            if let Some(target) = event.target {
                if registry.current() != Some(target) {
                    return;
                }
            }
            handler.call(event);
        })
    }

    fn retire(&mut self, event_name: EventName) {
        if let Some(registration) = self.registrations.remove(&event_name) {
            registration.active.store(false, Ordering::SeqCst);
            self.bus
                .remove_listener(event_name.bus_key(), &registration.listener);
        }
    }
}

impl EventDelivery for GlobalBusDelivery {
    fn mode(&self) -> DeliveryMode {
        DeliveryMode::GlobalBus
    }

    fn subscribe(&mut self, event_name: EventName, handler: &EventHandler) {
        if self.registrations.contains_key(&event_name) {
            let _ = self.logger.warn(&format!(
                "{} already subscribed, retiring previous listener",
                event_name
            ));
            self.retire(event_name);
        }

        let active = Arc::new(AtomicBool::new(true));
        let listener = self.listener_for(handler, active.clone());
        self.bus.add_listener(event_name.bus_key(), listener.clone());
        self.registrations.insert(
            event_name,
            Registration {
                handler: handler.clone(),
                listener,
                active,
            },
        );
        let _ = self
            .logger
            .info(&format!("addListener {}", event_name.bus_key()));
    }

    fn unsubscribe(&mut self, event_name: EventName, handler: &EventHandler) {
        let matches = self
            .registrations
            .get(&event_name)
            .map(|registration| registration.handler == *handler);

        match matches {
            Some(true) => {
                self.retire(event_name);
                let _ = self
                    .logger
                    .info(&format!("removeListener {}", event_name.bus_key()));
            }
            Some(false) => {
                let _ = self.logger.warn(&format!(
                    "{} unsubscribe with a handler that is not subscribed",
                    event_name
                ));
            }
            None => {}
        }
    }
}

impl Drop for GlobalBusDelivery {
    fn drop(&mut self) {
        let names: Vec<EventName> = self.registrations.keys().copied().collect();
        for event_name in names {
            self.retire(event_name);
        }
    }
}
