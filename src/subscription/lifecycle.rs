use crate::event_delivery::interface::{DeliveryMode, EventDelivery};
use crate::library::logger::interface::Logger;
use crate::native::event::EventName;
use crate::subscription::core::{init, transition, EventHandlers, Model, Msg, SubscriptionState};
use std::sync::Arc;

/// Keeps exactly the currently configured handlers subscribed across mount,
/// prop updates and unmount.
pub struct SubscriptionLifecycle {
    model: Model,
    pub(super) delivery: Box<dyn EventDelivery>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl SubscriptionLifecycle {
    pub fn new(delivery: Box<dyn EventDelivery>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            model: init(),
            delivery,
            logger: logger.with_namespace("subscriptions"),
        }
    }

    pub fn mount(&mut self, handlers: &EventHandlers) {
        self.send(Msg::Mount(handlers.clone()));
    }

    pub fn update(&mut self, handlers: &EventHandlers) {
        self.send(Msg::Update(handlers.clone()));
    }

    pub fn unmount(&mut self) {
        self.send(Msg::Unmount);
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.model, Model::Mounted(_))
    }

    pub fn state(&self, event_name: EventName) -> SubscriptionState {
        self.model.state(event_name)
    }

    pub fn mode(&self) -> DeliveryMode {
        self.delivery.mode()
    }

    fn send(&mut self, msg: Msg) {
        let model = std::mem::take(&mut self.model);
        let (model, effects) = transition(model, msg);
        self.model = model;

        if !effects.is_empty() {
            let _ = self
                .logger
                .info(&format!("effects: {:?}", effects));
        }
        self.run_effects(effects);
    }
}
