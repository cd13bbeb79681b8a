use crate::event_delivery::interface::{DeliveryMode, EventDelivery};
use crate::native::event::{EventHandler, EventName};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryCall {
    Subscribe(EventName, EventHandler),
    Unsubscribe(EventName, EventHandler),
}

/// Records every subscribe/unsubscribe. Clones share the same log.
#[derive(Clone)]
pub struct EventDeliveryFake {
    mode: DeliveryMode,
    calls: Arc<Mutex<Vec<DeliveryCall>>>,
}

impl EventDeliveryFake {
    pub fn new(mode: DeliveryMode) -> Self {
        Self {
            mode,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<DeliveryCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn calls_for(&self, event_name: EventName) -> Vec<DeliveryCall> {
        self.calls()
            .into_iter()
            .filter(|call| match call {
                DeliveryCall::Subscribe(name, _) | DeliveryCall::Unsubscribe(name, _) => {
                    *name == event_name
                }
            })
            .collect()
    }

    /// Subscribes minus unsubscribes for one event name.
    pub fn net_subscriptions(&self, event_name: EventName) -> i64 {
        self.calls_for(event_name)
            .iter()
            .map(|call| match call {
                DeliveryCall::Subscribe(..) => 1,
                DeliveryCall::Unsubscribe(..) => -1,
            })
            .sum()
    }

    fn record(&self, call: DeliveryCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl EventDelivery for EventDeliveryFake {
    fn mode(&self) -> DeliveryMode {
        self.mode
    }

    fn subscribe(&mut self, event_name: EventName, handler: &EventHandler) {
        self.record(DeliveryCall::Subscribe(event_name, handler.clone()));
    }

    fn unsubscribe(&mut self, event_name: EventName, handler: &EventHandler) {
        self.record(DeliveryCall::Unsubscribe(event_name, handler.clone()));
    }
}
