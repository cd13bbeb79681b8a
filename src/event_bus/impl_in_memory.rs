use crate::event_bus::interface::EventBus;
use crate::native::event::{EventHandler, NativeEvent};
use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// In-process bus. Native threads post through `sender()`; the host thread
/// calls `pump()` to dispatch everything queued, in arrival order.
#[derive(Clone)]
pub struct EventBusInMemory {
    listeners: Arc<Mutex<HashMap<String, Vec<EventHandler>>>>,
    sender: Sender<(String, NativeEvent)>,
    receiver: Arc<Mutex<Receiver<(String, NativeEvent)>>>,
}

impl EventBusInMemory {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            listeners: Arc::new(Mutex::new(HashMap::new())),
            sender,
            receiver: Arc::new(Mutex::new(receiver)),
        }
    }

    pub fn sender(&self) -> Sender<(String, NativeEvent)> {
        self.sender.clone()
    }

    pub fn listener_count(&self, event_name: &str) -> usize {
        self.listeners
            .lock()
            .map(|listeners| listeners.get(event_name).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    /// Delivers `event` to every listener currently registered under
    /// `event_name`. The listener list is snapshotted first so a listener can
    /// add or remove listeners while being called.
    pub fn emit(&self, event_name: &str, event: &NativeEvent) {
        let snapshot = match self.listeners.lock() {
            Ok(listeners) => listeners.get(event_name).cloned().unwrap_or_default(),
            Err(_) => return,
        };
        for listener in snapshot {
            listener.call(event);
        }
    }

    /// Dispatches queued native events. Returns how many were dispatched.
    pub fn pump(&self) -> usize {
        let queued: Vec<(String, NativeEvent)> = match self.receiver.lock() {
            Ok(receiver) => receiver.try_iter().collect(),
            Err(_) => return 0,
        };
        let count = queued.len();
        for (event_name, event) in queued {
            self.emit(&event_name, &event);
        }
        count
    }
}

impl EventBus for EventBusInMemory {
    fn add_listener(&self, event_name: &str, listener: EventHandler) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners
                .entry(event_name.to_string())
                .or_default()
                .push(listener);
        }
    }

    fn remove_listener(&self, event_name: &str, listener: &EventHandler) {
        if let Ok(mut listeners) = self.listeners.lock() {
            if let Some(registered) = listeners.get_mut(event_name) {
                if let Some(index) = registered.iter().position(|l| l == listener) {
                    registered.remove(index);
                }
                if registered.is_empty() {
                    listeners.remove(event_name);
                }
            }
        }
    }
}
