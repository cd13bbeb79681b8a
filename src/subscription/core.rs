use crate::native::event::{EventHandler, EventName};

/// Handler props as supplied by the host on one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventHandlers {
    pub on_picture_taken: Option<EventHandler>,
    pub on_rectangle_detect: Option<EventHandler>,
    pub on_processing: Option<EventHandler>,
}

impl EventHandlers {
    pub fn get(&self, event_name: EventName) -> Option<&EventHandler> {
        match event_name {
            EventName::PictureTaken => self.on_picture_taken.as_ref(),
            EventName::RectangleDetect => self.on_rectangle_detect.as_ref(),
            EventName::ProcessingChange => self.on_processing.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubscriptionState {
    #[default]
    Unsubscribed,
    Subscribed(EventHandler),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subscriptions {
    pub picture_taken: SubscriptionState,
    pub rectangle_detect: SubscriptionState,
    pub processing_change: SubscriptionState,
}

impl Subscriptions {
    pub fn get(&self, event_name: EventName) -> &SubscriptionState {
        match event_name {
            EventName::PictureTaken => &self.picture_taken,
            EventName::RectangleDetect => &self.rectangle_detect,
            EventName::ProcessingChange => &self.processing_change,
        }
    }

    fn set(&mut self, event_name: EventName, state: SubscriptionState) {
        match event_name {
            EventName::PictureTaken => self.picture_taken = state,
            EventName::RectangleDetect => self.rectangle_detect = state,
            EventName::ProcessingChange => self.processing_change = state,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Model {
    #[default]
    Unmounted,
    Mounted(Subscriptions),
}

impl Model {
    pub fn state(&self, event_name: EventName) -> SubscriptionState {
        match self {
            Model::Unmounted => SubscriptionState::Unsubscribed,
            Model::Mounted(subscriptions) => subscriptions.get(event_name).clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    Mount(EventHandlers),
    Update(EventHandlers),
    Unmount,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Subscribe(EventName, EventHandler),
    Unsubscribe(EventName, EventHandler),
}

pub fn init() -> Model {
    Model::Unmounted
}

pub fn transition(model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match (model, msg) {
        (Model::Unmounted, Msg::Mount(handlers)) => {
            reconcile(Subscriptions::default(), &handlers)
        }
        // A second mount without an unmount reconciles like an update.
        (Model::Mounted(subscriptions), Msg::Mount(handlers))
        | (Model::Mounted(subscriptions), Msg::Update(handlers)) => {
            reconcile(subscriptions, &handlers)
        }
        (Model::Unmounted, Msg::Update(_)) => (Model::Unmounted, vec![]),
        (Model::Mounted(subscriptions), Msg::Unmount) => {
            let effects: Vec<Effect> = EventName::ALL
                .into_iter()
                .filter_map(|event_name| match subscriptions.get(event_name) {
                    SubscriptionState::Subscribed(handler) => {
                        Some(Effect::Unsubscribe(event_name, handler.clone()))
                    }
                    SubscriptionState::Unsubscribed => None,
                })
                .collect();
            (Model::Unmounted, effects)
        }
        (Model::Unmounted, Msg::Unmount) => (Model::Unmounted, vec![]),
    }
}

/// Brings every event kind in line with `handlers`. A kind is touched only
/// when its handler changed by identity; the old one is always retired
/// before the new one is added.
fn reconcile(mut subscriptions: Subscriptions, handlers: &EventHandlers) -> (Model, Vec<Effect>) {
    let mut effects = vec![];

    for event_name in EventName::ALL {
        let next = handlers.get(event_name);
        let unchanged = match (subscriptions.get(event_name), next) {
            (SubscriptionState::Subscribed(current), Some(next)) => current == next,
            (SubscriptionState::Unsubscribed, None) => true,
            _ => false,
        };
        if unchanged {
            continue;
        }

        if let SubscriptionState::Subscribed(current) = subscriptions.get(event_name) {
            effects.push(Effect::Unsubscribe(event_name, current.clone()));
        }
        match next {
            Some(handler) => {
                effects.push(Effect::Subscribe(event_name, handler.clone()));
                subscriptions.set(event_name, SubscriptionState::Subscribed(handler.clone()));
            }
            None => subscriptions.set(event_name, SubscriptionState::Unsubscribed),
        }
    }

    (Model::Mounted(subscriptions), effects)
}
