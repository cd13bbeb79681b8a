use super::core::Effect;
use super::lifecycle::SubscriptionLifecycle;

impl SubscriptionLifecycle {
    pub(super) fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Subscribe(event_name, handler) => {
                self.delivery.subscribe(event_name, &handler);
            }
            Effect::Unsubscribe(event_name, handler) => {
                self.delivery.unsubscribe(event_name, &handler);
            }
        }
    }
}
