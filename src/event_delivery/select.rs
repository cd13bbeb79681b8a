use crate::event_bus::interface::EventBus;
use crate::event_delivery::impl_direct_callback::DirectCallbackDelivery;
use crate::event_delivery::impl_global_bus::GlobalBusDelivery;
use crate::event_delivery::interface::{DeliveryMode, EventDelivery};
use crate::handle_registry::registry::HandleRegistry;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

pub fn delivery_for(
    mode: DeliveryMode,
    bus: Arc<dyn EventBus + Send + Sync>,
    registry: HandleRegistry,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Box<dyn EventDelivery> {
    match mode {
        DeliveryMode::GlobalBus => Box::new(GlobalBusDelivery::new(bus, registry, logger)),
        DeliveryMode::DirectCallback => Box::new(DirectCallbackDelivery::new(logger)),
    }
}
