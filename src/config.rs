use crate::event_delivery::interface::DeliveryMode;
use chrono::{Offset, Utc};

#[derive(Debug, Clone)]
pub struct Config {
    pub delivery_mode: DeliveryMode,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delivery_mode: DeliveryMode::for_platform(),
            logger_timezone: Utc.fix(),
        }
    }
}
