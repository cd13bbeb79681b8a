pub mod command_dispatcher;
pub mod config;
pub mod error;
pub mod event_bus;
pub mod event_delivery;
pub mod handle_registry;
pub mod library;
pub mod native;
pub mod scanner;
pub mod scanner_config;
pub mod subscription;
