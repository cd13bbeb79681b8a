use crate::command_dispatcher::dispatcher::CommandDispatcher;
use crate::event_bus::interface::EventBus;
use crate::event_delivery::interface::DeliveryMode;
use crate::event_delivery::select::delivery_for;
use crate::handle_registry::registry::HandleRegistry;
use crate::library::logger::interface::Logger;
use crate::native::event::{EventName, NativeEvent};
use crate::native::handle::{CaptureHandle, ViewRef};
use crate::native::interface::{HandleResolver, NativeScanner};
use crate::scanner_config::model::{RawScannerConfig, ScannerConfiguration};
use crate::scanner_config::normalize::normalize;
use crate::subscription::core::EventHandlers;
use crate::subscription::lifecycle::SubscriptionLifecycle;
use std::sync::Arc;

/// Everything the host passes on one render.
#[derive(Debug, Clone, Default)]
pub struct ScannerProps {
    pub config: RawScannerConfig,
    pub handlers: EventHandlers,
}

/// One mounted document scanner.
///
/// Host-side lifecycle: `render` with props, hand over the view with
/// `set_view_ref`, then `mount`. Later renders reconcile subscriptions;
/// `unmount` retires them and forgets the handle.
pub struct DocumentScanner {
    logger: Arc<dyn Logger + Send + Sync>,
    registry: HandleRegistry,
    dispatcher: CommandDispatcher,
    subscriptions: SubscriptionLifecycle,
    handlers: EventHandlers,
    configuration: ScannerConfiguration,
}

impl DocumentScanner {
    pub fn new(
        mode: DeliveryMode,
        logger: Arc<dyn Logger + Send + Sync>,
        resolver: Arc<dyn HandleResolver + Send + Sync>,
        native: Arc<dyn NativeScanner + Send + Sync>,
        bus: Arc<dyn EventBus + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("scanner");
        let registry = HandleRegistry::new(resolver);
        let delivery = delivery_for(mode, bus, registry.clone(), logger.clone());

        Self {
            dispatcher: CommandDispatcher::new(registry.clone(), native, logger.clone()),
            subscriptions: SubscriptionLifecycle::new(delivery, logger.clone()),
            registry,
            handlers: EventHandlers::default(),
            configuration: normalize(&RawScannerConfig::default()),
            logger,
        }
    }

    pub fn render(&mut self, props: ScannerProps) -> ScannerConfiguration {
        self.configuration = normalize(&props.config);
        self.handlers = props.handlers;

        if self.subscriptions.is_mounted() {
            self.subscriptions.update(&self.handlers);
            self.dispatcher.apply_configuration(&self.configuration);
        }

        self.configuration.clone()
    }

    pub fn set_view_ref(&mut self, view: Option<ViewRef>) {
        self.registry.attach(view.as_ref());
        let _ = self
            .logger
            .info(&format!("view attached, handle {:?}", self.registry.current()));
    }

    pub fn mount(&mut self) {
        self.subscriptions.mount(&self.handlers);
        self.dispatcher.apply_configuration(&self.configuration);
    }

    pub fn unmount(&mut self) {
        self.subscriptions.unmount();
        self.registry.attach(None);
    }

    pub fn start(&self) {
        self.dispatcher.start();
    }

    pub fn stop(&self) {
        self.dispatcher.stop();
    }

    pub fn capture(&self) {
        self.dispatcher.capture();
    }

    /// Entry point for the native view's own callback props. Routes to the
    /// handler in the current props, looked up at delivery time.
    pub fn on_view_event(&self, event_name: EventName, event: &NativeEvent) {
        let Some(handle) = self.registry.current() else {
            return;
        };
        if event.target.is_some_and(|target| target != handle) {
            return;
        }
        if let Some(handler) = self.handlers.get(event_name) {
            handler.call(event);
        }
    }

    pub fn current_handle(&self) -> Option<CaptureHandle> {
        self.registry.current()
    }

    pub fn configuration(&self) -> &ScannerConfiguration {
        &self.configuration
    }

    pub fn is_mounted(&self) -> bool {
        self.subscriptions.is_mounted()
    }

    pub fn delivery_mode(&self) -> DeliveryMode {
        self.subscriptions.mode()
    }
}

impl Drop for DocumentScanner {
    fn drop(&mut self) {
        if self.subscriptions.is_mounted() {
            self.unmount();
        }
    }
}
