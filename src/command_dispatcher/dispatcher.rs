use crate::error::ScannerResult;
use crate::handle_registry::registry::HandleRegistry;
use crate::library::logger::interface::Logger;
use crate::native::handle::CaptureHandle;
use crate::native::interface::{NativeScanner, PickedImageCallback};
use crate::scanner_config::model::ScannerConfiguration;
use std::sync::Arc;

/// Forwards imperative commands to the live native session.
///
/// Every command is fire-and-forget: without a live handle it does nothing,
/// and native failures are logged and dropped.
pub struct CommandDispatcher {
    registry: HandleRegistry,
    native: Arc<dyn NativeScanner + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl CommandDispatcher {
    pub fn new(
        registry: HandleRegistry,
        native: Arc<dyn NativeScanner + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            registry,
            native,
            logger: logger.with_namespace("commands"),
        }
    }

    pub fn start(&self) {
        self.forward("start", |native, handle| native.start(handle));
    }

    pub fn stop(&self) {
        self.forward("stop", |native, handle| native.stop(handle));
    }

    pub fn capture(&self) {
        self.forward("capture", |native, handle| native.capture(handle));
    }

    pub fn apply_configuration(&self, configuration: &ScannerConfiguration) {
        self.forward("apply_configuration", |native, handle| {
            native.apply_configuration(handle, configuration)
        });
    }

    fn forward<F>(&self, command: &str, send: F)
    where
        F: FnOnce(&(dyn NativeScanner + Send + Sync), CaptureHandle) -> ScannerResult<()>,
    {
        let Some(handle) = self.registry.current() else {
            let _ = self
                .logger
                .info(&format!("{} skipped, no live scanner", command));
            return;
        };

        if let Err(e) = send(self.native.as_ref(), handle) {
            let _ = self
                .logger
                .warn(&format!("{} on {:?} failed: {}", command, handle, e));
        }
    }
}

/// Hands a gallery image to the native processing pipeline. Not tied to any
/// mounted scanner.
pub fn on_image_picked(
    native: &dyn NativeScanner,
    logger: &dyn Logger,
    image_uri: &str,
    callback: PickedImageCallback,
) {
    if let Err(e) = native.process_picked_image(image_uri, callback) {
        let _ = logger.warn(&format!("processPickedImage {} failed: {}", image_uri, e));
    }
}
