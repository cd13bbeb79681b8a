use crate::error::ScannerResult;
use crate::native::handle::{CaptureHandle, ViewRef};
use crate::scanner_config::model::ScannerConfiguration;

pub type PickedImageCallback = Box<dyn FnOnce(serde_json::Value) + Send>;

/// Turns a view reference into the handle of its native session.
pub trait HandleResolver: Send + Sync {
    fn resolve(&self, view: &ViewRef) -> Option<CaptureHandle>;
}

/// Command sink of the native scanner module.
pub trait NativeScanner: Send + Sync {
    fn start(&self, handle: CaptureHandle) -> ScannerResult<()>;
    fn stop(&self, handle: CaptureHandle) -> ScannerResult<()>;
    fn capture(&self, handle: CaptureHandle) -> ScannerResult<()>;
    fn apply_configuration(
        &self,
        handle: CaptureHandle,
        configuration: &ScannerConfiguration,
    ) -> ScannerResult<()>;
    fn process_picked_image(&self, image_uri: &str, callback: PickedImageCallback)
        -> ScannerResult<()>;
}
