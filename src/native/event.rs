use crate::error::ScannerResult;
use crate::native::handle::CaptureHandle;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    PictureTaken,
    RectangleDetect,
    ProcessingChange,
}

impl EventName {
    pub const ALL: [EventName; 3] = [
        EventName::PictureTaken,
        EventName::RectangleDetect,
        EventName::ProcessingChange,
    ];

    /// Name the native side broadcasts this event under.
    pub fn bus_key(&self) -> &'static str {
        match self {
            EventName::PictureTaken => "onScanTaken",
            EventName::RectangleDetect => "onRectangleDetect",
            EventName::ProcessingChange => "onProcessingChange",
        }
    }

    pub fn from_bus_key(key: &str) -> Option<Self> {
        EventName::ALL.into_iter().find(|name| name.bus_key() == key)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventName::PictureTaken => "pictureTaken",
            EventName::RectangleDetect => "rectangleDetect",
            EventName::ProcessingChange => "processingChange",
        };
        f.write_str(name)
    }
}

/// Payload emitted by the native layer.
///
/// `target` is the session that produced the event, when the native side
/// reports it. Events without a target reach every listener of that name.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeEvent {
    pub target: Option<CaptureHandle>,
    pub body: serde_json::Value,
}

impl NativeEvent {
    pub fn new(target: Option<CaptureHandle>, body: serde_json::Value) -> Self {
        Self { target, body }
    }

    pub fn decode<T: DeserializeOwned>(&self) -> ScannerResult<T> {
        Ok(serde_json::from_value(self.body.clone())?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleCoordinates {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureTaken {
    pub cropped_image: String,
    pub initial_image: String,
    pub rectangle_coordinates: Option<RectangleCoordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleDetected {
    pub stable_counter: u32,
    pub last_detection_type: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingChanged {
    pub in_progress: bool,
}

/// Host callback for one event kind.
///
/// Equality is reference identity: two handlers are the same only when they
/// share the same allocation. Cloning keeps identity; wrapping the same
/// closure in a second `EventHandler::new` does not.
#[derive(Clone)]
pub struct EventHandler(Arc<dyn Fn(&NativeEvent) + Send + Sync>);

impl EventHandler {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&NativeEvent) + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    pub fn call(&self, event: &NativeEvent) {
        (self.0)(event)
    }
}

impl PartialEq for EventHandler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for EventHandler {}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventHandler({:p})", Arc::as_ptr(&self.0) as *const ())
    }
}
