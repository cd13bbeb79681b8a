use crate::error::{ScannerError, ScannerResult};
use crate::library::logger::interface::Logger;
use crate::native::event::{
    EventName, NativeEvent, PictureTaken, Point, ProcessingChanged, RectangleCoordinates,
    RectangleDetected,
};
use crate::native::handle::{CaptureHandle, ViewRef};
use crate::native::interface::{HandleResolver, NativeScanner, PickedImageCallback};
use crate::scanner_config::model::ScannerConfiguration;
use rand::Rng;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

pub struct HandleResolverFake {
    dead_views: Mutex<HashSet<u64>>,
}

impl HandleResolverFake {
    pub fn new() -> Self {
        Self {
            dead_views: Mutex::new(HashSet::new()),
        }
    }

    /// Makes later resolutions of this view return no handle.
    pub fn kill_view(&self, view: &ViewRef) {
        if let Ok(mut dead) = self.dead_views.lock() {
            dead.insert(view.tag);
        }
    }
}

impl HandleResolver for HandleResolverFake {
    fn resolve(&self, view: &ViewRef) -> Option<CaptureHandle> {
        let dead = self.dead_views.lock().ok()?;
        if dead.contains(&view.tag) {
            return None;
        }
        Some(CaptureHandle(1000 + view.tag))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NativeCall {
    Start(CaptureHandle),
    Stop(CaptureHandle),
    Capture(CaptureHandle),
    ApplyConfiguration(CaptureHandle, ScannerConfiguration),
    ProcessPickedImage(String),
}

pub struct NativeScannerFake {
    logger: Arc<dyn Logger + Send + Sync>,
    calls: Mutex<Vec<NativeCall>>,
    failing: AtomicBool,
    event_sink: Option<Sender<(String, NativeEvent)>>,
}

impl NativeScannerFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("native").with_namespace("fake"),
            calls: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
            event_sink: None,
        }
    }

    /// Events produced by `start` and `capture` are sent here, keyed by bus
    /// name.
    pub fn with_event_sink(mut self, sink: Sender<(String, NativeEvent)>) -> Self {
        self.event_sink = Some(sink);
        self
    }

    pub fn calls(&self) -> Vec<NativeCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn record(&self, call: NativeCall) -> ScannerResult<()> {
        let _ = self.logger.info(&format!("{:?}", call));
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ScannerError::Native("fake scanner is failing".to_string()));
        }
        Ok(())
    }

    fn emit(&self, name: EventName, handle: CaptureHandle, body: serde_json::Value) {
        if let Some(sink) = &self.event_sink {
            let _ = sink.send((name.bus_key().to_string(), NativeEvent::new(Some(handle), body)));
        }
    }

    fn random_rectangle() -> RectangleCoordinates {
        let mut rng = rand::rng();
        let mut point = |x: f64, y: f64| Point {
            x: x + rng.random_range(-10.0..10.0),
            y: y + rng.random_range(-10.0..10.0),
        };
        RectangleCoordinates {
            top_left: point(40.0, 60.0),
            top_right: point(680.0, 60.0),
            bottom_left: point(40.0, 1180.0),
            bottom_right: point(680.0, 1180.0),
        }
    }
}

impl NativeScanner for NativeScannerFake {
    fn start(&self, handle: CaptureHandle) -> ScannerResult<()> {
        self.record(NativeCall::Start(handle))?;

        let detected = RectangleDetected {
            stable_counter: rand::rng().random_range(0..5),
            last_detection_type: 0,
        };
        self.emit(EventName::RectangleDetect, handle, serde_json::to_value(detected)?);
        Ok(())
    }

    fn stop(&self, handle: CaptureHandle) -> ScannerResult<()> {
        self.record(NativeCall::Stop(handle))
    }

    fn capture(&self, handle: CaptureHandle) -> ScannerResult<()> {
        self.record(NativeCall::Capture(handle))?;

        let picture = PictureTaken {
            cropped_image: format!("file:///tmp/scan-{}-cropped.jpg", handle.0),
            initial_image: format!("file:///tmp/scan-{}-initial.jpg", handle.0),
            rectangle_coordinates: Some(Self::random_rectangle()),
        };

        let started = serde_json::to_value(ProcessingChanged { in_progress: true })?;
        let finished = serde_json::to_value(ProcessingChanged { in_progress: false })?;
        self.emit(EventName::ProcessingChange, handle, started);
        self.emit(EventName::PictureTaken, handle, serde_json::to_value(picture)?);
        self.emit(EventName::ProcessingChange, handle, finished);
        Ok(())
    }

    fn apply_configuration(
        &self,
        handle: CaptureHandle,
        configuration: &ScannerConfiguration,
    ) -> ScannerResult<()> {
        self.record(NativeCall::ApplyConfiguration(handle, configuration.clone()))
    }

    fn process_picked_image(
        &self,
        image_uri: &str,
        callback: PickedImageCallback,
    ) -> ScannerResult<()> {
        self.record(NativeCall::ProcessPickedImage(image_uri.to_string()))?;
        let result = serde_json::to_value(PictureTaken {
            cropped_image: format!("{}#cropped", image_uri),
            initial_image: image_uri.to_string(),
            rectangle_coordinates: None,
        })?;
        callback(result);
        Ok(())
    }
}
