use doc_scanner_bridge::command_dispatcher::dispatcher::on_image_picked;
use doc_scanner_bridge::config::Config;
use doc_scanner_bridge::event_bus::impl_in_memory::EventBusInMemory;
use doc_scanner_bridge::event_delivery::interface::DeliveryMode;
use doc_scanner_bridge::library::logger::impl_console::LoggerConsole;
use doc_scanner_bridge::library::logger::interface::Logger;
use doc_scanner_bridge::native::event::{
    EventHandler, EventName, PictureTaken, ProcessingChanged, RectangleDetected,
};
use doc_scanner_bridge::native::handle::ViewRef;
use doc_scanner_bridge::native::impl_fake::{HandleResolverFake, NativeScannerFake};
use doc_scanner_bridge::scanner::document_scanner::{DocumentScanner, ScannerProps};
use doc_scanner_bridge::scanner_config::model::RawScannerConfig;
use doc_scanner_bridge::subscription::core::EventHandlers;
use std::sync::mpsc::channel;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let bus = EventBusInMemory::new();

    let (view_events, view_events_rx) = channel();

    let event_sink = match config.delivery_mode {
        DeliveryMode::GlobalBus => bus.sender(),
        DeliveryMode::DirectCallback => view_events,
    };

    let native = Arc::new(NativeScannerFake::new(logger.clone()).with_event_sink(event_sink));

    let mut scanner = DocumentScanner::new(
        config.delivery_mode,
        logger.clone(),
        Arc::new(HandleResolverFake::new()),
        native.clone(),
        Arc::new(bus.clone()),
    );

    let app_logger = logger.with_namespace("app");
    let _ = app_logger.info(&format!("event delivery: {:?}", scanner.delivery_mode()));

    let on_picture_taken = {
        let logger = app_logger.clone();
        EventHandler::new(move |event| match event.decode::<PictureTaken>() {
            Ok(picture) => {
                let _ = logger.info(&format!("picture taken: {}", picture.cropped_image));
            }
            Err(e) => {
                let _ = logger.warn(&format!("unexpected picture payload: {}", e));
            }
        })
    };

    let on_processing = {
        let logger = app_logger.clone();
        EventHandler::new(move |event| {
            if let Ok(change) = event.decode::<ProcessingChanged>() {
                let _ = logger.info(&format!("processing: {}", change.in_progress));
            }
        })
    };

    let on_rectangle_detect = {
        let logger = app_logger.clone();
        EventHandler::new(move |event| {
            if let Ok(detected) = event.decode::<RectangleDetected>() {
                let _ = logger.info(&format!(
                    "rectangle detected: stable for {} frames",
                    detected.stable_counter
                ));
            }
        })
    };

    let props = ScannerProps {
        config: RawScannerConfig::from_json(
            r#"{"quality": 0.6, "detectionCountBeforeCapture": 8, "overlayColor": "blue"}"#,
        )?,
        handlers: EventHandlers {
            on_picture_taken: Some(on_picture_taken),
            on_rectangle_detect: Some(on_rectangle_detect),
            on_processing: Some(on_processing),
        },
    };

    let configuration = scanner.render(props);
    let _ = app_logger.info(&format!("effective configuration: {:?}", configuration));

    scanner.set_view_ref(Some(ViewRef::new(1)));
    scanner.mount();
    scanner.start();
    scanner.capture();

    bus.pump();
    for (key, event) in view_events_rx.try_iter() {
        if let Some(event_name) = EventName::from_bus_key(&key) {
            scanner.on_view_event(event_name, &event);
        }
    }

    scanner.stop();
    scanner.unmount();

    // No scanner is live any more; this must not reach the native side.
    scanner.capture();

    let picked_logger = app_logger.clone();
    on_image_picked(
        native.as_ref(),
        app_logger.as_ref(),
        "content://media/external/images/1",
        Box::new(move |result| {
            let _ = picked_logger.info(&format!("picked image processed: {}", result));
        }),
    );

    Ok(())
}
