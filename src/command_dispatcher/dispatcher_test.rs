#[cfg(test)]
mod tests {
    use crate::command_dispatcher::dispatcher::{on_image_picked, CommandDispatcher};
    use crate::config::Config;
    use crate::handle_registry::registry::HandleRegistry;
    use crate::library::logger::impl_console::LoggerConsole;
    use crate::library::logger::interface::Logger;
    use crate::native::event::PictureTaken;
    use crate::native::handle::{CaptureHandle, ViewRef};
    use crate::native::impl_fake::{HandleResolverFake, NativeCall, NativeScannerFake};
    use crate::scanner_config::model::RawScannerConfig;
    use crate::scanner_config::normalize::normalize;
    use std::sync::{Arc, Mutex};

    struct Setup {
        logger: Arc<dyn Logger + Send + Sync>,
        registry: HandleRegistry,
        native: Arc<NativeScannerFake>,
        dispatcher: CommandDispatcher,
    }

    fn setup() -> Setup {
        let config = Config::default();
        let logger: Arc<dyn Logger + Send + Sync> =
            Arc::new(LoggerConsole::new(config.logger_timezone));
        let registry = HandleRegistry::new(Arc::new(HandleResolverFake::new()));
        let native = Arc::new(NativeScannerFake::new(logger.clone()));
        let dispatcher = CommandDispatcher::new(registry.clone(), native.clone(), logger.clone());
        Setup {
            logger,
            registry,
            native,
            dispatcher,
        }
    }

    #[test]
    fn test_commands_without_handle_forward_nothing() {
        let s = setup();

        s.dispatcher.start();
        s.dispatcher.capture();
        s.dispatcher.stop();
        s.dispatcher
            .apply_configuration(&normalize(&RawScannerConfig::default()));

        assert!(s.native.calls().is_empty());
    }

    #[test]
    fn test_commands_forward_with_live_handle() {
        let s = setup();
        s.registry.attach(Some(&ViewRef::new(4)));

        s.dispatcher.start();
        s.dispatcher.capture();
        s.dispatcher.stop();

        let handle = CaptureHandle(1004);
        assert_eq!(
            s.native.calls(),
            vec![
                NativeCall::Start(handle),
                NativeCall::Capture(handle),
                NativeCall::Stop(handle),
            ]
        );
    }

    #[test]
    fn test_commands_after_detach_forward_nothing() {
        let s = setup();
        s.registry.attach(Some(&ViewRef::new(4)));
        s.dispatcher.start();

        s.registry.attach(None);
        s.dispatcher.capture();
        s.dispatcher.stop();

        assert_eq!(s.native.calls(), vec![NativeCall::Start(CaptureHandle(1004))]);
    }

    #[test]
    fn test_native_failure_is_absorbed() {
        let s = setup();
        s.registry.attach(Some(&ViewRef::new(9)));
        s.native.set_failing(true);

        s.dispatcher.capture();

        assert_eq!(s.native.calls(), vec![NativeCall::Capture(CaptureHandle(1009))]);
    }

    #[test]
    fn test_image_picked_without_any_mounted_scanner() {
        let s = setup();
        let result: Arc<Mutex<Option<serde_json::Value>>> = Arc::new(Mutex::new(None));
        let result_clone = result.clone();

        on_image_picked(
            s.native.as_ref(),
            s.logger.as_ref(),
            "content://gallery/42",
            Box::new(move |value| *result_clone.lock().unwrap() = Some(value)),
        );

        let value = result.lock().unwrap().clone().unwrap();
        let picture: PictureTaken = serde_json::from_value(value).unwrap();
        assert_eq!(picture.initial_image, "content://gallery/42");
        assert_eq!(
            s.native.calls(),
            vec![NativeCall::ProcessPickedImage("content://gallery/42".to_string())]
        );
    }
}
