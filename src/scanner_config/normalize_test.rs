#[cfg(test)]
mod tests {
    use crate::error::ScannerError;
    use crate::scanner_config::model::RawScannerConfig;
    use crate::scanner_config::normalize::{normalize, DEFAULT_QUALITY};
    use serde_json::{json, Value};

    fn with_quality(quality: Option<f64>) -> RawScannerConfig {
        RawScannerConfig {
            quality,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_when_everything_absent() {
        let config = normalize(&RawScannerConfig::default());

        assert_eq!(config.quality, 0.8);
        assert!(!config.use_front_cam);
        assert_eq!(config.brightness, 0.0);
        assert_eq!(config.saturation, 1.0);
        assert_eq!(config.contrast, 1.0);
        assert_eq!(config.detection_count_before_capture, 5);
        assert_eq!(config.duration_between_captures, 0);
        assert_eq!(config.detection_refresh_rate_in_ms, 50);
    }

    #[test]
    fn test_quality_clamps_high_and_low() {
        assert_eq!(normalize(&with_quality(Some(1.5))).quality, 1.0);
        assert_eq!(normalize(&with_quality(Some(0.05))).quality, 0.1);
        assert_eq!(normalize(&with_quality(Some(0.42))).quality, 0.42);
        assert_eq!(normalize(&with_quality(Some(f64::INFINITY))).quality, 1.0);
        assert_eq!(normalize(&with_quality(Some(-3.0))).quality, 0.1);
    }

    #[test]
    fn test_quality_nan_is_treated_as_absent() {
        assert_eq!(normalize(&with_quality(Some(f64::NAN))).quality, DEFAULT_QUALITY);
    }

    #[test]
    fn test_quality_always_in_bounds_and_idempotent() {
        let samples = [
            None,
            Some(f64::NEG_INFINITY),
            Some(-1.0),
            Some(0.0),
            Some(0.1),
            Some(0.5),
            Some(0.99),
            Some(1.0),
            Some(1.0001),
            Some(250.0),
            Some(f64::NAN),
        ];

        for sample in samples {
            let once = normalize(&with_quality(sample));
            assert!((0.1..=1.0).contains(&once.quality), "{:?}", sample);

            let twice = normalize(&once.to_raw());
            assert_eq!(once, twice, "{:?}", sample);
        }
    }

    #[test]
    fn test_non_positive_counts_fall_back_to_defaults() {
        let config = normalize(&RawScannerConfig {
            detection_count_before_capture: Some(0),
            detection_refresh_rate_in_ms: Some(-10),
            duration_between_captures: Some(-200),
            ..Default::default()
        });

        assert_eq!(config.detection_count_before_capture, 5);
        assert_eq!(config.detection_refresh_rate_in_ms, 50);
        assert_eq!(config.duration_between_captures, 0);
    }

    #[test]
    fn test_supplied_values_pass_through() {
        let config = normalize(&RawScannerConfig {
            use_front_cam: Some(true),
            brightness: Some(0.3),
            saturation: Some(0.7),
            contrast: Some(1.4),
            detection_count_before_capture: Some(10),
            duration_between_captures: Some(1500),
            detection_refresh_rate_in_ms: Some(100),
            ..Default::default()
        });

        assert!(config.use_front_cam);
        assert_eq!(config.brightness, 0.3);
        assert_eq!(config.saturation, 0.7);
        assert_eq!(config.contrast, 1.4);
        assert_eq!(config.detection_count_before_capture, 10);
        assert_eq!(config.duration_between_captures, 1500);
        assert_eq!(config.detection_refresh_rate_in_ms, 100);
    }

    #[test]
    fn test_zero_saturation_and_contrast_mean_unset() {
        let config = normalize(&RawScannerConfig {
            brightness: Some(0.0),
            saturation: Some(0.0),
            contrast: Some(0.0),
            ..Default::default()
        });

        assert_eq!(config.brightness, 0.0);
        assert_eq!(config.saturation, 1.0);
        assert_eq!(config.contrast, 1.0);

        let negative = normalize(&RawScannerConfig {
            saturation: Some(-0.5),
            ..Default::default()
        });
        assert_eq!(negative.saturation, -0.5);
    }

    #[test]
    fn test_from_json_uses_host_field_names() {
        let raw = RawScannerConfig::from_json(
            r#"{"quality": 2, "useFrontCam": true, "detectionRefreshRateInMS": 75, "overlayColor": "blue"}"#,
        )
        .unwrap();

        let config = normalize(&raw);
        assert_eq!(config.quality, 1.0);
        assert!(config.use_front_cam);
        assert_eq!(config.detection_refresh_rate_in_ms, 75);
        assert_eq!(config.extra.get("overlayColor"), Some(&json!("blue")));
    }

    #[test]
    fn test_unknown_props_are_forwarded() {
        let raw = RawScannerConfig::from_json(
            r#"{"overlayColor": "blue", "enableTorch": true, "saturation": 0}"#,
        )
        .unwrap();
        assert!(!raw.extra.contains_key("saturation"));

        let json = serde_json::to_value(normalize(&raw)).unwrap();
        assert_eq!(json["overlayColor"], "blue");
        assert_eq!(json["enableTorch"], true);
        assert_eq!(json["saturation"], 1.0);
    }

    #[test]
    fn test_normalized_fields_win_over_extra_props() {
        let mut raw = RawScannerConfig {
            quality: Some(0.5),
            ..Default::default()
        };
        raw.extra.insert("quality".to_string(), json!(7));
        raw.extra.insert("manualOnly".to_string(), json!(true));

        let config = normalize(&raw);
        assert!(!config.extra.contains_key("quality"));
        assert_eq!(config.extra.get("manualOnly"), Some(&json!(true)));

        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(text.matches("\"quality\"").count(), 1);
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap()["quality"], 0.5);

        assert_eq!(normalize(&config.to_raw()), config);
    }

    #[test]
    fn test_from_json_rejects_wrong_types() {
        let err = RawScannerConfig::from_json(r#"{"quality": "high"}"#).unwrap_err();

        assert!(matches!(err, ScannerError::ConfigParse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_serializes_with_host_field_names() {
        let config = normalize(&RawScannerConfig::default());
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["useFrontCam"], false);
        assert_eq!(json["detectionCountBeforeCapture"], 5);
        assert_eq!(json["detectionRefreshRateInMS"], 50);
    }
}
