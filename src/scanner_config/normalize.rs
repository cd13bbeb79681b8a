use crate::scanner_config::model::{RawScannerConfig, ScannerConfiguration, NORMALIZED_PROPS};
use serde_json::{Map, Value};

pub const DEFAULT_QUALITY: f64 = 0.8;
pub const MIN_QUALITY: f64 = 0.1;
pub const MAX_QUALITY: f64 = 1.0;
pub const DEFAULT_BRIGHTNESS: f64 = 0.0;
pub const DEFAULT_SATURATION: f64 = 1.0;
pub const DEFAULT_CONTRAST: f64 = 1.0;
pub const DEFAULT_DETECTION_COUNT_BEFORE_CAPTURE: u32 = 5;
pub const DEFAULT_DURATION_BETWEEN_CAPTURES_MS: u64 = 0;
pub const DEFAULT_DETECTION_REFRESH_RATE_MS: u32 = 50;

/// Maps raw props to a fully defaulted configuration.
///
/// Total and pure: out-of-range values are clamped or replaced by the
/// default, never rejected. Call it again on every render. Saturation and
/// contrast treat 0 as unset. Props the normalizer does not own are carried
/// through as they are.
pub fn normalize(raw: &RawScannerConfig) -> ScannerConfiguration {
    ScannerConfiguration {
        quality: image_quality(raw.quality),
        use_front_cam: raw.use_front_cam.unwrap_or(false),
        brightness: finite_or(raw.brightness, DEFAULT_BRIGHTNESS),
        saturation: non_zero_or(raw.saturation, DEFAULT_SATURATION),
        contrast: non_zero_or(raw.contrast, DEFAULT_CONTRAST),
        detection_count_before_capture: positive_or(
            raw.detection_count_before_capture,
            DEFAULT_DETECTION_COUNT_BEFORE_CAPTURE,
        ),
        duration_between_captures: raw
            .duration_between_captures
            .map(|ms| ms.max(0) as u64)
            .unwrap_or(DEFAULT_DURATION_BETWEEN_CAPTURES_MS),
        detection_refresh_rate_in_ms: positive_or(
            raw.detection_refresh_rate_in_ms,
            DEFAULT_DETECTION_REFRESH_RATE_MS,
        ),
        extra: pass_through(&raw.extra),
    }
}

fn image_quality(quality: Option<f64>) -> f64 {
    match quality {
        Some(q) if !q.is_nan() => q.clamp(MIN_QUALITY, MAX_QUALITY),
        _ => DEFAULT_QUALITY,
    }
}

fn finite_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(default)
}

fn non_zero_or(value: Option<f64>, default: f64) -> f64 {
    finite_or(value.filter(|v| *v != 0.0), default)
}

fn pass_through(extra: &Map<String, Value>) -> Map<String, Value> {
    extra
        .iter()
        .filter(|(key, _)| !NORMALIZED_PROPS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn positive_or(value: Option<i64>, default: u32) -> u32 {
    match value {
        Some(v) if v > 0 => u32::try_from(v).unwrap_or(u32::MAX),
        _ => default,
    }
}
