use crate::error::{ScannerError, ScannerResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Host prop names owned by the normalizer.
pub const NORMALIZED_PROPS: [&str; 8] = [
    "quality",
    "useFrontCam",
    "brightness",
    "saturation",
    "contrast",
    "detectionCountBeforeCapture",
    "durationBetweenCaptures",
    "detectionRefreshRateInMS",
];

/// Host-supplied scanner props. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScannerConfig {
    pub quality: Option<f64>,
    pub use_front_cam: Option<bool>,
    pub brightness: Option<f64>,
    pub saturation: Option<f64>,
    pub contrast: Option<f64>,
    pub detection_count_before_capture: Option<i64>,
    pub duration_between_captures: Option<i64>,
    #[serde(rename = "detectionRefreshRateInMS")]
    pub detection_refresh_rate_in_ms: Option<i64>,
    /// Any other prop, forwarded to the native view untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawScannerConfig {
    pub fn from_json(json: &str) -> ScannerResult<Self> {
        serde_json::from_str(json).map_err(ScannerError::ConfigParse)
    }
}

/// Effective camera/detection parameters handed to the native view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannerConfiguration {
    pub quality: f64,
    pub use_front_cam: bool,
    pub brightness: f64,
    pub saturation: f64,
    pub contrast: f64,
    pub detection_count_before_capture: u32,
    /// Milliseconds.
    pub duration_between_captures: u64,
    #[serde(rename = "detectionRefreshRateInMS")]
    pub detection_refresh_rate_in_ms: u32,
    /// Pass-through props. Never holds a key from `NORMALIZED_PROPS`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScannerConfiguration {
    pub fn to_raw(&self) -> RawScannerConfig {
        RawScannerConfig {
            quality: Some(self.quality),
            use_front_cam: Some(self.use_front_cam),
            brightness: Some(self.brightness),
            saturation: Some(self.saturation),
            contrast: Some(self.contrast),
            detection_count_before_capture: Some(self.detection_count_before_capture as i64),
            duration_between_captures: Some(
                i64::try_from(self.duration_between_captures).unwrap_or(i64::MAX),
            ),
            detection_refresh_rate_in_ms: Some(self.detection_refresh_rate_in_ms as i64),
            extra: self.extra.clone(),
        }
    }
}
