//! Error types for the native collaborator surface.
//!
//! None of these reach the host through the scanner commands; the dispatcher
//! logs and absorbs them. They surface only from the explicit parsing entry
//! points (`RawScannerConfig::from_json`, `NativeEvent::decode`).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScannerError {
    /// The native command surface rejected or failed a call
    #[error("Native scanner error: {0}")]
    Native(String),

    /// A native event payload did not match the expected shape
    #[error("Event payload decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Host props could not be parsed
    #[error("Invalid scanner props: {0}")]
    ConfigParse(#[source] serde_json::Error),
}

pub type ScannerResult<T> = Result<T, ScannerError>;
