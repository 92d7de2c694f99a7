//! Webcam snapshot attached to an attendance action.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A picture of the employee taken by the webcam at check-in or check-out.
///
/// The image is kept as base64 text, which is how browsers hand over
/// canvas captures and how hosts usually store binary fields. The bytes are
/// never interpreted as an image format by this crate.
///
/// # Example
///
/// ```
/// use attendance_hour_type::models::Snapshot;
///
/// let snapshot = Snapshot::from_bytes(b"\x89PNG");
/// assert_eq!(snapshot.as_base64(), "iVBORw==");
/// assert_eq!(snapshot.to_bytes().unwrap(), b"\x89PNG");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Snapshot(String);

impl TryFrom<String> for Snapshot {
    type Error = EngineError;

    fn try_from(encoded: String) -> EngineResult<Self> {
        Self::from_base64(&encoded)
    }
}

impl From<Snapshot> for String {
    fn from(snapshot: Snapshot) -> Self {
        snapshot.0
    }
}

impl Snapshot {
    /// Encodes raw image bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(STANDARD.encode(bytes))
    }

    /// Wraps base64 text, rejecting anything that does not decode.
    ///
    /// Accepts an optional `data:<mime>;base64,` prefix as produced by
    /// `canvas.toDataURL()`.
    pub fn from_base64(encoded: &str) -> EngineResult<Self> {
        let payload = match encoded.split_once(";base64,") {
            Some((prefix, data)) if prefix.starts_with("data:") => data,
            _ => encoded,
        };
        let payload = payload.trim();
        if payload.is_empty() {
            return Err(EngineError::InvalidSnapshot {
                message: "image data is empty".to_string(),
            });
        }
        STANDARD
            .decode(payload)
            .map_err(|e| EngineError::InvalidSnapshot {
                message: e.to_string(),
            })?;
        Ok(Self(payload.to_string()))
    }

    /// Returns the base64 text.
    pub fn as_base64(&self) -> &str {
        &self.0
    }

    /// Decodes the image bytes.
    pub fn to_bytes(&self) -> EngineResult<Vec<u8>> {
        STANDARD
            .decode(&self.0)
            .map_err(|e| EngineError::InvalidSnapshot {
                message: e.to_string(),
            })
    }
}
