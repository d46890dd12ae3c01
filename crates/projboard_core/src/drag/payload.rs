//! Drag transfer payload.
//!
//! # Responsibility
//! - Capture the dragged project id and pointer offset at drag start.
//! - Serialize to the JSON string stored as `text/plain` transfer data.
//!
//! # Invariants
//! - Wire keys stay `projectItemId` / `distanceBtwMouseAndProjectItemTop`
//!   so browser-side readers keep working.

use crate::model::project::ProjectId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Payload encode/decode errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// Transfer data was not a valid payload document.
    Malformed(String),
    /// Payload could not be serialized.
    Encode(String),
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(message) => write!(f, "malformed drag payload: {message}"),
            Self::Encode(message) => write!(f, "failed to encode drag payload: {message}"),
        }
    }
}

impl Error for PayloadError {}

/// Data carried from drag start to drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    #[serde(rename = "projectItemId")]
    pub project_id: ProjectId,
    /// `item_top - pointer_y` at drag start. Usually negative.
    #[serde(rename = "distanceBtwMouseAndProjectItemTop")]
    pub pointer_offset: f64,
}

impl DragPayload {
    /// Captures a payload for a drag that starts with the pointer at
    /// `pointer_y` over an item whose top edge is at `item_top`.
    pub fn capture(project_id: impl Into<ProjectId>, item_top: f64, pointer_y: f64) -> Self {
        Self {
            project_id: project_id.into(),
            pointer_offset: item_top - pointer_y,
        }
    }

    /// Estimated top edge of the dragged item when the pointer is at
    /// `pointer_y`.
    pub fn estimated_top(&self, pointer_y: f64) -> f64 {
        pointer_y + self.pointer_offset
    }

    pub fn encode(&self) -> Result<String, PayloadError> {
        serde_json::to_string(self).map_err(|err| PayloadError::Encode(err.to_string()))
    }

    pub fn decode(raw: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(raw).map_err(|err| PayloadError::Malformed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{DragPayload, PayloadError};

    #[test]
    fn capture_records_offset_from_pointer_to_item_top() {
        let payload = DragPayload::capture("p1", 200.0, 215.0);
        assert_eq!(payload.pointer_offset, -15.0);
        assert_eq!(payload.estimated_top(315.0), 300.0);
    }

    #[test]
    fn decode_reads_browser_wire_keys() {
        let raw = r#"{"projectItemId":"0.42","distanceBtwMouseAndProjectItemTop":-8.5}"#;
        let payload = DragPayload::decode(raw).unwrap();
        assert_eq!(payload.project_id, "0.42");
        assert_eq!(payload.pointer_offset, -8.5);
    }

    #[test]
    fn encode_uses_browser_wire_keys() {
        let encoded = DragPayload::capture("p1", 10.0, 12.0).encode().unwrap();
        assert!(encoded.contains("\"projectItemId\":\"p1\""));
        assert!(encoded.contains("\"distanceBtwMouseAndProjectItemTop\":-2.0"));
    }

    #[test]
    fn decode_rejects_missing_fields() {
        let err = DragPayload::decode(r#"{"projectItemId":"p1"}"#).unwrap_err();
        assert!(matches!(err, PayloadError::Malformed(_)));
    }
}
