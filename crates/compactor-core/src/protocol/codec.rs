/// JSON codec for the message bridge.
///
/// Outbound commands always encode. Inbound payloads decode to
/// `Ok(Some(event))` for a known `type`, and to `Ok(None)` for a `type` this
/// build does not know. Unknown types deserialize to [`Event::Unknown`] and
/// are dropped here rather than reported.
use serde_json::Value;
use tracing::debug;

use super::{Command, Event};

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid message JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("message has no string `type` field")]
    MissingType,
}

/// Serialize a command into its wire payload.
pub fn encode(command: &Command) -> Result<String, CodecError> {
    Ok(serde_json::to_string(command)?)
}

/// Parse an inbound wire payload.
pub fn decode(payload: &str) -> Result<Option<Event>, CodecError> {
    let value: Value = serde_json::from_str(payload)?;
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(CodecError::MissingType)?;

    match serde_json::from_value(value)? {
        Event::Unknown => {
            debug!("Dropping unrecognized message type {kind:?}");
            Ok(None)
        }
        event => Ok(Some(event)),
    }
}

/// Serialize an event the way the backend sends it.
pub fn encode_event(event: &Event) -> Result<String, CodecError> {
    Ok(serde_json::to_string(event)?)
}

/// Parse a command payload the way the backend receives it.
pub fn decode_command(payload: &str) -> Result<Command, CodecError> {
    Ok(serde_json::from_str(payload)?)
}
