//! Message schema and codec for the host–content channel.
//!
//! Messages travel as compact JSON text discriminated by a `type`
//! field. A message's field set is fixed by its discriminant; unknown
//! fields are ignored on decode and absent optional fields are omitted
//! on encode. Anything that fails to decode is dropped by the caller.

use serde::{Deserialize, Serialize};

/// One exchange on the channel. Constructed per round-trip, never
/// queued or retried by the bridge itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Message {
    /// Content asks where artifacts are being saved.
    AskFolder,

    /// Content hands over an encoded GIF for persistence.
    SaveGif {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base64: Option<String>,
    },

    /// Host announces the current save folder.
    SaveFolder { path: String },

    /// Host reports the outcome of a save request.
    SaveResult {
        ok: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

/// Serialize a message to its wire form.
pub fn encode(message: &Message) -> Result<String, serde_json::Error> {
    serde_json::to_string(message)
}

/// Parse one raw channel delivery.
///
/// Returns `None` for anything that is not a recognizable message —
/// unparseable text, a missing or unknown discriminant, wrong field
/// types. Callers treat `None` as "drop silently".
pub fn decode(raw: &str) -> Option<Message> {
    serde_json::from_str(raw).ok()
}
