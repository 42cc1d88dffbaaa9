use line_diff::{DiffResult, LineDiffer};
use serde_json::json;

/// Error returned when the host does not pass exactly two strings
pub const ARGUMENT_ERROR: &str = "Expected 2 arguments: previous and new strings";

/// What the bridge hands back to the host for one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeResponse {
    /// A serialized diff result
    Json(String),

    /// A failure, reported to the host as `{"error": ...}`
    Error(String),
}

impl BridgeResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, BridgeResponse::Error(_))
    }

    /// The JSON text sent to the host
    pub fn into_json(self) -> String {
        match self {
            BridgeResponse::Json(json) => json,
            BridgeResponse::Error(message) => json!({ "error": message }).to_string(),
        }
    }
}

/// Diff the two strings passed by the host.
///
/// `args` must hold the previous text followed by the updated text.
pub fn call<S: AsRef<str>>(differ: &LineDiffer, args: &[S]) -> BridgeResponse {
    let [previous, updated] = args else {
        return BridgeResponse::Error(ARGUMENT_ERROR.to_string());
    };

    encode(&differ.diff(previous.as_ref(), updated.as_ref()))
}

/// Serialize a diff result for the host
pub fn encode(result: &DiffResult) -> BridgeResponse {
    match serde_json::to_string(result) {
        Ok(json) => BridgeResponse::Json(json),
        Err(e) => BridgeResponse::Error(format!("Failed to marshal result: {}", e)),
    }
}
