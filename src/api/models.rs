use serde::Serialize;

/// Caller-facing failure payload. Delivered with a 200 status; callers
/// distinguish success from failure by the presence of the `error` field.
#[derive(Debug, Serialize)]
pub struct RelayFailure {
    pub error: String,
    /// Raw upstream body text, present only when the upstream itself answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}
