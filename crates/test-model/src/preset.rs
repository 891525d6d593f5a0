use serde::{Deserialize, Serialize};
use stepchat_model::ModelResponse;

/// The kind of a preset failure, mirroring
/// [`ErrorKind`](stepchat_model::ErrorKind).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetFailure {
    Authentication,
    RateLimitExceeded,
    Connection,
    Api,
}

/// The preset outcome for one request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetResponse {
    #[serde(rename = "reply")]
    Reply(ModelResponse),
    #[serde(rename = "failure")]
    Failure(PresetFailure),
}

impl PresetResponse {
    /// Creates a successful reply with the specified text.
    #[inline]
    pub fn with_content<S: Into<String>>(content: S) -> Self {
        Self::Reply(ModelResponse::with_content(content))
    }
}
