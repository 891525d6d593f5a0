use serde::{Deserialize, Serialize};

/// The reason why a model response has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelFinishReason {
    /// The model has finished generating text.
    Stop,
    /// The output was cut off by the token limit.
    Length,
    /// The content is moderated.
    ContentFilter,
    /// Any reason this crate doesn't know about.
    Other,
}

impl ModelFinishReason {
    /// Maps the wire value of `finish_reason` to a reason.
    #[inline]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "stop" => ModelFinishReason::Stop,
            "length" => ModelFinishReason::Length,
            "content_filter" => ModelFinishReason::ContentFilter,
            _ => ModelFinishReason::Other,
        }
    }
}

/// A complete reply from the model provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelResponse {
    /// The generated text.
    pub content: String,
    /// The separate reasoning trace, for models that produce one.
    pub reasoning_content: Option<String>,
    /// The reason the model finished generating.
    pub finish_reason: Option<ModelFinishReason>,
}

impl ModelResponse {
    /// Creates a response with only the generated text.
    #[inline]
    pub fn with_content<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            reasoning_content: None,
            finish_reason: Some(ModelFinishReason::Stop),
        }
    }
}
