use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use stepchat_model::{
    ModelFinishReason, ModelMessage, ModelRequest, ModelResponse,
};

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ChatCompletion {
    pub id: String,
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    pub finish_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
    pub reasoning_content: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    System { content: String },
    User { content: String },
    Assistant { content: String },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
    #[serde(flatten)]
    options: Map<String, Value>,
}

/// Keys owned by the request itself; pass-through options can't override
/// them.
const RESERVED_KEYS: [&str; 3] = ["model", "messages", "stream"];

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(req: &ModelRequest) -> ChatCompletionRequest {
    let options = req
        .options
        .iter()
        .filter(|(key, _)| {
            let reserved = RESERVED_KEYS.contains(&key.as_str());
            if reserved {
                warn!("ignoring reserved option `{key}`");
            }
            !reserved
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    ChatCompletionRequest {
        model: req.model.clone(),
        messages: req.messages.iter().map(create_message).collect(),
        stream: false,
        options,
    }
}

#[inline]
fn create_message(msg: &ModelMessage) -> Message {
    match msg {
        ModelMessage::System(content) => Message::System {
            content: content.clone(),
        },
        ModelMessage::User(content) => Message::User {
            content: content.clone(),
        },
        ModelMessage::Assistant(content) => Message::Assistant {
            content: content.clone(),
        },
    }
}

/// Takes the first choice out of a completion, or `None` if the server
/// returned no choices at all.
pub fn into_model_response(
    mut completion: ChatCompletion,
) -> Option<ModelResponse> {
    if let Some(usage) = completion.usage {
        debug!(
            id = %completion.id,
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            total_tokens = usage.total_tokens,
            "token usage"
        );
    }
    if completion.choices.is_empty() {
        return None;
    }
    let choice = completion.choices.swap_remove(0);
    Some(ModelResponse {
        content: choice.message.content.unwrap_or_default(),
        reasoning_content: choice.message.reasoning_content,
        finish_reason: choice
            .finish_reason
            .as_deref()
            .map(ModelFinishReason::from_wire),
    })
}

/// Extracts the human-readable message from an error body, falling back to
/// the raw body text.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.trim().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_request() {
        let mut options = Map::new();
        options.insert("temperature".to_owned(), json!(0.2));
        options.insert("stream".to_owned(), json!(true));
        let request = ModelRequest {
            model: "deepseek-chat".to_owned(),
            messages: vec![
                ModelMessage::System("You are a helpful assistant.".to_owned()),
                ModelMessage::User("Hello".to_owned()),
            ],
            options,
        };
        let body = serde_json::to_value(create_request(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "deepseek-chat",
                "messages": [
                    { "role": "system", "content": "You are a helpful assistant." },
                    { "role": "user", "content": "Hello" }
                ],
                "stream": false,
                "temperature": 0.2
            })
        );
    }

    #[test]
    fn test_into_model_response() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "Final Answer: 42",
                    "reasoning_content": "Let me think."
                },
                "finish_reason": "stop"
            }],
            "usage": {
                "prompt_tokens": 10,
                "completion_tokens": 5,
                "total_tokens": 15
            }
        }))
        .unwrap();
        let resp = into_model_response(completion).unwrap();
        assert_eq!(resp.content, "Final Answer: 42");
        assert_eq!(resp.reasoning_content.as_deref(), Some("Let me think."));
        assert_eq!(resp.finish_reason, Some(ModelFinishReason::Stop));
    }

    #[test]
    fn test_empty_choices() {
        let completion: ChatCompletion =
            serde_json::from_value(json!({ "id": "x", "choices": [] }))
                .unwrap();
        assert!(into_model_response(completion).is_none());
    }

    #[test]
    fn test_error_message() {
        let body = r#"{"error":{"message":"Authentication Fails","type":"authentication_error"}}"#;
        assert_eq!(error_message(body), "Authentication Fails");
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
    }
}
