mod builder;

use serde_json::{Map, Value};
use stepchat_model::{ModelMessage, ModelRequest, Role};

use crate::conversation::ConversationManager;
use crate::cot::{self, ReasoningStep};
use crate::error::{CompletionError, Error};
use crate::model::Model;
use crate::model_client::ModelClient;
pub use builder::ClientBuilder;

/// The instruction put in front of the conversation in chain-of-thought
/// mode.
pub const DEFAULT_COT_PROMPT: &str = "You are a rigorous AI assistant. \
    Reason step by step with a chain of thought and show your reasoning. \
    Start every reasoning step with 'Step [number]:' (for example Step 1:), \
    and start the final conclusion with 'Final Answer:'.";

/// Per-call switches for [`Client::prompt`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromptOptions {
    /// Ask for numbered reasoning steps and return only the final answer.
    pub use_cot: bool,
    /// Clear the conversation before sending.
    pub reset_conversation: bool,
    /// Extra parameters passed through to the service.
    pub extra: Map<String, Value>,
}

impl PromptOptions {
    /// Enables chain-of-thought mode.
    #[inline]
    pub fn with_cot(mut self) -> Self {
        self.use_cot = true;
        self
    }

    /// Clears the conversation before sending.
    #[inline]
    pub fn with_reset(mut self) -> Self {
        self.reset_conversation = true;
        self
    }

    /// Adds a pass-through parameter, e.g. `temperature`.
    #[inline]
    pub fn with_option<K: Into<String>, V: Into<Value>>(
        mut self,
        key: K,
        value: V,
    ) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// A chat client holding one conversation with one model.
///
/// Calls are sequential: [`prompt`](Self::prompt) borrows the client
/// mutably until the reply has been recorded.
pub struct Client {
    model: Model,
    model_client: ModelClient,
    conversation: ConversationManager,
    cot_prompt: String,
    reasoning_log: Vec<String>,
}

impl Client {
    /// Creates a client for the model named `model`.
    ///
    /// Fails with [`Error::InvalidModel`] unless `model` is one of
    /// [`Model::ALL`].
    pub fn new<P: stepchat_model::ModelProvider + 'static>(
        model: &str,
        provider: P,
    ) -> Result<Self, Error> {
        ClientBuilder::with_model_provider(provider)
            .with_model(model)
            .build()
    }

    /// Returns the model this client talks to.
    #[inline]
    pub fn model(&self) -> Model {
        self.model
    }

    /// Sends `message` and returns the reply.
    ///
    /// With [`PromptOptions::use_cot`], the reply is split into reasoning
    /// steps which are logged, and the `Final Answer:` piece is returned
    /// instead of the whole reply when there is one.
    ///
    /// On failure the user message stays in the conversation and no reply
    /// is recorded.
    pub async fn prompt(
        &mut self,
        message: &str,
        options: PromptOptions,
    ) -> Result<String, Error> {
        let PromptOptions {
            use_cot,
            reset_conversation,
            extra,
        } = options;

        if reset_conversation {
            self.conversation.reset();
        }
        if use_cot {
            self.conversation.initialize_cot(&self.cot_prompt);
        }
        self.conversation.add_message(Role::User, message);

        let request = ModelRequest {
            model: self.model.as_str().to_owned(),
            messages: self.conversation.history(),
            options: extra,
        };
        let resp = self
            .model_client
            .send_request(request)
            .await
            .map_err(CompletionError::new)?;

        if let Some(reasoning) = &resp.reasoning_content {
            debug!("model reasoning: {reasoning}");
        }
        let reply = resp.content;
        self.conversation
            .add_message(Role::Assistant, reply.as_str());

        if !use_cot {
            return Ok(reply);
        }

        let steps = cot::parse_steps(&reply);
        self.log_steps(&steps);
        match cot::final_answer(&steps) {
            Some(answer) => Ok(answer.text().to_owned()),
            None => Ok(reply),
        }
    }

    /// Clears the conversation without sending anything.
    #[inline]
    pub fn reset(&mut self) {
        self.conversation.reset();
    }

    /// Returns a copy of the conversation.
    #[inline]
    pub fn conversation_history(&self) -> Vec<ModelMessage> {
        self.conversation.history()
    }

    /// Returns every reasoning step logged so far, formatted as
    /// `[Step N] text`.
    #[inline]
    pub fn reasoning_log(&self) -> &[String] {
        &self.reasoning_log
    }

    fn log_steps(&mut self, steps: &[ReasoningStep]) {
        info!("=== chain-of-thought log ===");
        for (idx, step) in steps.iter().enumerate() {
            let entry = format!("[Step {}] {step}", idx + 1);
            info!("{entry}");
            self.reasoning_log.push(entry);
        }
        info!("============================");
    }
}
