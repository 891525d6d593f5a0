use stepchat_model::ModelProvider;

use super::{Client, DEFAULT_COT_PROMPT};
use crate::conversation::ConversationManager;
use crate::error::Error;
use crate::model::Model;
use crate::model_client::ModelClient;

/// [`Client`] builder.
pub struct ClientBuilder {
    model_client: ModelClient,
    model: Option<String>,
    cot_prompt: Option<String>,
}

impl ClientBuilder {
    /// Creates a new builder with the specified model provider.
    #[inline]
    pub fn with_model_provider<P: ModelProvider + 'static>(
        provider: P,
    ) -> Self {
        Self {
            model_client: ModelClient::new(provider),
            model: None,
            cot_prompt: None,
        }
    }

    /// Sets the model identifier. Defaults to `deepseek-chat`.
    #[inline]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Replaces the chain-of-thought instruction.
    #[inline]
    pub fn with_cot_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.cot_prompt = Some(prompt.into());
        self
    }

    /// Builds the client, validating the model identifier.
    pub fn build(self) -> Result<Client, Error> {
        let model = match self.model {
            Some(id) => id.parse::<Model>()?,
            None => Model::default(),
        };
        debug!("building client for {model}");
        Ok(Client {
            model,
            model_client: self.model_client,
            conversation: ConversationManager::new(),
            cot_prompt: self
                .cot_prompt
                .unwrap_or_else(|| DEFAULT_COT_PROMPT.to_owned()),
            reasoning_log: Vec::new(),
        })
    }
}
