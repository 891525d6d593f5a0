use std::mem;

use stepchat_core::{
    Client, ClientBuilder, Error, ModelMessage, PromptOptions,
};
use stepchat_model::ModelProvider;

/// A session builder.
///
/// See [`Session`].
pub struct SessionBuilder {
    client_builder: ClientBuilder,
}

impl SessionBuilder {
    /// Creates a session builder with a specified model provider.
    pub fn with_model_provider<M: ModelProvider + 'static>(
        provider: M,
    ) -> Self {
        let client_builder = ClientBuilder::with_model_provider(provider);
        Self { client_builder }
    }

    /// Sets the model identifier.
    #[inline]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.client_builder = self.client_builder.with_model(model);
        self
    }

    /// Replaces the chain-of-thought instruction.
    #[inline]
    pub fn with_cot_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.client_builder = self.client_builder.with_cot_prompt(prompt);
        self
    }

    /// Builds a new session.
    pub fn build(self) -> Result<Session, Error> {
        let client = self.client_builder.build()?;
        Ok(Session {
            client,
            use_cot: false,
            reset_pending: false,
        })
    }
}

/// A chat session, like a window that displays messages and has a input box.
///
/// The session remembers the switches the user flipped between messages and
/// is basically a wrapper around [`Client`].
pub struct Session {
    client: Client,
    use_cot: bool,
    reset_pending: bool,
}

impl Session {
    /// Sends a message to the session and returns the text to display.
    pub async fn send_message(
        &mut self,
        message: &str,
    ) -> Result<String, Error> {
        let options = PromptOptions {
            use_cot: self.use_cot,
            reset_conversation: mem::take(&mut self.reset_pending),
            ..Default::default()
        };
        self.client.prompt(message, options).await
    }

    /// Flips chain-of-thought mode and returns the new state.
    #[inline]
    pub fn toggle_cot(&mut self) -> bool {
        self.use_cot = !self.use_cot;
        debug!("chain-of-thought mode: {}", self.use_cot);
        self.use_cot
    }

    /// Returns `true` if chain-of-thought mode is on.
    #[inline]
    pub fn is_cot_enabled(&self) -> bool {
        self.use_cot
    }

    /// Starts a new conversation with the next message.
    #[inline]
    pub fn request_reset(&mut self) {
        self.reset_pending = true;
    }

    /// Returns a copy of the conversation.
    #[inline]
    pub fn history(&self) -> Vec<ModelMessage> {
        self.client.conversation_history()
    }

    /// Returns the reasoning steps logged so far.
    #[inline]
    pub fn reasoning_log(&self) -> &[String] {
        self.client.reasoning_log()
    }
}

#[cfg(test)]
mod tests {
    use stepchat_test_model::TestModelProvider;

    use super::*;

    #[tokio::test]
    async fn test_switches_apply_to_next_message() {
        let provider = TestModelProvider::default();
        provider.add_reply_step("plain");
        provider.add_reply_step("Step 1: a\nFinal Answer: b");
        provider.add_reply_step("after reset");

        let mut session = SessionBuilder::with_model_provider(provider.clone())
            .with_model("deepseek-reasoner")
            .build()
            .unwrap();

        assert_eq!(session.send_message("one").await.unwrap(), "plain");

        assert!(session.toggle_cot());
        let answer = session.send_message("two").await.unwrap();
        assert_eq!(answer, "Final Answer: b");
        assert_eq!(session.reasoning_log().len(), 2);
        assert_eq!(session.history().len(), 5);

        assert!(!session.toggle_cot());
        session.request_reset();
        session.send_message("three").await.unwrap();
        assert_eq!(session.history().len(), 2);

        // The reset only applies once.
        assert_eq!(provider.requests()[2].messages.len(), 1);
    }

    #[test]
    fn test_invalid_model() {
        let result = SessionBuilder::with_model_provider(
            TestModelProvider::default(),
        )
        .with_model("nope")
        .build();
        assert!(matches!(result, Err(Error::InvalidModel(_))));
    }
}
