//! Conversation-related types.

use stepchat_model::{ModelMessage, Role};

/// Owns the transcript of a conversation.
///
/// Messages are kept in chronological order, which is also the order they
/// are sent to the model. When chain-of-thought mode is active, the first
/// message is the single system instruction inserted by
/// [`initialize_cot`](Self::initialize_cot).
#[derive(Clone, Default, Debug)]
pub struct ConversationManager {
    pub(crate) messages: Vec<ModelMessage>,
    cot_active: bool,
}

impl ConversationManager {
    /// Creates an empty conversation.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the transcript.
    #[inline]
    pub fn add_message<S: Into<String>>(&mut self, role: Role, content: S) {
        self.messages.push(ModelMessage::new(role, content));
    }

    /// Returns a copy of the transcript.
    #[inline]
    pub fn history(&self) -> Vec<ModelMessage> {
        self.messages.clone()
    }

    /// Clears the transcript and leaves chain-of-thought mode.
    #[inline]
    pub fn reset(&mut self) {
        self.messages.clear();
        self.cot_active = false;
    }

    /// Enters chain-of-thought mode by putting `system_prompt` in front of
    /// the transcript. Does nothing if the mode is already active.
    pub fn initialize_cot(&mut self, system_prompt: &str) {
        if self.cot_active {
            return;
        }
        self.messages
            .insert(0, ModelMessage::System(system_prompt.to_owned()));
        self.cot_active = true;
    }

    /// Returns `true` if chain-of-thought mode is active.
    #[inline]
    pub fn is_cot_active(&self) -> bool {
        self.cot_active
    }

    /// Returns the number of messages in the transcript.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the transcript has no messages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_copy() {
        let mut conversation = ConversationManager::new();
        conversation.add_message(Role::User, "Hi");
        conversation.add_message(Role::Assistant, "Hello");

        let mut history = conversation.history();
        assert_eq!(
            history,
            vec![
                ModelMessage::User("Hi".to_owned()),
                ModelMessage::Assistant("Hello".to_owned()),
            ]
        );

        history.clear();
        assert_eq!(conversation.history().len(), 2);
    }

    #[test]
    fn test_initialize_cot_once() {
        let mut conversation = ConversationManager::new();
        conversation.add_message(Role::User, "Hi");
        conversation.initialize_cot("Think step by step.");
        conversation.initialize_cot("Think step by step.");

        let history = conversation.history();
        let system_count =
            history.iter().filter(|m| m.role() == Role::System).count();
        assert_eq!(system_count, 1);
        assert_eq!(
            history[0],
            ModelMessage::System("Think step by step.".to_owned())
        );
        assert!(conversation.is_cot_active());
    }

    #[test]
    fn test_reset() {
        let mut conversation = ConversationManager::new();
        conversation.initialize_cot("first");
        conversation.add_message(Role::User, "Hi");
        conversation.reset();

        assert!(conversation.history().is_empty());
        assert!(!conversation.is_cot_active());

        conversation.initialize_cot("second");
        assert_eq!(
            conversation.history(),
            vec![ModelMessage::System("second".to_owned())]
        );
    }
}
