//! Conversation state, chain-of-thought parsing and the chat client.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod client;
pub mod conversation;
pub mod cot;
mod error;
mod model;
mod model_client;

pub use client::{Client, ClientBuilder, DEFAULT_COT_PROMPT, PromptOptions};
pub use error::{CompletionError, Error};
pub use model::Model;
pub use stepchat_model::{ErrorKind, ModelMessage, Role};
