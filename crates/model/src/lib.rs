//! An abstraction layer for chat-completion services.
//!
//! This crate establishes a unified protocol for the client to talk to
//! hosted chat-completion APIs, so that the conversation logic does not
//! depend on any particular transport.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod provider;
mod request;
mod response;

pub use error::*;
pub use provider::*;
pub use request::*;
pub use response::*;
