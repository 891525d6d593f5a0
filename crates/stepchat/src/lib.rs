//! A ready-to-use chat session with chain-of-thought support.
//!
//! The crate includes a CLI tool for using in the terminal. And you can also
//! use it as a library to drive a session from your own host apps.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod command;
mod session;

pub use command::Command;
pub use session::{Session, SessionBuilder};

/// Re-exports of [`stepchat_core`] crate.
pub mod core {
    pub use stepchat_core::*;
}

/// Re-exports of [`stepchat_openai_model`] crate.
pub mod openai {
    pub use stepchat_openai_model::*;
}
