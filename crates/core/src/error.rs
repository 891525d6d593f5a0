use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};

use stepchat_model::{ErrorKind, ModelProviderError};

use crate::model::Model;

/// The error type for [`Client`](crate::Client).
#[derive(Debug)]
pub enum Error {
    /// The model identifier is not one of the supported models.
    InvalidModel(String),
    /// The completion call failed.
    Completion(CompletionError),
}

impl Error {
    /// Returns the kind of the completion failure, if this is one.
    #[inline]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::InvalidModel(_) => None,
            Error::Completion(err) => Some(err.kind()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidModel(model) => {
                let supported: Vec<_> =
                    Model::ALL.iter().map(Model::as_str).collect();
                write!(
                    f,
                    "invalid model `{model}`, only {} are supported",
                    supported.join(", ")
                )
            }
            Error::Completion(err) => Display::fmt(err, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::InvalidModel(_) => None,
            Error::Completion(err) => err.source(),
        }
    }
}

impl From<CompletionError> for Error {
    #[inline]
    fn from(err: CompletionError) -> Self {
        Error::Completion(err)
    }
}

/// A failed completion call.
///
/// The message names the failure category; the provider's own error is
/// kept as the [`source`](StdError::source).
pub struct CompletionError {
    kind: ErrorKind,
    source: Box<dyn ModelProviderError>,
}

impl CompletionError {
    pub(crate) fn new(source: Box<dyn ModelProviderError>) -> Self {
        Self {
            kind: source.kind(),
            source,
        }
    }

    /// Returns the failure category.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Debug for CompletionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionError")
            .field("kind", &self.kind)
            .field("source", &self.source)
            .finish()
    }
}

impl Display for CompletionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Api => write!(f, "{}: {}", self.kind, self.source),
            kind => Display::fmt(&kind, f),
        }
    }
}

impl StdError for CompletionError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}
