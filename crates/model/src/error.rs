use std::fmt::{self, Display, Formatter};

/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The API key was rejected.
    Authentication,
    /// The model provider is rate limited.
    RateLimitExceeded,
    /// The service could not be reached.
    Connection,
    /// Any other errors reported by the service.
    Api,
}

impl ErrorKind {
    /// Returns a short human-readable description of this kind.
    #[inline]
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::Authentication => "invalid API key",
            ErrorKind::RateLimitExceeded => "rate limit exceeded",
            ErrorKind::Connection => "network connection failed",
            ErrorKind::Api => "API error",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
