//! A local fake model for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use stepchat_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelRequest, ModelResponse,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Default)]
struct Shared {
    script: VecDeque<PresetResponse>,
    requests: Vec<ModelRequest>,
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to setup the script, which is how the
/// model should respond. Each request consumes the next step of the script,
/// in order. If there are no enough steps in the script, an error will be
/// returned.
///
/// Clones share the same script and request log, so a test can keep one
/// clone around to inspect what the client sent.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    shared: Arc<Mutex<Shared>>,
    delay: Option<Duration>,
}

impl TestModelProvider {
    #[inline]
    pub fn add_response_step(&self, preset: PresetResponse) {
        self.lock().script.push_back(preset);
    }

    #[inline]
    pub fn add_reply_step<S: Into<String>>(&self, content: S) {
        self.add_response_step(PresetResponse::with_content(content));
    }

    #[inline]
    pub fn add_failure_step(&self, failure: PresetFailure) {
        self.add_response_step(PresetResponse::Failure(failure));
    }

    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns every request received so far.
    pub fn requests(&self) -> Vec<ModelRequest> {
        self.lock().requests.clone()
    }

    /// Returns the number of script steps not yet consumed.
    pub fn remaining_steps(&self) -> usize {
        self.lock().script.len()
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        // A panicking test thread must not hide the script from others.
        self.shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ModelProvider for TestModelProvider {
    type Error = crate::Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelResponse, Self::Error>> + Send + 'static
    {
        let step = {
            let mut shared = self.lock();
            shared.requests.push(req.clone());
            shared.script.pop_front()
        };
        let delay = self.delay.unwrap_or(Duration::from_millis(1));

        async move {
            sleep(delay).await;
            match step {
                Some(PresetResponse::Reply(resp)) => Ok(resp),
                Some(PresetResponse::Failure(failure)) => Err(Error {
                    message: "preset failure",
                    kind: match failure {
                        PresetFailure::Authentication => {
                            ErrorKind::Authentication
                        }
                        PresetFailure::RateLimitExceeded => {
                            ErrorKind::RateLimitExceeded
                        }
                        PresetFailure::Connection => ErrorKind::Connection,
                        PresetFailure::Api => ErrorKind::Api,
                    },
                }),
                None => Err(Error {
                    message: "no enough steps",
                    kind: ErrorKind::Api,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use stepchat_model::ModelMessage;

    use super::*;

    fn request(text: &str) -> ModelRequest {
        ModelRequest {
            model: "test".to_owned(),
            messages: vec![ModelMessage::User(text.to_owned())],
            options: Default::default(),
        }
    }

    #[tokio::test]
    async fn test_send_request() {
        let provider = TestModelProvider::default();
        provider.add_reply_step("Hello, world!");
        provider.add_failure_step(PresetFailure::Authentication);

        let observer = provider.clone();

        let resp = provider.send_request(&request("Hi")).await.unwrap();
        assert_eq!(resp.content, "Hello, world!");

        let err = provider.send_request(&request("Again")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Authentication);

        let err = provider.send_request(&request("More")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);

        let requests = observer.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1].messages[0].content(), "Again");
        assert_eq!(observer.remaining_steps(), 0);
    }
}
