//! Trait abstraction for submit sinks to enable mocking in tests

use crate::state::LoginCredentials;
use async_trait::async_trait;
use thiserror::Error;

/// Failure while handing accepted credentials to a sink
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write submission record: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode submission record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Consumer of accepted login submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitSink: Send + Sync {
    /// Short name used in log and error messages
    fn name(&self) -> &'static str;

    /// Receive the values of an accepted submit
    async fn accept(&self, credentials: &LoginCredentials) -> Result<(), SinkError>;
}

/// Writes accepted submissions to the tracing log. The password is never logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl SubmitSink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn accept(&self, credentials: &LoginCredentials) -> Result<(), SinkError> {
        tracing::info!(
            "Login form data: email={} password=<{} chars>",
            credentials.email,
            credentials.password.chars().count()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> LoginCredentials {
        LoginCredentials {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        }
    }

    #[test]
    fn test_log_sink_never_fails() {
        let result = tokio_test::block_on(LogSink.accept(&credentials()));
        assert!(result.is_ok());
        assert_eq!(LogSink.name(), "log");
    }

    #[test]
    fn test_sink_error_messages() {
        let err = SinkError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.to_string(), "failed to write submission record: denied");
    }

    #[tokio::test]
    async fn test_mock_sink_receives_credentials() {
        let mut mock = MockSubmitSink::new();
        mock.expect_accept()
            .withf(|c| c.email == "test@example.com" && c.password == "password123")
            .times(1)
            .returning(|_| Ok(()));

        assert!(mock.accept(&credentials()).await.is_ok());
    }
}
