//! Error types for the planwright library.
//!
//! Form validation failures are not errors here. They travel as
//! [`crate::validation::ValidationErrors`] data so the caller can render them
//! next to the offending field.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all console operations.
#[derive(Error, Debug)]
pub enum PlanwrightError {
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: String },
    /// A plan with the same ID is already stored
    #[error("Plan with ID {id} already exists")]
    DuplicatePlan { id: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Transport-level failure talking to the text-generation provider
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The provider answered with a non-success status
    #[error("Provider returned status {status}: {message}")]
    Provider { status: u16, message: String },
    /// The provider answered but the payload could not be used
    #[error("Malformed provider response: {message}")]
    MalformedResponse { message: String },
    /// No assistant is configured for this session
    #[error("AI assistant unavailable: {reason}")]
    AssistantUnavailable { reason: String },
    /// An operation was attempted from a wizard state that does not allow it
    #[error("Wizard state error: {message}")]
    WizardState { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlanwrightError {
        PlanwrightError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for transport errors raised by the HTTP client.
pub struct HttpErrorBuilder {
    message: String,
}

impl HttpErrorBuilder {
    /// Create a new HTTP error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> PlanwrightError {
        PlanwrightError::Http {
            message: self.message,
            source,
        }
    }
}

impl PlanwrightError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a builder for HTTP transport errors.
    pub fn http(message: impl Into<String>) -> HttpErrorBuilder {
        HttpErrorBuilder::new(message)
    }

    /// Creates a wizard state error.
    pub fn wizard_state(message: impl Into<String>) -> Self {
        Self::WizardState {
            message: message.into(),
        }
    }

    /// Whether retrying the same request could plausibly succeed.
    ///
    /// Used to decide if an assistant failure is shown as a retryable banner.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { .. } | Self::MalformedResponse { .. } => true,
            Self::Provider { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Specialized extension trait for HTTP client Results.
pub trait HttpResultExt<T> {
    /// Map transport errors with a message.
    fn http_context(self, message: &str) -> Result<T>;
}

impl<T> HttpResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn http_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlanwrightError::http(message).with_source(e))
    }
}

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, PlanwrightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = PlanwrightError::invalid_input("price").with_reason("not a number");
        match err {
            PlanwrightError::InvalidInput { field, reason } => {
                assert_eq!(field, "price");
                assert_eq!(reason, "not a number");
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_retryable_classification() {
        let throttled = PlanwrightError::Provider {
            status: 429,
            message: "slow down".to_string(),
        };
        assert!(throttled.is_retryable());

        let unauthorized = PlanwrightError::Provider {
            status: 401,
            message: "bad key".to_string(),
        };
        assert!(!unauthorized.is_retryable());

        let missing = PlanwrightError::PlanNotFound {
            id: "abc".to_string(),
        };
        assert!(!missing.is_retryable());
    }
}
