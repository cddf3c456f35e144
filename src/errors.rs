//! Error types for publish operations

use thiserror::Error;

/// Boxed error type used for transparent propagation of transport failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for all publish operations
pub type SnsResult<T> = Result<T, SnsError>;

/// Error classification code reported by the provider when a topic does not exist
pub const NOT_FOUND_CODE: &str = "NotFound";

/// Failures surfaced by the publishing client
#[derive(Debug, Error)]
pub enum SnsError {
    /// A message attribute value is not one of the six supported kinds.
    /// Raised before any network activity.
    #[error("unsupported message attribute type for key `{key}`: {kind}")]
    UnsupportedAttributeType { key: String, kind: &'static str },

    /// The provider reported `NotFound` for the resolved topic.
    /// The message carries prefix, topic, arn and the provider error text.
    #[error("{0}")]
    TopicNotFound(String),

    /// Any other provider-reported publish failure
    #[error("{0}")]
    Publish(String),

    /// Message body or envelope could not be JSON-encoded
    #[error("failed to encode message envelope: {0}")]
    Envelope(#[from] serde_json::Error),

    /// Identity transport failure, passed through unmodified and unlogged.
    /// Asymmetric with publish failures on purpose: callers distinguish
    /// account-resolution problems from provider rejections.
    #[error(transparent)]
    Identity(BoxError),

    /// The blocking adapter could not start its runtime
    #[error("failed to start blocking runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Error reported by the publish transport, mirroring the provider's
/// `{code, message}` wire shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("provider error ({code}): {message}")]
pub struct ProviderError {
    /// Provider classification code, e.g. `NotFound`
    pub code: String,
    /// Human-readable provider message
    pub message: String,
}

impl ProviderError {
    /// Create a provider error from a classification code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Shorthand for the `NotFound` classification
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(NOT_FOUND_CODE, message)
    }

    /// Whether this error carries the `NotFound` classification code
    pub fn is_not_found(&self) -> bool {
        self.code == NOT_FOUND_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_display_includes_code_and_message() {
        let err = ProviderError::new("500", "internal failure");
        assert_eq!(err.to_string(), "provider error (500): internal failure");
    }

    #[test]
    fn not_found_shorthand_sets_classification_code() {
        let err = ProviderError::not_found("no such topic");
        assert!(err.is_not_found());
        assert_eq!(err.code, "NotFound");
    }

    #[test]
    fn unsupported_attribute_type_names_key_and_kind() {
        let err = SnsError::UnsupportedAttributeType {
            key: "flag".to_string(),
            kind: "boolean",
        };
        let message = err.to_string();
        assert!(message.contains("flag"));
        assert!(message.contains("boolean"));
    }

    #[test]
    fn identity_errors_pass_through_display() {
        let inner: BoxError = "sts unreachable".into();
        let err = SnsError::Identity(inner);
        assert_eq!(err.to_string(), "sts unreachable");
    }
}
