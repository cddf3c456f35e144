use crate::errors::{BoxError, ProviderError};
use crate::types::WireAttribute;
use async_trait::async_trait;
use std::collections::HashMap;

/// Message structure hint telling the provider the message carries
/// per-protocol JSON variants
pub const MESSAGE_STRUCTURE_JSON: &str = "json";

/// Publish transport port - the provider call that delivers a message to a topic
///
/// Implementations own everything below the publish call: connections,
/// authentication, serialization internals, retries. The client only sees
/// success or a [`ProviderError`] carrying the provider's classification code.
#[async_trait]
pub trait PublishTransport: Send + Sync {
    /// Deliver a message to the fully-qualified topic
    ///
    /// # Arguments
    /// * `topic_arn` - The fully-qualified topic identifier
    /// * `message_structure` - Structure hint, [`MESSAGE_STRUCTURE_JSON`] for
    ///   multi-protocol envelopes
    /// * `message` - The encoded message envelope
    /// * `attributes` - Typed message attributes in wire form
    async fn publish(
        &self,
        topic_arn: &str,
        message_structure: &str,
        message: &str,
        attributes: &HashMap<String, WireAttribute>,
    ) -> Result<(), ProviderError>;
}

/// Identity transport port - the caller-identity query used to resolve the
/// account id when no endpoint override is configured
///
/// Failures are propagated to the caller as-is, without wrapping or logging.
#[async_trait]
pub trait IdentityTransport: Send + Sync {
    /// Query the identity service for the caller's account
    async fn caller_identity(&self) -> Result<CallerIdentity, BoxError>;
}

/// Response of the caller-identity query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    /// The account id owning the active credentials
    pub account: String,
}

impl CallerIdentity {
    /// Create a caller identity from an account id
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
        }
    }
}
