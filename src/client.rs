//! Async publishing client - the core publish algorithm

use crate::errors::{ProviderError, SnsError, SnsResult};
use crate::traits::{IdentityTransport, PublishTransport, MESSAGE_STRUCTURE_JSON};
use crate::types::{
    attributes_from_json, coerce_attributes, namespaced_topic, topic_arn, AttributeMap, LogLevel,
    SnsConfig, WireAttribute,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Environment override for the account id, consulted only when a custom
/// endpoint is configured
pub const ACCOUNT_ID_ENV_VAR: &str = "AWS_ACCOUNT_ID";

/// Account id used with a custom endpoint when the environment override is
/// unset (the conventional localstack account)
pub const DEFAULT_LOCAL_ACCOUNT_ID: &str = "000000000000";

/// Async publishing client for a namespaced notification topic
///
/// Resolves `prefix` + `topic` into a fully-qualified topic ARN, coerces
/// message attributes into the provider's typed wire format, and submits the
/// publish call through the configured [`PublishTransport`]. The account id
/// is resolved once per instance and memoized.
pub struct SnsPublisher {
    config: SnsConfig,
    publish_transport: Arc<dyn PublishTransport>,
    identity_transport: Arc<dyn IdentityTransport>,
    // Plain memoized field, read-compute-write-once. Two concurrent first
    // accesses may both hit the identity transport; the last writer wins.
    account_id: RwLock<Option<String>>,
}

impl SnsPublisher {
    /// Create a client over the given transports
    pub fn new(
        config: SnsConfig,
        publish_transport: Arc<dyn PublishTransport>,
        identity_transport: Arc<dyn IdentityTransport>,
    ) -> Self {
        Self {
            config,
            publish_transport,
            identity_transport,
            account_id: RwLock::new(None),
        }
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &SnsConfig {
        &self.config
    }

    /// Resolve the account id, memoized for the lifetime of this instance
    ///
    /// With a custom endpoint configured the id comes from the
    /// `AWS_ACCOUNT_ID` environment variable (default
    /// [`DEFAULT_LOCAL_ACCOUNT_ID`]) and the identity transport is never
    /// called. Otherwise the identity transport is queried once; its failures
    /// propagate unwrapped as [`SnsError::Identity`].
    pub async fn account_id(&self) -> SnsResult<String> {
        let cached = self
            .account_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(account_id) = cached {
            return Ok(account_id);
        }

        let account_id = self.resolve_account_id().await?;
        *self
            .account_id
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(account_id.clone());
        Ok(account_id)
    }

    async fn resolve_account_id(&self) -> SnsResult<String> {
        if self.config.endpoint_url.is_some() {
            return Ok(std::env::var(ACCOUNT_ID_ENV_VAR)
                .unwrap_or_else(|_| DEFAULT_LOCAL_ACCOUNT_ID.to_string()));
        }

        let identity = self
            .identity_transport
            .caller_identity()
            .await
            .map_err(SnsError::Identity)?;
        Ok(identity.account)
    }

    /// Resolve the fully-qualified ARN for an already-namespaced topic name
    pub async fn topic_arn(&self, topic_name: &str) -> SnsResult<String> {
        let account_id = self.account_id().await?;
        Ok(topic_arn(&self.config.region, &account_id, topic_name))
    }

    /// Publish a message to the namespaced topic `{prefix}__{topic}`
    ///
    /// The body is wrapped in the provider's multi-protocol envelope
    /// `{"default": <JSON-encoded body>}` and submitted together with the
    /// coerced attributes. Returns `Ok(true)` once the provider accepted the
    /// message, or `Ok(false)` when dry-run mode skipped the network.
    ///
    /// # Errors
    /// * [`SnsError::Envelope`] if the body cannot be JSON-encoded
    /// * [`SnsError::TopicNotFound`] if the provider reports `NotFound`
    /// * [`SnsError::Publish`] for any other provider failure
    /// * [`SnsError::Identity`] passthrough from account resolution
    pub async fn publish<T: Serialize>(
        &self,
        prefix: &str,
        topic: &str,
        body: &T,
        attributes: AttributeMap,
    ) -> SnsResult<bool> {
        let wire_attributes = coerce_attributes(&attributes)?;

        if self.config.dry_run {
            let body_json = serde_json::to_string(body)?;
            tracing::info!(
                prefix,
                topic,
                body = %body_json,
                attributes = ?wire_attributes,
                "publish skipped, dry run"
            );
            return Ok(false);
        }

        let topic_name = namespaced_topic(prefix, topic);
        let arn = self.topic_arn(&topic_name).await?;
        let envelope = encode_envelope(body)?;

        self.publish_transport
            .publish(&arn, MESSAGE_STRUCTURE_JSON, &envelope, &wire_attributes)
            .await
            .map_err(|err| classify_publish_error(&err, prefix, topic, &arn))?;

        self.log_published(prefix, topic, &arn, &envelope, &wire_attributes);
        Ok(true)
    }

    /// Publish with loose JSON attribute values
    ///
    /// Values are admitted into the supported attribute kinds first and the
    /// call fails with [`SnsError::UnsupportedAttributeType`] before any
    /// network activity if one falls outside them.
    pub async fn publish_json<T: Serialize>(
        &self,
        prefix: &str,
        topic: &str,
        body: &T,
        attributes: HashMap<String, serde_json::Value>,
    ) -> SnsResult<bool> {
        let typed = attributes_from_json(&attributes)?;
        self.publish(prefix, topic, body, typed).await
    }

    fn log_published(
        &self,
        prefix: &str,
        topic: &str,
        arn: &str,
        message: &str,
        attributes: &HashMap<String, WireAttribute>,
    ) {
        match self.config.log_level {
            LogLevel::Debug => tracing::debug!(
                prefix, topic, arn, message, attributes = ?attributes, "published message"
            ),
            LogLevel::Info => tracing::info!(
                prefix, topic, arn, message, attributes = ?attributes, "published message"
            ),
            LogLevel::Warn => tracing::warn!(
                prefix, topic, arn, message, attributes = ?attributes, "published message"
            ),
            LogLevel::Error => tracing::error!(
                prefix, topic, arn, message, attributes = ?attributes, "published message"
            ),
        }
    }
}

impl std::fmt::Debug for SnsPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnsPublisher")
            .field("config", &self.config)
            .field("account_id", &self.account_id)
            .finish_non_exhaustive()
    }
}

/// Wrap a message body in the provider's multi-protocol envelope
///
/// The body is JSON-encoded, placed under the `"default"` protocol variant,
/// and the wrapper is JSON-encoded again - the double encoding the provider
/// requires for structured messages.
pub(crate) fn encode_envelope<T: Serialize>(body: &T) -> SnsResult<String> {
    let inner = serde_json::to_string(body)?;
    let envelope = serde_json::json!({ "default": inner });
    Ok(serde_json::to_string(&envelope)?)
}

/// Classify a provider publish failure into the domain error taxonomy
///
/// Logs a structured error record, then maps the provider's `NotFound`
/// classification code to [`SnsError::TopicNotFound`] and everything else to
/// [`SnsError::Publish`], both carrying the formatted record as description.
pub(crate) fn classify_publish_error(
    err: &ProviderError,
    prefix: &str,
    topic: &str,
    arn: &str,
) -> SnsError {
    let description =
        format!("error publishing message: prefix={prefix}, topic={topic}, arn={arn}, error={err}");
    tracing::error!(prefix, topic, arn, error = %err, "error publishing message");

    if err.is_not_found() {
        SnsError::TopicNotFound(description)
    } else {
        SnsError::Publish(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_is_double_encoded_under_default() {
        let envelope = encode_envelope(&serde_json::json!({"message": true})).unwrap();
        assert_eq!(envelope, r#"{"default":"{\"message\":true}"}"#);
    }

    #[test]
    fn envelope_accepts_plain_strings() {
        let envelope = encode_envelope(&"hello").unwrap();
        assert_eq!(envelope, r#"{"default":"\"hello\""}"#);
    }

    #[test]
    fn not_found_code_classifies_as_topic_not_found() {
        let err = ProviderError::not_found("Error");
        let classified = classify_publish_error(
            &err,
            "team_india",
            "rulez",
            "arn:aws:sns:us-east-1:423839475175:team_india__rulez",
        );

        match classified {
            SnsError::TopicNotFound(message) => {
                assert!(message.contains("prefix=team_india"));
                assert!(message.contains("topic=rulez"));
                assert!(message.contains("arn=arn:aws:sns:us-east-1:423839475175:team_india__rulez"));
                assert!(message.contains("NotFound"));
            }
            other => panic!("expected TopicNotFound, got {other:?}"),
        }
    }

    #[test]
    fn any_other_code_classifies_as_publish_error() {
        let err = ProviderError::new("500", "Error");
        let classified = classify_publish_error(
            &err,
            "sns_publisher",
            "test",
            "arn:aws:sns:us-east-1:423839475175:sns_publisher__test",
        );

        match classified {
            SnsError::Publish(message) => {
                assert!(message.contains("prefix=sns_publisher"));
                assert!(message.contains("topic=test"));
                assert!(message.contains("500"));
            }
            other => panic!("expected Publish, got {other:?}"),
        }
    }
}
