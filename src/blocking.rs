//! Blocking adapter over the async publishing client
//!
//! One algorithm, two entry styles: this wrapper owns a small
//! single-threaded runtime and drives the async core to completion, so the
//! wire bytes and log records are identical to the async client's.

use crate::client::SnsPublisher;
use crate::errors::{SnsError, SnsResult};
use crate::traits::{IdentityTransport, PublishTransport};
use crate::types::{AttributeMap, SnsConfig};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Blocking publishing client
///
/// Each call blocks the current thread for the duration of the network
/// round-trips. Instances are independent; share one across threads only
/// with external synchronization.
#[derive(Debug)]
pub struct BlockingSnsPublisher {
    runtime: tokio::runtime::Runtime,
    inner: SnsPublisher,
}

impl BlockingSnsPublisher {
    /// Create a blocking client over the given transports
    ///
    /// # Errors
    /// [`SnsError::Runtime`] if the internal runtime cannot be started.
    pub fn new(
        config: SnsConfig,
        publish_transport: Arc<dyn PublishTransport>,
        identity_transport: Arc<dyn IdentityTransport>,
    ) -> SnsResult<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(SnsError::Runtime)?;
        Ok(Self {
            runtime,
            inner: SnsPublisher::new(config, publish_transport, identity_transport),
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &SnsConfig {
        self.inner.config()
    }

    /// Resolve the account id, memoized per instance
    pub fn account_id(&self) -> SnsResult<String> {
        self.runtime.block_on(self.inner.account_id())
    }

    /// Resolve the fully-qualified ARN for an already-namespaced topic name
    pub fn topic_arn(&self, topic_name: &str) -> SnsResult<String> {
        self.runtime.block_on(self.inner.topic_arn(topic_name))
    }

    /// Publish a message to the namespaced topic `{prefix}__{topic}`
    ///
    /// See [`SnsPublisher::publish`] for the full contract.
    pub fn publish<T: Serialize>(
        &self,
        prefix: &str,
        topic: &str,
        body: &T,
        attributes: AttributeMap,
    ) -> SnsResult<bool> {
        self.runtime
            .block_on(self.inner.publish(prefix, topic, body, attributes))
    }

    /// Publish with loose JSON attribute values
    ///
    /// See [`SnsPublisher::publish_json`] for the full contract.
    pub fn publish_json<T: Serialize>(
        &self,
        prefix: &str,
        topic: &str,
        body: &T,
        attributes: HashMap<String, serde_json::Value>,
    ) -> SnsResult<bool> {
        self.runtime
            .block_on(self.inner.publish_json(prefix, topic, body, attributes))
    }
}
