use crate::errors::{BoxError, ProviderError};
use crate::traits::{CallerIdentity, IdentityTransport, PublishTransport};
use crate::types::WireAttribute;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// A publish call captured by [`MockSnsTransport`]
#[derive(Debug, Clone)]
pub struct RecordedPublish {
    /// The fully-qualified topic the message was addressed to
    pub topic_arn: String,
    /// The structure hint passed with the call
    pub message_structure: String,
    /// The encoded message envelope
    pub message: String,
    /// Wire attributes attached to the message
    pub attributes: HashMap<String, WireAttribute>,
    /// When the mock accepted the call
    pub published_at: DateTime<Utc>,
}

/// Mock publish transport recording every call
///
/// Succeeds by default; an injected [`ProviderError`] makes every subsequent
/// call fail until cleared, which is how tests exercise the error
/// classification paths.
#[derive(Debug, Default)]
pub struct MockSnsTransport {
    records: Mutex<Vec<RecordedPublish>>,
    failure: Mutex<Option<ProviderError>>,
}

impl MockSnsTransport {
    /// Create a transport that accepts every publish
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport that rejects every publish with the given error
    pub fn failing_with(error: ProviderError) -> Self {
        let transport = Self::new();
        transport.fail_with(error);
        transport
    }

    /// Make subsequent publishes fail with the given error
    pub fn fail_with(&self, error: ProviderError) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = Some(error);
    }

    /// Let subsequent publishes succeed again
    pub fn clear_failure(&self) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// All recorded publish calls, in order
    pub fn publishes(&self) -> Vec<RecordedPublish> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of publish calls that reached this transport
    pub fn publish_count(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// The most recent recorded publish, if any
    pub fn last_publish(&self) -> Option<RecordedPublish> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Drop all recorded calls
    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[async_trait]
impl PublishTransport for MockSnsTransport {
    async fn publish(
        &self,
        topic_arn: &str,
        message_structure: &str,
        message: &str,
        attributes: &HashMap<String, WireAttribute>,
    ) -> Result<(), ProviderError> {
        let failure = self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(error) = failure {
            return Err(error);
        }

        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedPublish {
                topic_arn: topic_arn.to_string(),
                message_structure: message_structure.to_string(),
                message: message.to_string(),
                attributes: attributes.clone(),
                published_at: Utc::now(),
            });
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("{0}")]
struct MockIdentityError(String);

/// Mock identity transport returning a fixed account id
///
/// Counts invocations so tests can assert the memoization contract, and can
/// be configured to fail to exercise transparent error propagation.
#[derive(Debug)]
pub struct MockIdentityTransport {
    account: String,
    failure: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl MockIdentityTransport {
    /// Create a transport answering with the given account id
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            failure: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a transport whose every query fails with the given message
    pub fn failing_with(message: impl Into<String>) -> Self {
        let transport = Self::new("");
        *transport
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(message.into());
        transport
    }

    /// Number of caller-identity queries issued against this transport
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityTransport for MockIdentityTransport {
    async fn caller_identity(&self) -> Result<CallerIdentity, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let failure = self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(message) = failure {
            return Err(Box::new(MockIdentityError(message)));
        }

        Ok(CallerIdentity::new(self.account.clone()))
    }
}
