//! # SNS Publisher Port
//!
//! Thin publishing port for SNS-style notification fan-out: topic
//! namespacing, typed message attributes, and provider-error classification,
//! with transports expressed as swappable ports.
//!
//! ## Features
//!
//! - Topic ARN resolution with per-instance memoized account lookup
//! - Typed message attributes coerced into the provider's wire format
//! - Provider errors classified into `TopicNotFound` / `Publish`
//! - Async core plus a blocking adapter sharing the same algorithm
//! - Dry-run mode that logs intent without touching the network
//! - Complete mock transports for testing and development
//!
//! ## Quick Start
//!
//! ```rust
//! use sns_publisher_port::{attributes, MockIdentityTransport, MockSnsTransport, SnsConfig, SnsPublisher};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = Arc::new(MockSnsTransport::new());
//!     let identity = Arc::new(MockIdentityTransport::new("423839475175"));
//!     let publisher = SnsPublisher::new(
//!         SnsConfig::new("us-east-1"),
//!         transport.clone(),
//!         identity,
//!     );
//!
//!     let sent = publisher
//!         .publish(
//!             "sns_publisher",
//!             "test",
//!             &serde_json::json!({"message": true}),
//!             attributes! { "at" => "tr" },
//!         )
//!         .await?;
//!     assert!(sent);
//!
//!     let record = transport.last_publish().unwrap();
//!     assert_eq!(
//!         record.topic_arn,
//!         "arn:aws:sns:us-east-1:423839475175:sns_publisher__test"
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//!
//! - **Ports (interfaces)**: [`PublishTransport`], [`IdentityTransport`]
//! - **Adapters**: mock transports included; real provider bindings live
//!   outside this crate
//! - **Domain logic**: attribute coercion, topic addressing, and error
//!   classification independent of the transport
//!
//! Retry policy, credentials, connection pooling, and batching all belong to
//! the transport implementations, not to this port.

// Module declarations
pub mod blocking;
pub mod client;
pub mod errors;
pub mod macros;
pub mod mock;
pub mod traits;
pub mod types;

// Clients
pub use blocking::BlockingSnsPublisher;
pub use client::{SnsPublisher, ACCOUNT_ID_ENV_VAR, DEFAULT_LOCAL_ACCOUNT_ID};

// Errors
pub use errors::{BoxError, ProviderError, SnsError, SnsResult, NOT_FOUND_CODE};

// Ports
pub use traits::{CallerIdentity, IdentityTransport, PublishTransport, MESSAGE_STRUCTURE_JSON};

// Types
pub use types::{
    attributes_from_json, coerce_attributes, namespaced_topic, topic_arn, AttributeMap,
    AttributeValue, LogLevel, SnsConfig, WireAttribute, WireDataType, TOPIC_NAME_SEPARATOR,
};

// Mock transports
pub use mock::{MockIdentityTransport, MockSnsTransport, RecordedPublish};
