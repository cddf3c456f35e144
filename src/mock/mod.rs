//! In-memory transport implementations for testing and development

pub mod transport;

pub use transport::{MockIdentityTransport, MockSnsTransport, RecordedPublish};
