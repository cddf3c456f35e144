use sns_publisher_port::{
    attributes, BlockingSnsPublisher, MockIdentityTransport, MockSnsTransport, ProviderError,
    SnsConfig, SnsError, MESSAGE_STRUCTURE_JSON,
};
use std::sync::Arc;

fn blocking_publisher(
    config: SnsConfig,
    transport: &Arc<MockSnsTransport>,
    identity: &Arc<MockIdentityTransport>,
) -> BlockingSnsPublisher {
    BlockingSnsPublisher::new(config, transport.clone(), identity.clone()).unwrap()
}

#[test]
fn blocking_publish_produces_the_same_wire_bytes() {
    let transport = Arc::new(MockSnsTransport::new());
    let identity = Arc::new(MockIdentityTransport::new("423839475175"));
    let client = blocking_publisher(SnsConfig::new("us-east-1"), &transport, &identity);

    let sent = client
        .publish(
            "sns_publisher",
            "test",
            &serde_json::json!({"message": true}),
            attributes! { "at" => "tr" },
        )
        .unwrap();

    assert!(sent);
    let record = transport.last_publish().unwrap();
    // Identical to the async client's encoding for the same input.
    assert_eq!(record.message, r#"{"default":"{\"message\":true}"}"#);
    assert_eq!(record.message_structure, MESSAGE_STRUCTURE_JSON);
    assert_eq!(
        record.topic_arn,
        "arn:aws:sns:us-east-1:423839475175:sns_publisher__test"
    );
}

#[test]
fn blocking_account_resolution_is_memoized() {
    let transport = Arc::new(MockSnsTransport::new());
    let identity = Arc::new(MockIdentityTransport::new("423839475175"));
    let client = blocking_publisher(SnsConfig::new("us-east-1"), &transport, &identity);

    assert_eq!(client.account_id().unwrap(), "423839475175");
    assert_eq!(client.account_id().unwrap(), "423839475175");
    assert_eq!(identity.call_count(), 1);
}

#[test]
fn blocking_dry_run_skips_the_network() {
    let transport = Arc::new(MockSnsTransport::new());
    let identity = Arc::new(MockIdentityTransport::new("423839475175"));
    let client = blocking_publisher(
        SnsConfig::new("us-east-1").with_dry_run(true),
        &transport,
        &identity,
    );

    let sent = client
        .publish("sns_publisher", "test", &serde_json::json!({"message": true}), attributes! {})
        .unwrap();

    assert!(!sent);
    assert_eq!(transport.publish_count(), 0);
    assert_eq!(identity.call_count(), 0);
}

#[test]
fn blocking_publish_classifies_provider_errors() {
    let transport = Arc::new(MockSnsTransport::failing_with(ProviderError::not_found("Error")));
    let identity = Arc::new(MockIdentityTransport::new("423839475175"));
    let client = blocking_publisher(SnsConfig::new("us-east-1"), &transport, &identity);

    let err = client
        .publish("sns_publisher", "test", &serde_json::json!({"message": true}), attributes! {})
        .unwrap_err();

    assert!(matches!(err, SnsError::TopicNotFound(_)));
}
