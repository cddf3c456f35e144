//! Topic naming and ARN composition

/// Separator between the namespace prefix and the logical topic name
pub const TOPIC_NAME_SEPARATOR: &str = "__";

/// Compose the actual topic name from a namespace prefix and a logical name
///
/// No validation or escaping is performed: a `__` embedded in either part
/// yields an ambiguous but accepted name.
pub fn namespaced_topic(prefix: &str, topic: &str) -> String {
    format!("{prefix}{TOPIC_NAME_SEPARATOR}{topic}")
}

/// Compose the fully-qualified topic ARN
pub fn topic_arn(region: &str, account_id: &str, topic_name: &str) -> String {
    format!("arn:aws:sns:{region}:{account_id}:{topic_name}")
}
