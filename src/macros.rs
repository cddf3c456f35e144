//! Convenience macros for building attribute maps

/// Build an [`AttributeMap`](crate::AttributeMap) from `key => value` pairs
///
/// Values go through [`AttributeValue::from`](crate::AttributeValue), so any
/// of the supported kinds can be mixed freely.
///
/// # Example
///
/// ```rust
/// use sns_publisher_port::{attributes, AttributeValue};
///
/// let attrs = attributes! {
///     "event" => "user.registered",
///     "retries" => 3i64,
/// };
///
/// assert_eq!(attrs["retries"], AttributeValue::Integer(3));
/// ```
#[macro_export]
macro_rules! attributes {
    () => {
        $crate::AttributeMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::AttributeMap::new();
        $(
            map.insert(::std::string::String::from($key), $crate::AttributeValue::from($value));
        )+
        map
    }};
}
