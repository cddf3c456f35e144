use crate::errors::{SnsError, SnsResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribute map attached to a published message
pub type AttributeMap = HashMap<String, AttributeValue>;

/// A message attribute value, restricted to the kinds the provider's typed
/// attribute format can carry
///
/// The enum is the closed set of supported kinds; coercion to the wire form
/// is an exhaustive match and cannot fail. Values arriving as loose JSON are
/// admitted through [`AttributeValue::from_json`], which rejects anything
/// outside this set with [`SnsError::UnsupportedAttributeType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// UTF-8 text, wired as `String`
    String(String),
    /// Signed integer, wired as `Number`
    Integer(i64),
    /// Arbitrary-precision decimal literal, wired as `Number`.
    /// Carried as text so precision survives the round trip.
    Decimal(String),
    /// Floating point number, wired as `Number`
    Float(f64),
    /// Raw bytes, wired as `Binary`
    Binary(Vec<u8>),
    /// List of strings, wired as `String.Array`
    StringArray(Vec<String>),
}

impl AttributeValue {
    /// Admit a loose JSON value into the supported attribute kinds
    ///
    /// Strings, numbers, and all-string arrays map onto their typed
    /// counterparts. Booleans, nulls, objects, and mixed arrays are not
    /// representable in the provider's attribute format and fail with
    /// [`SnsError::UnsupportedAttributeType`] naming the offending key.
    pub fn from_json(key: &str, value: &serde_json::Value) -> SnsResult<Self> {
        match value {
            serde_json::Value::String(s) => Ok(Self::String(s.clone())),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Self::Float(f))
                } else {
                    // u64 beyond i64::MAX with no f64 representation
                    Ok(Self::Decimal(n.to_string()))
                }
            }
            serde_json::Value::Array(items) => {
                let mut strings = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        serde_json::Value::String(s) => strings.push(s.clone()),
                        _ => {
                            return Err(SnsError::UnsupportedAttributeType {
                                key: key.to_string(),
                                kind: "array with non-string elements",
                            })
                        }
                    }
                }
                Ok(Self::StringArray(strings))
            }
            other => Err(SnsError::UnsupportedAttributeType {
                key: key.to_string(),
                kind: json_kind(other),
            }),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<u8>> for AttributeValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Binary(value)
    }
}

impl From<&[u8]> for AttributeValue {
    fn from(value: &[u8]) -> Self {
        Self::Binary(value.to_vec())
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(value: Vec<String>) -> Self {
        Self::StringArray(value)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(value: Vec<&str>) -> Self {
        Self::StringArray(value.into_iter().map(str::to_string).collect())
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Wire data type tag of a message attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireDataType {
    /// Raw UTF-8 text
    String,
    /// Numeric value encoded as a string
    Number,
    /// Raw bytes
    Binary,
    /// JSON-array-encoded list of strings
    #[serde(rename = "String.Array")]
    StringArray,
}

/// A message attribute in the provider's wire shape
///
/// Exactly one of `string_value` / `binary_value` is populated, matching the
/// `{DataType, StringValue | BinaryValue}` structure the provider expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireAttribute {
    /// Wire data type tag
    pub data_type: WireDataType,
    /// Value for `String`, `Number` and `String.Array` attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    /// Value for `Binary` attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_value: Option<Vec<u8>>,
}

impl WireAttribute {
    /// Build a string-carrying wire attribute
    pub fn string_valued(data_type: WireDataType, value: impl Into<String>) -> Self {
        Self {
            data_type,
            string_value: Some(value.into()),
            binary_value: None,
        }
    }

    /// Build a binary-carrying wire attribute
    pub fn binary_valued(value: Vec<u8>) -> Self {
        Self {
            data_type: WireDataType::Binary,
            string_value: None,
            binary_value: Some(value),
        }
    }
}

/// Coerce message attributes into the provider's typed wire format
///
/// Pure and total over [`AttributeValue`]: one wire entry per input key,
/// empty input maps to empty output. Numbers and string arrays are encoded
/// as canonical JSON scalars/arrays; strings and bytes pass through raw.
pub fn coerce_attributes(attributes: &AttributeMap) -> SnsResult<HashMap<String, WireAttribute>> {
    let mut wire = HashMap::with_capacity(attributes.len());
    for (key, value) in attributes {
        let attribute = match value {
            AttributeValue::String(s) => {
                WireAttribute::string_valued(WireDataType::String, s.clone())
            }
            AttributeValue::Integer(i) => {
                WireAttribute::string_valued(WireDataType::Number, i.to_string())
            }
            AttributeValue::Decimal(d) => {
                WireAttribute::string_valued(WireDataType::Number, d.clone())
            }
            AttributeValue::Float(f) => {
                WireAttribute::string_valued(WireDataType::Number, f.to_string())
            }
            AttributeValue::Binary(bytes) => WireAttribute::binary_valued(bytes.clone()),
            AttributeValue::StringArray(items) => {
                WireAttribute::string_valued(WireDataType::StringArray, serde_json::to_string(items)?)
            }
        };
        wire.insert(key.clone(), attribute);
    }
    Ok(wire)
}

/// Convert a map of loose JSON attribute values into typed attributes
///
/// Fails with [`SnsError::UnsupportedAttributeType`] on the first value
/// outside the supported kinds, producing no partial output.
pub fn attributes_from_json(
    attributes: &HashMap<String, serde_json::Value>,
) -> SnsResult<AttributeMap> {
    let mut typed = HashMap::with_capacity(attributes.len());
    for (key, value) in attributes {
        typed.insert(key.clone(), AttributeValue::from_json(key, value)?);
    }
    Ok(typed)
}
