//! JSON codec configuration for typed content assertions.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Configuration for deserializing and comparing JSON response bodies.
///
/// The codec is threaded explicitly into every typed-content assertion;
/// there is no process-wide serializer state. By default JSON object keys
/// are matched case-insensitively during structural comparison, which
/// bridges PascalCase and camelCase payloads.
///
/// # Examples
///
/// ```
/// use should_http::codec::JsonCodec;
///
/// let strict = JsonCodec::new().case_sensitive();
/// assert!(!strict.case_insensitive_keys);
/// ```
#[derive(Debug, Clone)]
pub struct JsonCodec {
    /// Match JSON object keys case-insensitively in structural comparisons.
    pub case_insensitive_keys: bool,
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self {
            case_insensitive_keys: true,
        }
    }
}

impl JsonCodec {
    /// Creates a codec with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires exact key casing in structural comparisons.
    pub fn case_sensitive(mut self) -> Self {
        self.case_insensitive_keys = false;
        self
    }

    /// Deserializes `text` into `T`.
    ///
    /// Field-name matching follows the target type's serde attributes.
    pub fn deserialize<T: DeserializeOwned>(&self, text: &str) -> Result<T, DeserializationError> {
        serde_json::from_str(text).map_err(|source| DeserializationError {
            target: std::any::type_name::<T>(),
            message: source.to_string(),
        })
    }

    /// Parses `text` into a JSON value tree.
    pub fn parse(&self, text: &str) -> Result<Value, DeserializationError> {
        self.deserialize(text)
    }
}

/// A response body that could not be deserialized as the requested type.
///
/// This is a data error, not an assertion mismatch: typed checks surface
/// it with its own "Failed to deserialize" message instead of rewording it
/// into an "Expected …" assertion failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeserializationError {
    target: &'static str,
    message: String,
}

impl DeserializationError {
    /// The fully qualified name of the requested target type.
    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl fmt::Display for DeserializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to deserialize response content as `{}`: {}",
            self.target, self.message
        )
    }
}

impl std::error::Error for DeserializationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_codec_defaults_to_case_insensitive_keys() {
        assert!(JsonCodec::new().case_insensitive_keys);
    }

    #[test]
    fn test_case_sensitive_toggle() {
        assert!(!JsonCodec::new().case_sensitive().case_insensitive_keys);
    }

    #[test]
    fn test_deserialize_valid_body() {
        let codec = JsonCodec::new();
        let point: Point = codec.deserialize(r#"{"x":1,"y":2}"#).unwrap();
        assert_eq!(point, Point { x: 1, y: 2 });
    }

    #[test]
    fn test_deserialize_invalid_body() {
        let codec = JsonCodec::new();
        let error = codec.deserialize::<Point>("not json").unwrap_err();
        assert!(error.target().ends_with("Point"));
        assert!(error.to_string().starts_with("Failed to deserialize response content as"));
    }

    #[test]
    fn test_parse_value_tree() {
        let codec = JsonCodec::new();
        let value = codec.parse(r#"{"id":7}"#).unwrap();
        assert_eq!(value["id"], 7);
    }
}
