//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::MAX_VALUE_SIZE;

/// Request body for the PUT operation (PUT /put)
///
/// # Fields
/// - `key`: The numeric cache key to store the value under
/// - `value`: The value to store
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// The cache key
    pub key: u64,
    /// The value to store
    pub value: String,
}

impl PutRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.value.len() > MAX_VALUE_SIZE {
            return Some(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_request_deserialize() {
        let json = r#"{"key": 7, "value": "hello"}"#;
        let req: PutRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, 7);
        assert_eq!(req.value, "hello");
    }

    #[test]
    fn test_put_request_rejects_non_numeric_key() {
        let json = r#"{"key": "seven", "value": "hello"}"#;
        assert!(serde_json::from_str::<PutRequest>(json).is_err());
    }

    #[test]
    fn test_validate_oversized_value() {
        let req = PutRequest {
            key: 1,
            value: "x".repeat(MAX_VALUE_SIZE + 1),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = PutRequest {
            key: 1,
            value: "test".to_string(),
        };
        assert!(req.validate().is_none());
    }
}
