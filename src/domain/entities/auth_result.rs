//! Successful login response body.

use serde::de::IgnoredAny;
use serde_json::Value;

/// Opaque user data returned by the login endpoint on success.
///
/// The shape is owned by the server. The body text is kept as received
/// (surrounding whitespace aside), stored under
/// [`crate::domain::messages::USER_DATA_KEY`] and never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult(String);

impl AuthResult {
    /// Wraps a response body after checking that it is a single JSON value.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if `body` is not valid JSON.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<IgnoredAny>(body)?;
        Ok(Self(body.trim().to_owned()))
    }

    /// The body as compact JSON, in `body`'s own key order.
    pub fn new(body: &Value) -> Self {
        Self(body.to_string())
    }

    /// The body text written into session storage.
    pub fn as_json(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_key_order_and_numbers() {
        let body = r#"{"name":"Ana","email":"user@example.com","access_level":"read","score":1.0}"#;
        let result = AuthResult::from_json(body).unwrap();
        assert_eq!(result.as_json(), body);
    }

    #[test]
    fn test_from_json_trims_surrounding_whitespace() {
        let result = AuthResult::from_json("\n  {\"id\": 1}\n").unwrap();
        assert_eq!(result.as_json(), "{\"id\": 1}");
    }

    #[test]
    fn test_from_json_rejects_invalid_bodies() {
        assert!(AuthResult::from_json("<html>Bad Gateway</html>").is_err());
        assert!(AuthResult::from_json(r#"{"id":1} trailing"#).is_err());
        assert!(AuthResult::from_json("").is_err());
    }

    #[test]
    fn test_non_object_bodies_are_kept() {
        assert_eq!(AuthResult::from_json("[1,2,3]").unwrap().as_json(), "[1,2,3]");
        assert_eq!(AuthResult::from_json("null").unwrap().as_json(), "null");
    }

    #[test]
    fn test_new_is_compact() {
        let result = AuthResult::new(&json!({"id": 1, "name": "Ana"}));
        assert_eq!(result.as_json(), r#"{"id":1,"name":"Ana"}"#);
    }
}
