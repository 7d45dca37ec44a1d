//! Cart entity model
//!
//! The backend owns the cart's shape, so the record is kept as an opaque
//! JSON object rather than a fixed struct. The only field the client ever
//! interprets is the numeric `id` used for lookup and deletion.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, StorefrontError};

/// A server-defined cart record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    fields: Map<String, Value>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from an arbitrary JSON value
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::InvalidInput` if the value is not a JSON
    /// object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(StorefrontError::InvalidInput(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }

    /// The server-assigned identifier, if present
    pub fn id(&self) -> Option<i64> {
        self.fields.get("id").and_then(Value::as_i64)
    }

    /// Access a field by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set a field, replacing any existing value
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// True when the cart carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Strip fields the backend rejects on submission
    ///
    /// Nested object fields standing in for an unset relationship (their
    /// `id` is the empty string or `-1`) are dropped; scalar and array
    /// fields pass through untouched.
    pub fn sanitized(&self) -> Self {
        let fields = self
            .fields
            .iter()
            .filter(|(_, value)| match value {
                Value::Object(inner) => !matches!(
                    inner.get("id"),
                    Some(Value::String(s)) if s.is_empty()
                ) && !matches!(
                    inner.get("id"),
                    Some(Value::Number(n)) if n.as_i64() == Some(-1)
                ),
                _ => true,
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Self { fields }
    }

    /// View the cart as a JSON value
    pub fn as_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

impl std::fmt::Display for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Value::Object(self.fields.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cart(value: Value) -> Cart {
        Cart::from_value(value).unwrap()
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(Cart::from_value(json!([1, 2, 3])).is_err());
        assert!(Cart::from_value(json!("cart")).is_err());
        assert!(Cart::from_value(json!({"id": 1})).is_ok());
    }

    #[test]
    fn test_id_accessor() {
        assert_eq!(cart(json!({"id": 42})).id(), Some(42));
        assert_eq!(cart(json!({"name": "weekly"})).id(), None);
        assert_eq!(cart(json!({"id": "42"})).id(), None);
    }

    #[test]
    fn test_default_cart_is_empty() {
        let empty = Cart::default();
        assert!(empty.is_empty());
        assert_eq!(empty.id(), None);
    }

    #[test]
    fn test_sanitized_drops_blank_relationships() {
        let cart = cart(json!({
            "id": 1,
            "note": "weekly shop",
            "customer": {"id": ""},
            "order": {"id": -1},
            "coupon": {"id": 7, "code": "SAVE10"},
            "items": [{"id": 3}]
        }));

        let clean = cart.sanitized();
        assert_eq!(clean.get("id"), Some(&json!(1)));
        assert_eq!(clean.get("note"), Some(&json!("weekly shop")));
        assert!(clean.get("customer").is_none());
        assert!(clean.get("order").is_none());
        assert_eq!(clean.get("coupon"), Some(&json!({"id": 7, "code": "SAVE10"})));
        // Arrays are not relationship placeholders and pass through
        assert_eq!(clean.get("items"), Some(&json!([{"id": 3}])));
    }

    #[test]
    fn test_sanitized_keeps_scalars_and_nulls() {
        let cart = cart(json!({"id": 1, "note": null, "total": 12.5}));
        let clean = cart.sanitized();
        assert_eq!(clean.get("note"), Some(&Value::Null));
        assert_eq!(clean.get("total"), Some(&json!(12.5)));
    }

    #[test]
    fn test_serde_round_trip_is_transparent() {
        let original = json!({"id": 5, "note": "x"});
        let cart: Cart = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(serde_json::to_value(&cart).unwrap(), original);
    }
}
