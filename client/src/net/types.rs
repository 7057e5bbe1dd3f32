//! JSON DTOs for the storefront backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's snake_case JSON so serde derives stay
//! attribute-free; only optional/defaulted fields carry annotations.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The signed-in customer as returned by `/user`, `/login` and `/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// A catalog entry as listed by `/products`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// Decimal price rendered by the backend (e.g. `"19.99"`).
    pub price: String,
    /// Absolute image URL, when the product has one.
    #[serde(default)]
    pub image: Option<String>,
}

/// Body of `POST /login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

/// Body of `POST /register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Body of `POST /cart`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CartItemRequest {
    pub product_id: u64,
    pub quantity: u32,
}

const GENERIC_VALIDATION_MESSAGE: &str = "The given data was invalid.";

/// Backend validation failure body (`422`).
///
/// `{ "message": "...", "errors": { "email": ["The email has already been taken."] } }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ValidationErrors {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    /// Per-field messages in the order the backend sent them.
    pub errors: IndexMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Parse a failure body, tolerating empty or non-JSON bodies.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// First message for `field`, if the backend reported one.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.errors.get(field)?.first().map(String::as_str)
    }

    /// The most specific message available for display: the first field
    /// error in backend order, then the top-level message.
    #[must_use]
    pub fn first_message(&self) -> &str {
        self.errors
            .values()
            .find_map(|messages| messages.first())
            .map(String::as_str)
            .or_else(|| Some(self.message.as_str()).filter(|m| !m.is_empty()))
            .unwrap_or(GENERIC_VALIDATION_MESSAGE)
    }
}
