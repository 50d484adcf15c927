//! Shared data shapes for the session record and identity-provider payloads.
//!
//! DESIGN
//! ======
//! `UserProfile` is the one record this app persists. Its serde shape is the
//! storage format: absent fields are omitted, so a sign-in record is just
//! `{"email": ...}`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::auth::{Field, FieldSet, Mode};

/// The signed-in user as persisted under the session key.
///
/// Values are raw JSON so identity-token claims are stored exactly as the
/// provider sent them, strings or not. Form submissions always write strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name. Absent for password sign-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    /// Email address. Only absent when an identity token carried no email claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
}

impl UserProfile {
    #[must_use]
    pub fn new(name: Option<&str>, email: Option<&str>) -> Self {
        Self { name: name.map(Value::from), email: email.map(Value::from) }
    }

    /// Build a profile from a submitted form.
    ///
    /// Sign-up carries the name through; sign-in records the email only.
    #[must_use]
    pub fn from_fields(fields: &FieldSet) -> Self {
        let name = match fields.mode() {
            Mode::SignIn => None,
            Mode::SignUp => Some(fields.get(Field::Name)),
        };
        Self::new(name, Some(fields.get(Field::Email)))
    }

    /// Build a profile from decoded identity-token claims, taking both values verbatim.
    #[must_use]
    pub fn from_claims(claims: &TokenClaims) -> Self {
        Self { name: claims.name.clone(), email: claims.email.clone() }
    }

    /// Text for the "Signed in as" banner: the name, else the email.
    ///
    /// String values are shown bare; anything else is shown as its JSON text.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.name.as_ref().or(self.email.as_ref()).map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Claims read from an identity token payload.
///
/// Only `name` and `email` are used, and they are kept as whatever JSON the
/// token holds. Everything else (`sub`, `picture`, `exp`, ...) is kept in
/// `extra` for logging.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
