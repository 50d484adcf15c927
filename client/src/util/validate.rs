//! Presence checks for the sign-in and sign-up forms.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::state::auth::{ErrorMap, FieldSet, Mode};

/// Collect a `"<Field> is required"` message for every required field of
/// `mode` whose value is empty. An empty map means the form may be submitted.
///
/// Values are not trimmed, so whitespace-only input counts as present.
#[must_use]
pub fn validate(mode: Mode, fields: &FieldSet) -> ErrorMap {
    mode.required_fields()
        .iter()
        .filter(|field| fields.get(**field).is_empty())
        .map(|field| (*field, required_message(field.label())))
        .collect()
}

fn required_message(label: &str) -> String {
    format!("{label} is required")
}
