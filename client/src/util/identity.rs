//! Identity-provider callback handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Google Identity Services button calls back with a signed JWT. This
//! module reads the payload segment, turns the `name`/`email` claims into a
//! [`UserProfile`] and records it. The password form and its validator are
//! not involved on this path.
//!
//! TRADE-OFFS
//! ==========
//! The token signature, issuer, audience and expiry are NOT checked. Claims are
//! trusted as delivered to the page. This is only acceptable because nothing
//! server-side consumes the stored profile; anything that does must verify the
//! token against Google's keys first.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::net::types::{TokenClaims, UserProfile};
use crate::util::session::{self, SessionStore, StorageError};

/// Error returned by [`decode_claims`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The token has no payload segment.
    #[error("invalid token: missing payload segment")]
    MissingPayload,
    /// The payload segment is not valid base64 in either alphabet.
    #[error("invalid token payload encoding: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The payload decoded but is not a JSON claims object.
    #[error("invalid token payload json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned by [`on_success`].
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Reasons the provider flow ended without a credential.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider reported a failure (cancelled popup, network, blocked).
    #[error("identity provider sign-in failed")]
    Failed,
    /// The provider script is not loaded on the page.
    #[error("identity provider script not loaded")]
    NotLoaded,
    /// The provider rejected initialization or button rendering.
    #[error("identity provider setup failed: {0}")]
    Setup(String),
    /// The callback fired without a `credential` field.
    #[error("identity provider response had no credential")]
    MissingCredential,
}

/// Decode the claims of `token` without verifying it.
///
/// Only the second dot-separated segment is read. Trailing `=` padding is
/// accepted, as are the standard-alphabet `+` and `/` in place of `-` and `_`.
/// The `name` and `email` claims may hold any JSON value.
///
/// # Errors
///
/// Returns [`DecodeError`] if the payload segment is missing, not base64, or
/// not a JSON object.
pub fn decode_claims(token: &str) -> Result<TokenClaims, DecodeError> {
    let payload = token.split('.').nth(1).ok_or(DecodeError::MissingPayload)?;
    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD.decode(normalized)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Handle a credential delivered by the provider: decode, build the profile,
/// and record it.
///
/// Decode failures are logged here and nothing is written.
///
/// # Errors
///
/// Returns [`IdentityError::Decode`] for a malformed token and
/// [`IdentityError::Storage`] when the record write fails.
pub fn on_success<S: SessionStore + ?Sized>(store: &S, credential: &str) -> Result<UserProfile, IdentityError> {
    let claims = match decode_claims(credential) {
        Ok(claims) => claims,
        Err(e) => {
            leptos::logging::error!("Error during Google sign-in: {e}");
            return Err(e.into());
        }
    };
    leptos::logging::log!(
        "decoded identity token: name={:?} email={:?} extra_claims={}",
        claims.name,
        claims.email,
        claims.extra.len()
    );

    let profile = UserProfile::from_claims(&claims);
    session::record(store, &profile)?;
    Ok(profile)
}

/// Handle a failed or abandoned provider flow. Logs only.
pub fn on_error(err: &ProviderError) {
    leptos::logging::error!("Google sign-in failed: {err}");
}
