//! Identity-provider configuration shared by the server render and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server reads `GOOGLE_CLIENT_ID` once at startup and renders it into the
//! HTML shell as a `<meta>` tag. The hydrated client reads the same tag back,
//! so both sides agree on whether the Google button exists.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable holding the Google OAuth client ID.
pub const CLIENT_ID_ENV: &str = "GOOGLE_CLIENT_ID";

/// `<meta name=...>` used to hand the client ID to the browser.
pub const CLIENT_ID_META: &str = "google-client-id";

/// Federated sign-in settings. `client_id == None` disables the Google button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityConfig {
    pub client_id: Option<String>,
}

impl IdentityConfig {
    /// Load from `GOOGLE_CLIENT_ID`. Missing or blank values disable federated sign-in.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_raw(std::env::var(CLIENT_ID_ENV).ok().as_deref())
    }

    /// Read the client ID the server rendered into the document head.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document() -> Self {
        let selector = format!("meta[name=\"{CLIENT_ID_META}\"]");
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&selector).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        Self::from_raw(raw.as_deref())
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let client_id = raw.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned);
        Self { client_id }
    }

    #[must_use]
    pub fn federated_enabled(&self) -> bool {
        self.client_id.is_some()
    }
}
