//! Google Identity Services bindings.
//!
//! The GSI script (`https://accounts.google.com/gsi/client`) is loaded by the
//! HTML shell and exposes `google.accounts.id`. The panel calls `initialize`
//! once with the client ID and a credential callback; each form then calls
//! `renderButton` into its own host div. Only [`InitLatch`] exists outside the
//! `hydrate` build.

#[cfg(test)]
#[path = "gsi_test.rs"]
mod gsi_test;

use std::cell::Cell;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::identity::ProviderError;

/// One-way flag recording that GSI accepted a configuration for this page.
#[derive(Debug, Default)]
pub struct InitLatch(Cell<bool>);

impl InitLatch {
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.get()
    }

    /// Set the flag. Returns `true` only for the call that flipped it.
    pub fn set(&self) -> bool {
        !self.0.replace(true)
    }
}

#[cfg(feature = "hydrate")]
thread_local! {
    static INIT: InitLatch = InitLatch::default();
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = initialize, catch)]
    fn gsi_initialize(config: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = renderButton, catch)]
    fn gsi_render_button(parent: &web_sys::HtmlElement, options: &JsValue) -> Result<(), JsValue>;
}

/// Whether `window.google.accounts.id` exists.
#[cfg(feature = "hydrate")]
fn is_loaded() -> bool {
    ["google", "accounts", "id"]
        .iter()
        .try_fold(JsValue::from(js_sys::global()), |obj, key| {
            js_sys::Reflect::get(&obj, &JsValue::from_str(key))
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
        })
        .is_some()
}

#[cfg(feature = "hydrate")]
fn object(entries: &[(&str, JsValue)]) -> Result<JsValue, ProviderError> {
    let obj = js_sys::Object::new();
    for (key, value) in entries {
        js_sys::Reflect::set(&obj, &JsValue::from_str(key), value).map_err(setup_error)?;
    }
    Ok(obj.into())
}

#[cfg(feature = "hydrate")]
fn setup_error(e: JsValue) -> ProviderError {
    ProviderError::Setup(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

/// Register the client ID and credential callback with GSI.
///
/// GSI keeps one configuration per page, so only the first successful call
/// takes effect; later calls return `Ok(())` without touching GSI.
/// `on_response` receives the raw `credential` string from each callback, or
/// [`ProviderError::MissingCredential`] when the response carried none.
///
/// # Errors
///
/// Returns [`ProviderError::NotLoaded`] when the GSI script is absent and
/// [`ProviderError::Setup`] when GSI rejects the configuration.
#[cfg(feature = "hydrate")]
pub fn initialize<F>(client_id: &str, on_response: F) -> Result<(), ProviderError>
where
    F: Fn(Result<String, ProviderError>) + 'static,
{
    if INIT.with(InitLatch::is_set) {
        return Ok(());
    }
    if !is_loaded() {
        return Err(ProviderError::NotLoaded);
    }

    let callback = Closure::<dyn Fn(JsValue)>::new(move |response: JsValue| {
        let credential = js_sys::Reflect::get(&response, &JsValue::from_str("credential"))
            .ok()
            .and_then(|v| v.as_string())
            .ok_or(ProviderError::MissingCredential);
        on_response(credential);
    });

    let config = object(&[
        ("client_id", JsValue::from_str(client_id)),
        ("callback", callback.into_js_value()),
    ])?;
    gsi_initialize(&config).map_err(setup_error)?;
    INIT.with(InitLatch::set);
    Ok(())
}

/// Draw the "Continue with Google" pill button into `host`.
///
/// Does nothing until [`initialize`] has succeeded; its failure is reported
/// by the caller of `initialize`.
///
/// # Errors
///
/// Returns [`ProviderError::Setup`] when GSI rejects the rendering.
#[cfg(feature = "hydrate")]
pub fn render_button(host: &web_sys::HtmlElement) -> Result<(), ProviderError> {
    if !INIT.with(InitLatch::is_set) {
        return Ok(());
    }
    let options = object(&[
        ("type", JsValue::from_str("standard")),
        ("text", JsValue::from_str("continue_with")),
        ("shape", JsValue::from_str("pill")),
        ("width", JsValue::from_f64(250.0)),
    ])?;
    gsi_render_button(host, &options).map_err(setup_error)
}
