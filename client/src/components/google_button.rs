//! "Continue with Google" button host.
//!
//! Renders an empty div on the server. After hydration the Google script
//! draws its own button into it. GSI itself is initialized by the panel, so
//! credentials arrive through the panel's callback, not here.

use leptos::prelude::*;

use crate::state::auth::AuthAction;

#[component]
pub fn GoogleSignInButton(enabled: bool, dispatch: Callback<AuthAction>) -> impl IntoView {
    let host = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let rendered = StoredValue::new(false);
        Effect::new(move || {
            let Some(el) = host.get() else {
                return;
            };
            if rendered.get_value() {
                return;
            }
            rendered.set_value(true);
            if let Err(e) = crate::util::gsi::render_button(&el) {
                dispatch.run(AuthAction::FederatedError(e));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = dispatch;

    enabled.then(|| view! { <div class="google-signin" node_ref=host></div> })
}
