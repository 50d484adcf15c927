//! Sliding sign-in / sign-up panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `RwSignal<AuthPanelState>` and the dispatch callback. Every child
//! event ends up in [`AuthPanelState::dispatch`] against browser storage.
//!
//! ERROR HANDLING
//! ==============
//! A storage write failure is logged; the form keeps the validation result it
//! already showed. Decode and provider failures are logged inside the reducer.
//!
//! GOOGLE SIGN-IN
//! ==============
//! GSI is initialized here, once per panel, with a callback that feeds the
//! reducer. The two forms only ask GSI to draw a button into their host divs.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::components::toggle_panel::TogglePanel;
use crate::net::types::UserProfile;
use crate::state::auth::{AuthAction, AuthPanelState, Mode};
use crate::util::session::BrowserStorage;

#[component]
pub fn AuthPanel(client_id: Option<String>) -> impl IntoView {
    let state = RwSignal::new(AuthPanelState::default());

    let dispatch = Callback::new(move |action: AuthAction| {
        let mut outcome = Ok(None);
        state.update(|s| outcome = s.dispatch(action, &BrowserStorage));
        match outcome {
            Ok(Some(profile)) => leptos::logging::log!("session recorded for {:?}", profile.display_name()),
            Ok(None) => {}
            Err(e) => leptos::logging::error!("failed to save session: {e}"),
        }
    });

    #[cfg(feature = "hydrate")]
    if let Some(id) = client_id.as_deref() {
        let result = crate::util::gsi::initialize(id, move |response| {
            dispatch.run(match response {
                Ok(credential) => AuthAction::FederatedSuccess(credential),
                Err(e) => AuthAction::FederatedError(e),
            });
        });
        if let Err(e) = result {
            dispatch.run(AuthAction::FederatedError(e));
        }
    }
    let federated = client_id.is_some();

    // Storage is browser-only, so the stored profile is picked up after hydration.
    Effect::new(move || dispatch.run(AuthAction::Restore));

    let container_class = move || {
        if state.with(|s| s.mode == Mode::SignUp) { "auth-container active" } else { "auth-container" }
    };
    let signed_in_as = move || {
        state.with(|s| s.user.as_ref().and_then(UserProfile::display_name))
    };

    view! {
        <div class=container_class>
            <AuthForm mode=Mode::SignUp state=state dispatch=dispatch federated=federated/>
            <AuthForm mode=Mode::SignIn state=state dispatch=dispatch federated=federated/>
            <TogglePanel dispatch=dispatch/>
        </div>
        {move || {
            signed_in_as()
                .map(|who| {
                    view! {
                        <p class="auth-session">
                            "Signed in as "
                            <span>{who}</span>
                        </p>
                    }
                })
        }}
    }
}
