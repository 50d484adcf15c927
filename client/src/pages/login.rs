//! Landing route hosting the sign-in / sign-up panel.

use leptos::prelude::*;

use crate::components::auth_panel::AuthPanel;
use crate::config::IdentityConfig;

#[component]
pub fn LoginPage() -> impl IntoView {
    let identity = use_context::<IdentityConfig>().unwrap_or_default();

    view! {
        <div class="login-page">
            <AuthPanel client_id=identity.client_id/>
        </div>
    }
}
