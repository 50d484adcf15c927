//! Overlay with the two mode-switch buttons.

use leptos::prelude::*;

use crate::state::auth::AuthAction;

#[component]
pub fn TogglePanel(dispatch: Callback<AuthAction>) -> impl IntoView {
    view! {
        <div class="toggle-container">
            <div class="toggle">
                <div class="toggle-panel toggle-left">
                    <h1>"Welcome Back!"</h1>
                    <p>"Enter your personal details to use all site features"</p>
                    <button class="auth-button auth-button--ghost" type="button" on:click=move |_| dispatch.run(AuthAction::ShowSignIn)>
                        "Sign In"
                    </button>
                </div>
                <div class="toggle-panel toggle-right">
                    <h1>"Hello, Friend!"</h1>
                    <p>"Register with your personal details to use all site features"</p>
                    <button class="auth-button auth-button--ghost" type="button" on:click=move |_| dispatch.run(AuthAction::ShowSignUp)>
                        "Sign Up"
                    </button>
                </div>
            </div>
        </div>
    }
}
