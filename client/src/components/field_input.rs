//! Text input bound to one panel field, with its inline error.

use leptos::prelude::*;

use crate::state::auth::{AuthAction, AuthPanelState, Field, Mode};

#[component]
pub fn FieldInput(
    mode: Mode,
    field: Field,
    input_type: &'static str,
    state: RwSignal<AuthPanelState>,
    dispatch: Callback<AuthAction>,
) -> impl IntoView {
    let value = move || state.with(|s| s.fields(mode).get(field).to_owned());
    let error = move || state.with(|s| s.errors(mode).get(&field).cloned());
    let class = move || if error().is_some() { "auth-input auth-input--error" } else { "auth-input" };

    view! {
        <div class="auth-field">
            <input
                class=class
                type=input_type
                name=field.key()
                placeholder=field.label()
                prop:value=value
                on:input=move |ev| {
                    dispatch.run(AuthAction::Input { mode, field, value: event_target_value(&ev) });
                }
            />
            {move || error().map(|msg| view! { <p class="auth-field__error">{msg}</p> })}
        </div>
    }
}
