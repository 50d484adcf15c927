//! One of the two password forms, with the Google button on top.

use leptos::prelude::*;

use crate::components::field_input::FieldInput;
use crate::components::google_button::GoogleSignInButton;
use crate::state::auth::{AuthAction, AuthPanelState, Field, Mode};

struct FormCopy {
    class: &'static str,
    title: &'static str,
    subtitle: &'static str,
    submit: &'static str,
}

fn copy(mode: Mode) -> FormCopy {
    match mode {
        Mode::SignIn => FormCopy {
            class: "form-container sign-in",
            title: "Sign In",
            subtitle: "or use your account",
            submit: "Sign In",
        },
        Mode::SignUp => FormCopy {
            class: "form-container sign-up",
            title: "Create Account",
            subtitle: "or use your email for registration",
            submit: "Sign Up",
        },
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Name => "text",
        Field::Email => "email",
        Field::Password => "password",
    }
}

#[component]
pub fn AuthForm(
    mode: Mode,
    state: RwSignal<AuthPanelState>,
    dispatch: Callback<AuthAction>,
    federated: bool,
) -> impl IntoView {
    let text = copy(mode);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatch.run(AuthAction::Submit(mode));
    };

    let inputs = mode
        .required_fields()
        .iter()
        .map(|field| {
            view! { <FieldInput mode=mode field=*field input_type=input_type(*field) state=state dispatch=dispatch/> }
        })
        .collect_view();

    view! {
        <div class=text.class>
            <form class="auth-form" on:submit=on_submit>
                <h1>{text.title}</h1>
                <GoogleSignInButton enabled=federated dispatch=dispatch/>
                <span class="auth-form__subtitle">{text.subtitle}</span>
                {inputs}
                {(mode == Mode::SignIn).then(|| view! { <a href="#" class="auth-form__forgot">"Forgot your password?"</a> })}
                <button class="auth-button" type="submit">
                    {text.submit}
                </button>
            </form>
        </div>
    }
}
