//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{CLIENT_ID_META, IdentityConfig};
use crate::pages::login::LoginPage;

/// Google Identity Services script; loaded before hydration so the button can
/// render as soon as the panel mounts.
const GSI_SCRIPT_SRC: &str = "https://accounts.google.com/gsi/client";

/// HTML shell rendered on the server for SSR + hydration.
///
/// The identity config is provided as context for the server render and
/// emitted as a `<meta>` tag for the hydrated client.
pub fn shell(options: LeptosOptions, identity: IdentityConfig) -> impl IntoView {
    let client_id_meta = identity
        .client_id
        .clone()
        .map(|id| view! { <meta name=CLIENT_ID_META content=id/> });
    let gsi_script = identity
        .federated_enabled()
        .then(|| view! { <script src=GSI_SCRIPT_SRC></script> });
    provide_context(identity);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {client_id_meta}
                {gsi_script}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-panel.css"/>
        <Title text="Sign in"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
            </Routes>
        </Router>
    }
}
