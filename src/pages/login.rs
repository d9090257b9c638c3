//! Login page for club leaders and union admins.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route outside the guard. A successful sign-in replaces this entry
//! in history with the role's landing screen; a member account is turned
//! away with a pointer to the member app.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_services;
#[cfg(any(test, feature = "csr"))]
use crate::auth::AuthError;
use crate::auth::flow::Credentials;
#[cfg(any(test, feature = "csr"))]
use crate::config::ClientConfig;
use crate::routing::paths;
use crate::state::session::SessionState;

/// Link shown next to a role-rejection message, when one is configured.
#[cfg(any(test, feature = "csr"))]
fn member_app_link(error: &AuthError, config: &ClientConfig) -> Option<String> {
    match error {
        AuthError::RoleMismatch => config.member_app_url.clone(),
        _ => None,
    }
}

fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let services = use_services();
    let navigate = use_navigate();

    let account = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let member_link = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Already signed in: go straight to the landing screen.
    let navigate_landing = navigate.clone();
    Effect::new(move || {
        let state = session.get_untracked();
        if state.is_authenticated() {
            navigate_landing(paths::landing_for(&state), replace_options());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match Credentials::new(&account.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());
        member_link.set(None);

        #[cfg(feature = "csr")]
        {
            let services = services.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::auth::flow::login(&services.store, &services.api, &credentials).await {
                    Ok(outcome) => {
                        info.set(String::new());
                        password.set(String::new());
                        navigate(outcome.landing, replace_options());
                    }
                    Err(e) => {
                        member_link.set(member_app_link(&e, &services.config));
                        info.set(e.to_string());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&services, &navigate, credentials);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Club Admin"</h1>
                <p class="login-card__subtitle">"Sign in with your club leader or union account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Account"
                        prop:value=move || account.get()
                        on:input=move |ev| account.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || member_link.get().is_some()>
                    <a class="login-link" href=move || member_link.get().unwrap_or_default()>
                        "Go to the member app"
                    </a>
                </Show>
            </div>
        </div>
    }
}
