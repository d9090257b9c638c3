//! Header strip with the signed-in role and a logout action.

use leptos::prelude::*;

use crate::app::use_services;
use crate::state::session::SessionState;

/// Session header shown on every protected screen.
///
/// Logging out only clears the session; the route guard sees the change and
/// sends the user to the login screen.
#[component]
pub fn SessionBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let services = use_services();
    let busy = RwSignal::new(false);

    let role_label = move || session.get().role().map(|r| r.label()).unwrap_or_default();
    let club = move || session.get().club_uuid().map(str::to_owned);

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let services = services.clone();
            leptos::task::spawn_local(async move {
                crate::auth::flow::logout(&services.store, &services.api).await;
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &services;
            busy.set(false);
        }
    };

    view! {
        <header class="session-bar">
            <span class="session-bar__role">{role_label}</span>
            <Show when=move || club().is_some()>
                <span class="session-bar__club">{move || club().unwrap_or_default()}</span>
            </Show>
            <button class="session-bar__logout" on:click=on_logout disabled=move || busy.get()>
                "Log out"
            </button>
        </header>
    }
}
