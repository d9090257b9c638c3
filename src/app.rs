//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::config::ClientConfig;
use crate::net::backend::AuthBackend;
use crate::pages::{
    admin::UnionClubsPage, club::ClubDashboardPage, home::HomeRedirect, login::LoginPage, terms::TermsPage,
};
use crate::state::persistence::BrowserPersistence;
#[cfg(feature = "csr")]
use crate::state::session::SessionState;
use crate::state::session::SessionStore;

/// Non-reactive services shared by every page.
///
/// Held in a local `StoredValue` because the store and API clients are
/// single-threaded (`Rc`-based) and Leptos contexts must be `Send + Sync`.
#[derive(Clone, Debug)]
pub struct AppServices {
    pub store: SessionStore,
    pub api: AuthBackend,
    pub config: ClientConfig,
}

/// Fetch the `AppServices` provided by `App`.
pub fn use_services() -> AppServices {
    expect_context::<StoredValue<AppServices, LocalStorage>>().get_value()
}

/// Root application component.
///
/// Restores the persisted session before any route renders, mirrors the
/// session into a signal for display, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store = SessionStore::persisted(BrowserPersistence::new(config.session_storage_key.clone()));
    let api = AuthBackend::from_config(&config);

    let session = RwSignal::new(store.snapshot());
    store.subscribe(move |state| session.set(state.clone())).keep();
    provide_context(session);

    // A restored session may have expired while the tab was closed.
    #[cfg(feature = "csr")]
    if store.with(SessionState::is_authenticated) {
        let (store, api) = (store.clone(), api.clone());
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::auth::flow::refresh_session(&store, &api).await {
                log::info!("restored session dropped: {e}");
            }
        });
    }

    provide_context(StoredValue::new_local(AppServices { store, api, config }));

    view! {
        <Title text="Club Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("terms")
                    view=|| view! { <Protected><TermsPage/></Protected> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Protected><HomeRedirect/></Protected> }
                />
                <Route
                    path=(StaticSegment("club"), StaticSegment("dashboard"))
                    view=|| view! { <Protected><ClubDashboardPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("clubs"))
                    view=|| view! { <Protected><UnionClubsPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
