//! Root route: forward to the signed-in user's landing screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::paths;
use crate::state::session::SessionState;

#[component]
pub fn HomeRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let target = paths::landing_for(&session.get_untracked());
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
}
