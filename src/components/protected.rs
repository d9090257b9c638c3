//! Guarded rendering host for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route except login. Binds a `RouteGuard` to the shared session
//! store and to the router, and renders its children only while the latest
//! guard decision is `Permit`, so protected content never flashes before a
//! redirect lands.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::use_services;
use crate::routing::guard::{Navigator, RouteGuard};
use crate::state::observer::Subscription;

/// `Navigator` backed by the Leptos router.
struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
    pathname: Memo<String>,
}

impl Navigator for RouterNavigator {
    fn current_path(&self) -> String {
        self.pathname.get_untracked()
    }

    fn replace(&self, path: &str) {
        (self.navigate)(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }

    /// Path changes arrive through an effect owned by the enclosing
    /// component, which also fires once for the initial path.
    fn subscribe(&self, listener: Box<dyn Fn(&str)>) -> Subscription {
        let pathname = self.pathname;
        Effect::new(move || {
            let path = pathname.get();
            listener(&path);
        });
        Subscription::detached()
    }
}

/// Render `children` only when the route guard permits it.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let services = use_services();
    let navigator = RouterNavigator { navigate: Rc::new(use_navigate()), pathname: use_location().pathname };
    let guard = Rc::new(RouteGuard::new(services.store, navigator));

    // Initial decision is computed without side effects; the redirect, if
    // any, is issued by the path effect after this component mounts.
    let decision = RwSignal::new(guard.evaluate());
    let watch = guard.watch(move |next| decision.set(next));
    let _guard = StoredValue::new_local((guard, watch));

    view! {
        <Show when=move || decision.get().permits()>
            {children()}
        </Show>
    }
}
