//! Terms-agreement page for club leaders.
//!
//! SYSTEM CONTEXT
//! ==============
//! The one protected screen a leader may reach before agreeing. Submitting
//! records the agreement server-side; only then does the session flip to
//! active and the rest of the dashboard open up. A failed submission shows a
//! notice that clears itself after a few seconds so the user can retry.

#[cfg(test)]
#[path = "terms_test.rs"]
mod terms_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_services;
use crate::routing::paths;
use crate::state::session::{SessionPhase, SessionState};

#[cfg(feature = "csr")]
const NOTICE_DISMISS_MS: u32 = 4_000;

/// One agreement item shown on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TermsItem {
    pub title: &'static str,
    pub summary: &'static str,
    pub required: bool,
}

pub const TERMS_ITEMS: &[TermsItem] = &[
    TermsItem {
        title: "Club administration terms of service",
        summary: "Rules for managing club profiles, recruitment, and notices on behalf of your club.",
        required: true,
    },
    TermsItem {
        title: "Collection and use of applicant information",
        summary: "Applicant data may only be used for reviewing applications to your club.",
        required: true,
    },
    TermsItem {
        title: "Union announcements by email",
        summary: "Receive union-wide announcements at your account's email address.",
        required: false,
    },
];

/// Whether every required item in `items` has its box in `checked` ticked.
pub fn can_submit(items: &[TermsItem], checked: &[bool]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, item)| !item.required || checked.get(i).copied().unwrap_or(false))
}

#[component]
pub fn TermsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let services = use_services();
    let navigate = use_navigate();

    let checked = RwSignal::new(vec![false; TERMS_ITEMS.len()]);
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Nothing to agree to for admins or leaders who already agreed.
    let navigate_landing = navigate.clone();
    Effect::new(move || {
        let state = session.get_untracked();
        if state.phase() == SessionPhase::AuthenticatedActive {
            navigate_landing(paths::landing_for(&state), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || !can_submit(TERMS_ITEMS, &checked.get()) {
            return;
        }
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "csr")]
        {
            let services = services.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::auth::flow::agree_terms(&services.store, &services.api).await {
                    Ok(()) => navigate(
                        paths::CLUB_DASHBOARD,
                        NavigateOptions { replace: true, ..NavigateOptions::default() },
                    ),
                    Err(e) => {
                        let message = e.to_string();
                        notice.set(Some(message.clone()));
                        gloo_timers::future::TimeoutFuture::new(NOTICE_DISMISS_MS).await;
                        if notice.get_untracked().as_deref() == Some(message.as_str()) {
                            notice.set(None);
                        }
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&services, &navigate);
            busy.set(false);
        }
    };

    let items = TERMS_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let on_toggle = move |ev| {
                let value = event_target_checked(&ev);
                checked.update(|c| {
                    if let Some(slot) = c.get_mut(i) {
                        *slot = value;
                    }
                });
            };
            view! {
                <li class="terms-item">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || checked.get().get(i).copied().unwrap_or(false)
                            on:change=on_toggle
                        />
                        <span class="terms-item__title">{item.title}</span>
                        <span class="terms-item__badge">{if item.required { "Required" } else { "Optional" }}</span>
                    </label>
                    <p class="terms-item__summary">{item.summary}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="terms-page">
            <h1>"Before you start"</h1>
            <p>"Club leaders must agree to the following terms to manage their club."</p>
            <form class="terms-form" on:submit=on_submit>
                <ul class="terms-list">{items}</ul>
                <button
                    class="terms-submit"
                    type="submit"
                    disabled=move || busy.get() || !can_submit(TERMS_ITEMS, &checked.get())
                >
                    "Agree and continue"
                </button>
            </form>
            <Show when=move || notice.get().is_some()>
                <p class="terms-notice" role="alert">{move || notice.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
