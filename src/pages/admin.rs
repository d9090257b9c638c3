//! Union admin overview of every club.

use leptos::prelude::*;

use crate::components::session_bar::SessionBar;

#[component]
pub fn UnionClubsPage() -> impl IntoView {
    view! {
        <div class="union-clubs">
            <SessionBar/>
            <h1>"Clubs"</h1>
            <p>"Club registrations and status across the union."</p>
        </div>
    }
}
