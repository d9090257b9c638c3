//! Club leader dashboard.
//!
//! Profile editing, applicant review, and notices live behind this screen;
//! their forms are served by separate pages not covered here.

use leptos::prelude::*;

use crate::components::session_bar::SessionBar;

#[component]
pub fn ClubDashboardPage() -> impl IntoView {
    view! {
        <div class="club-dashboard">
            <SessionBar/>
            <h1>"My club"</h1>
            <ul class="dashboard-sections">
                <li>"Club profile"</li>
                <li>"Applicants"</li>
                <li>"Notices"</li>
            </ul>
        </div>
    }
}
