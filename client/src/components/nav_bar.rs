//! Top bar on the dashboard with the signed-in user and a logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_session;
use crate::config::LOGIN_ROUTE;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let username = move || session.with(|s| s.user().map(|u| u.username.clone()).unwrap_or_default());

    let on_logout = move |_| {
        session.update(|s| s.logout());
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Product Dashboard"</span>
            <div class="nav-bar__actions">
                <span class="nav-bar__user">{username}</span>
                <button class="btn btn--ghost" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
