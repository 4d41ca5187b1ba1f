//! Route guard for pages that require a signed-in user.
//!
//! Renders a loading placeholder until the session store has hydrated from
//! storage, then either the children or nothing at all. It never redirects;
//! an unauthenticated visitor simply sees an empty page.

use leptos::prelude::*;

use crate::app::use_session;
use crate::state::session::GuardState;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    move || match session.with(|s| s.guard_state()) {
        GuardState::Unknown => view! { <div class="route-loading">"Loading..."</div> }.into_any(),
        GuardState::Authenticated => children().into_any(),
        GuardState::Unauthenticated => ().into_any(),
    }
}
