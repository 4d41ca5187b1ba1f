//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::components::toaster::Toaster;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::session::SessionStore;
use crate::state::toast::ToastQueue;
use crate::util::storage::BrowserStorage;

/// Session handle shared through context.
pub type SessionSignal = RwSignal<SessionStore<BrowserStorage>>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// The session store provided by [`App`].
///
/// # Panics
///
/// Panics when called outside the `App` tree.
pub fn use_session() -> SessionSignal {
    expect_context::<SessionSignal>()
}

/// Root application component.
///
/// Provides the session and toast contexts, restores any stored session once
/// the app is running in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: SessionSignal = RwSignal::new(SessionStore::new(BrowserStorage));
    let toasts = RwSignal::new(ToastQueue::default());

    provide_context(session);
    provide_context(toasts);

    // Effects only run after hydration, so server and first client render
    // both see an unhydrated session.
    Effect::new(move || {
        session.update(|s| {
            s.hydrate();
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/product-dashboard.css"/>
        <Title text="Product Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dash-board")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
        <Toaster/>
    }
}
