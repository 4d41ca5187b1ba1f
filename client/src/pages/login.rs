//! Login page: email + password against the REST auth endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the session store is populated (and persisted) before the
//! router moves to the dashboard, so the route guard sees an authenticated
//! session on arrival.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::use_session;
use crate::components::field_error::FieldError;
use crate::config::{DASHBOARD_ROUTE, REGISTER_ROUTE};
use crate::net::api::{ApiError, Backend};
use crate::net::types::LoginResponse;
use crate::pages::AuthOutcome;
use crate::state::forms::{FormPhase, LoginErrors, LoginFields, validate_login};
use crate::state::session::SessionStore;
use crate::state::toast::{Toast, ToastQueue};
use crate::util::storage::DurableStorage;

/// Result of pressing "Login".
#[derive(Clone, Debug, PartialEq)]
pub enum LoginAttempt {
    /// Rejected locally; nothing was sent.
    Invalid(LoginErrors),
    Responded(Result<LoginResponse, ApiError>),
}

/// Validate `fields` and, if they pass, post them to the auth endpoint.
pub async fn attempt_login<B: Backend>(backend: &B, fields: &LoginFields) -> LoginAttempt {
    match validate_login(fields) {
        Err(errors) => LoginAttempt::Invalid(errors),
        Ok(request) => LoginAttempt::Responded(backend.login(&request).await),
    }
}

/// Apply the server's answer to the session.
pub fn complete_login<S: DurableStorage>(
    store: &mut SessionStore<S>,
    result: Result<LoginResponse, ApiError>,
) -> AuthOutcome {
    match result {
        Ok(LoginResponse { token, user }) => {
            let toast = Toast::success("Login successful", format!("Welcome back, {}!", user.username));
            store.login(token, user);
            AuthOutcome { toast, redirect: Some(DASHBOARD_ROUTE) }
        }
        Err(e) => {
            log::error!("login error: {e}");
            AuthOutcome {
                toast: Toast::destructive("Login failed", "Invalid email or password. Please try again."),
                redirect: None,
            }
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginErrors::default());
    let phase = RwSignal::new(FormPhase::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !phase.try_update(FormPhase::begin).unwrap_or(false) {
            return;
        }
        errors.set(LoginErrors::default());
        let fields = LoginFields { email: email.get_untracked(), password: password.get_untracked() };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let backend = crate::net::api::HttpBackend::new(
                    crate::config::api_base_url(),
                    crate::util::storage::BrowserStorage,
                );
                match attempt_login(&backend, &fields).await {
                    LoginAttempt::Invalid(found) => {
                        errors.set(found);
                        phase.set(FormPhase::Idle);
                    }
                    LoginAttempt::Responded(result) => {
                        let Some(outcome) = session.try_update(|s| complete_login(s, result)) else {
                            return;
                        };
                        phase.update(|p| p.finish(outcome.redirect.is_some()));
                        crate::components::toaster::show_toast(toasts, outcome.toast);
                        phase.update(FormPhase::settle);
                        if let Some(route) = outcome.redirect {
                            navigate(route, leptos_router::NavigateOptions::default());
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (fields, session, toasts, &navigate);
        }
    };

    let submitting = move || phase.get().is_submitting();

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Login"</h1>
                <label class="auth-field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().email)/>
                </label>
                <label class="auth-field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().password)/>
                </label>
                <button class="btn btn--primary" type="submit" disabled=submitting>
                    {move || if submitting() { "Please wait" } else { "Login" }}
                </button>
                <p class="auth-card__switch">
                    "Don't have an account? " <A href=REGISTER_ROUTE>"Create one"</A>
                </p>
            </form>
        </div>
    }
}
