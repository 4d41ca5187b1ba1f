//! Registration page. A new account is not signed in; the user is sent back
//! to the login form.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::FieldError;
use crate::config::LOGIN_ROUTE;
use crate::net::api::{ApiError, Backend};
use crate::pages::AuthOutcome;
use crate::state::forms::{FormPhase, RegisterErrors, RegisterFields, validate_register};
use crate::state::toast::{Toast, ToastQueue};

/// Validate `fields` and, if they pass, create the account.
///
/// # Errors
///
/// Returns the per-field messages without contacting the server when
/// validation fails.
pub async fn attempt_registration<B: Backend>(
    backend: &B,
    fields: &RegisterFields,
) -> Result<AuthOutcome, RegisterErrors> {
    let request = validate_register(fields)?;
    Ok(complete_registration(backend.register(&request).await))
}

#[must_use]
pub fn complete_registration(result: Result<(), ApiError>) -> AuthOutcome {
    match result {
        Ok(()) => AuthOutcome {
            toast: Toast::success("Account created successfully", "You can now log in with your new account."),
            redirect: Some(LOGIN_ROUTE),
        },
        Err(e) => {
            log::error!("registration error: {e}");
            AuthOutcome {
                toast: Toast::destructive(
                    "Registration failed",
                    "There was an error creating your account. Please try again.",
                ),
                redirect: None,
            }
        }
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let fields = RwSignal::new(RegisterFields::default());
    let errors = RwSignal::new(RegisterErrors::default());
    let phase = RwSignal::new(FormPhase::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !phase.try_update(FormPhase::begin).unwrap_or(false) {
            return;
        }
        errors.set(RegisterErrors::default());
        let current = fields.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let backend = crate::net::api::HttpBackend::new(
                    crate::config::api_base_url(),
                    crate::util::storage::BrowserStorage,
                );
                match attempt_registration(&backend, &current).await {
                    Err(found) => {
                        errors.set(found);
                        phase.set(FormPhase::Idle);
                    }
                    Ok(outcome) => {
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
            let _ = (current, toasts, &navigate);
        }
    };

    let submitting = move || phase.get().is_submitting();

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create an account"</h1>
                <label class="auth-field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        prop:value=move || fields.with(|f| f.username.clone())
                        on:input=move |ev| fields.update(|f| f.username = event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().username)/>
                </label>
                <label class="auth-field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || fields.with(|f| f.email.clone())
                        on:input=move |ev| fields.update(|f| f.email = event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().email)/>
                </label>
                <label class="auth-field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        prop:value=move || fields.with(|f| f.password.clone())
                        on:input=move |ev| fields.update(|f| f.password = event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().password)/>
                </label>
                <label class="auth-field">
                    <span>"Confirm password"</span>
                    <input
                        type="password"
                        prop:value=move || fields.with(|f| f.confirm_password.clone())
                        on:input=move |ev| fields.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().confirm_password)/>
                </label>
                <button class="btn btn--primary" type="submit" disabled=submitting>
                    {move || if submitting() { "Please wait" } else { "Register" }}
                </button>
                <p class="auth-card__switch">
                    "Already have an account? " <A href=LOGIN_ROUTE>"Login"</A>
                </p>
            </form>
        </div>
    }
}
