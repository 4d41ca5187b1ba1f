//! Toast stack rendered once at the app root.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages push notifications with [`show_toast`]; this component renders the
//! shared [`ToastQueue`] from context. In the browser each toast removes
//! itself after [`TOAST_LIFETIME_MS`].

use leptos::prelude::*;

use crate::state::toast::{TOAST_LIFETIME_MS, Toast, ToastQueue};

/// Show `toast` and schedule its dismissal.
pub fn show_toast(toasts: RwSignal<ToastQueue>, toast: Toast) {
    let id = toasts.try_update(|q| q.push(toast));

    #[cfg(feature = "hydrate")]
    if let Some(id) = id {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(TOAST_LIFETIME_MS))).await;
            toasts.try_update(|q| q.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, TOAST_LIFETIME_MS);
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.with(|q| q.items().to_vec())
                key=|(id, _)| *id
                children=move |(id, toast)| {
                    view! {
                        <div class=toast.variant.class() role="status">
                            <div class="toast__body">
                                <p class="toast__title">{toast.title}</p>
                                <p class="toast__description">{toast.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|q| q.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
