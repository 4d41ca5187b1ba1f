//! Inline validation message under a form field.

use leptos::prelude::*;

#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="form-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
