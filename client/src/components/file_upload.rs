//! CSV picker plus upload button for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The selected file is read into memory on change, posted as multipart form
//! data on click, and the parent is told to refresh once the server accepts it.
//!
//! ERROR HANDLING
//! ==============
//! Upload failures surface as a destructive toast; the selection is cleared
//! either way so the user re-picks the file to retry.

use leptos::prelude::*;

use crate::components::toaster::show_toast;
use crate::state::toast::ToastQueue;
use crate::state::upload::UploadSelection;

#[component]
pub fn FileUpload(on_upload_success: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let selection = RwSignal::new(UploadSelection::default());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::JsFuture;

            let Some(file) = input_ref.get().and_then(|input| input.files()).and_then(|files| files.get(0)) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let name = file.name();
                match JsFuture::from(file.array_buffer()).await {
                    Ok(buf) => {
                        let bytes = js_sys::Uint8Array::new(&buf).to_vec();
                        selection.update(|s| s.select(crate::net::types::CsvFile::new(name, bytes)));
                    }
                    Err(e) => log::warn!("could not read {name}: {e:?}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input_ref, selection);
        }
    };

    let on_upload = move |_| {
        let Some(started) = selection.try_update(UploadSelection::begin) else {
            return;
        };
        let file = match started {
            Ok(file) => file,
            Err(blocked) => {
                if let Some(toast) = blocked.toast() {
                    show_toast(toasts, toast);
                }
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::{Backend, HttpBackend};
            use crate::util::storage::BrowserStorage;

            let backend = HttpBackend::new(crate::config::api_base_url(), BrowserStorage);
            let result = backend.upload_csv(&file).await;
            let Some(outcome) = selection.try_update(|s| s.finish(result)) else {
                return;
            };
            show_toast(toasts, outcome.toast);
            if outcome.refresh {
                on_upload_success.run(());
            }
            if let Some(input) = input_ref.get() {
                input.set_value("");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (file, on_upload_success);
        }
    };

    let selected_name = move || selection.with(|s| s.file().map(|f| f.name.clone()));
    let button_label = move || if selection.with(UploadSelection::is_uploading) { "Uploading..." } else { "Upload" };

    view! {
        <div class="file-upload">
            <input type="file" accept=".csv" node_ref=input_ref on:change=on_change/>
            <button
                class="btn btn--primary"
                disabled=move || !selection.with(UploadSelection::can_upload)
                on:click=on_upload
            >
                {button_label}
            </button>
            <Show when=move || selected_name().is_some()>
                <p class="file-upload__selected">
                    "Selected file: " {move || selected_name().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
