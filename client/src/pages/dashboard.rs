//! Dashboard page: product table plus CSV upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches one page of products
//! whenever the page/sort query changes and again after a successful upload.
//!
//! TRADE-OFFS
//! ==========
//! Only the most recent fetch may write to the listing. Older responses are
//! dropped by generation, so a slow page-1 reply cannot overwrite page 2.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::components::file_upload::FileUpload;
use crate::components::nav_bar::NavBar;
use crate::state::products::{FetchOutcome, ProductListing};
use crate::state::toast::{Toast, ToastQueue};

#[must_use]
pub fn fetch_error_toast() -> Toast {
    Toast::destructive("Error", "Failed to fetch products. Please try again.")
}

/// Log a finished fetch and pick the toast to show, if any.
#[must_use]
pub fn report_fetch(outcome: &FetchOutcome) -> Option<Toast> {
    match outcome {
        FetchOutcome::Applied => None,
        FetchOutcome::Stale => {
            log::debug!("dropping stale product page");
            None
        }
        FetchOutcome::Failed(e) => {
            log::error!("error fetching products: {e}");
            Some(fetch_error_toast())
        }
    }
}

/// Fetch the listing's current query, superseding anything in flight.
fn fetch_page(listing: RwSignal<ProductListing>, toasts: RwSignal<ToastQueue>) {
    let Some(ticket) = listing.try_update(ProductListing::begin_fetch) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api::{Backend, HttpBackend};
        use crate::util::storage::BrowserStorage;

        let backend = HttpBackend::new(crate::config::api_base_url(), BrowserStorage);
        let result = backend.fetch_products(&ticket.query).await;
        let Some(outcome) = listing.try_update(|l| l.finish_fetch(ticket, result)) else {
            return;
        };
        if let Some(toast) = report_fetch(&outcome) {
            crate::components::toaster::show_toast(toasts, toast);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ticket, toasts);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let listing = RwSignal::new(ProductListing::default());

    let query = Memo::new(move |_| listing.with(ProductListing::query));
    Effect::new(move || {
        query.track();
        fetch_page(listing, toasts);
    });

    let refresh = Callback::new(move |()| fetch_page(listing, toasts));

    view! {
        <div class="dashboard-page">
            <NavBar/>
            <main class="dashboard-main">
                <section class="dashboard-section">
                    <h2>"Upload products"</h2>
                    <FileUpload on_upload_success=refresh/>
                </section>
                <section class="dashboard-section">
                    <h2>"Products"</h2>
                    <Show
                        when=move || listing.with(ProductListing::is_loading)
                        fallback=move || view! { <DataTable listing=listing/> }
                    >
                        <div class="spinner" role="status">
                            "Loading..."
                        </div>
                    </Show>
                </section>
            </main>
        </div>
    }
}
