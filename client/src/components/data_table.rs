//! Product table with sortable headers and pagination controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard owns the [`ProductListing`] signal. Header clicks and page
//! buttons only mutate the listing's query; the dashboard reacts to the query
//! change and performs the fetch.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use leptos::prelude::*;

use crate::state::products::{ProductListing, SortField, SortOrder, format_usd};

/// Pagination caption, e.g. `Page 2 of 5`.
#[must_use]
pub fn page_label(current: u32, total: u32) -> String {
    format!("Page {current} of {total}")
}

/// Arrow shown next to the active sort column, empty for the others.
#[must_use]
pub fn sort_indicator(active: SortField, order: SortOrder, column: SortField) -> &'static str {
    if active != column {
        return "";
    }
    match order {
        SortOrder::Asc => " ▲",
        SortOrder::Desc => " ▼",
    }
}

#[component]
fn SortHeader(listing: RwSignal<ProductListing>, field: SortField, label: &'static str) -> impl IntoView {
    let indicator = move || listing.with(|l| sort_indicator(l.sort_field(), l.sort_order(), field));

    view! {
        <th>
            <button class="data-table__sort" on:click=move |_| listing.update(|l| l.toggle_sort(field))>
                {label}
                {indicator}
            </button>
        </th>
    }
}

#[component]
pub fn DataTable(listing: RwSignal<ProductListing>) -> impl IntoView {
    let rows = move || {
        listing.with(|l| {
            if l.products().is_empty() {
                return view! {
                    <tr>
                        <td class="data-table__empty" colspan="4">
                            "No results."
                        </td>
                    </tr>
                }
                .into_any();
            }
            l.products()
                .iter()
                .map(|p| {
                    view! {
                        <tr>
                            <td>{p.name.clone()}</td>
                            <td class="data-table__price">{format_usd(p.price)}</td>
                            <td>{p.sku.clone()}</td>
                            <td>{p.description.clone()}</td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    let label = move || listing.with(|l| page_label(l.current_page(), l.total_pages()));
    let prev_disabled = move || listing.with(|l| !l.has_previous());
    let next_disabled = move || listing.with(|l| !l.has_next());

    let on_prev = move |_| {
        listing.update(|l| {
            let page = l.current_page().saturating_sub(1);
            l.go_to_page(page);
        });
    };
    let on_next = move |_| {
        listing.update(|l| {
            let page = l.current_page().saturating_add(1);
            l.go_to_page(page);
        });
    };

    view! {
        <div class="data-table">
            <table>
                <thead>
                    <tr>
                        <SortHeader listing=listing field=SortField::Name label="Name"/>
                        <SortHeader listing=listing field=SortField::Price label="Price"/>
                        <th>"SKU"</th>
                        <th>"Description"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <div class="data-table__pagination">
                <button class="btn btn--outline" disabled=prev_disabled on:click=on_prev>
                    "Previous"
                </button>
                <span class="data-table__page">{label}</span>
                <button class="btn btn--outline" disabled=next_disabled on:click=on_next>
                    "Next"
                </button>
            </div>
        </div>
    }
}
