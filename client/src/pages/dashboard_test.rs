use futures::executor::block_on;

use super::*;
use crate::net::api::{ApiError, Backend};
use crate::net::testing::FakeBackend;
use crate::net::types::{CsvFile, Product, ProductPage, UploadResponse};
use crate::state::products::SortField;
use crate::state::toast::ToastVariant;
use crate::state::upload::UploadSelection;

fn product(id: i64, name: &str) -> Product {
    Product { id, name: name.to_owned(), price: 9.5, sku: format!("SKU-{id}"), description: String::new() }
}

fn page(products: Vec<Product>, total_pages: i64) -> ProductPage {
    ProductPage { products, total_pages }
}

/// Run one fetch cycle the way the page does, minus the signals.
fn fetch(backend: &FakeBackend, listing: &mut ProductListing) -> FetchOutcome {
    let ticket = listing.begin_fetch();
    let result = block_on(backend.fetch_products(&ticket.query));
    listing.finish_fetch(ticket, result)
}

#[test]
fn initial_fetch_requests_first_page_by_name() {
    let backend = FakeBackend { products: Some(Ok(page(vec![product(1, "Widget")], 3))), ..FakeBackend::default() };
    let mut listing = ProductListing::default();

    assert_eq!(fetch(&backend, &mut listing), FetchOutcome::Applied);
    assert_eq!(backend.calls(), vec!["GET /products?page=1&sort=name&order=asc".to_owned()]);
    assert_eq!(listing.products().len(), 1);
    assert_eq!(listing.total_pages(), 3);
    assert!(!listing.is_loading());
}

#[test]
fn page_and_sort_changes_shape_the_request() {
    let backend = FakeBackend { products: Some(Ok(page(vec![product(1, "Widget")], 3))), ..FakeBackend::default() };
    let mut listing = ProductListing::default();
    fetch(&backend, &mut listing);

    listing.go_to_page(2);
    listing.toggle_sort(SortField::Price);
    listing.toggle_sort(SortField::Price);
    fetch(&backend, &mut listing);

    assert_eq!(backend.calls().last().map(String::as_str), Some("GET /products?page=2&sort=price&order=desc"));
}

#[test]
fn fetch_failure_keeps_rows_and_shows_error_toast() {
    let mut backend = FakeBackend { products: Some(Ok(page(vec![product(1, "Widget")], 1))), ..FakeBackend::default() };
    let mut listing = ProductListing::default();
    fetch(&backend, &mut listing);

    backend.products = Some(Err(ApiError::Network("offline".to_owned())));
    let outcome = fetch(&backend, &mut listing);

    let toast = report_fetch(&outcome).expect("failure shows a toast");
    assert_eq!(toast.title, "Error");
    assert_eq!(toast.description, "Failed to fetch products. Please try again.");
    assert_eq!(toast.variant, ToastVariant::Destructive);
    assert_eq!(listing.products(), &[product(1, "Widget")]);
    assert!(!listing.is_loading());
}

#[test]
fn applied_and_stale_fetches_are_silent() {
    assert_eq!(report_fetch(&FetchOutcome::Applied), None);
    assert_eq!(report_fetch(&FetchOutcome::Stale), None);
}

#[test]
fn successful_upload_triggers_refetch() {
    let backend = FakeBackend {
        upload: Some(Ok(UploadResponse { inserted_count: 42 })),
        products: Some(Ok(page(vec![product(1, "Widget"), product(2, "Gadget")], 1))),
        ..FakeBackend::default()
    };
    let mut listing = ProductListing::default();
    let mut selection = UploadSelection::default();
    selection.select(CsvFile::new("products.csv", b"name,price,sku\n".to_vec()));

    let file = selection.begin().unwrap();
    let outcome = selection.finish(block_on(backend.upload_csv(&file)));
    assert_eq!(outcome.toast.description, "42 products have been uploaded and processed.");
    assert!(outcome.refresh);
    fetch(&backend, &mut listing);

    assert_eq!(
        backend.calls(),
        vec![
            "POST /api/upload-csv products.csv".to_owned(),
            "GET /products?page=1&sort=name&order=asc".to_owned(),
        ]
    );
    assert_eq!(listing.products().len(), 2);
    assert_eq!(selection.file(), None);
}
