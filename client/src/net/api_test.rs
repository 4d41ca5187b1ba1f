use super::*;
use crate::state::products::{SortField, SortOrder};
use crate::util::storage::MemoryStorage;

#[test]
fn endpoint_joins_without_double_slash() {
    assert_eq!(endpoint("http://localhost:3001", LOGIN_PATH), "http://localhost:3001/login");
    assert_eq!(endpoint("http://localhost:3001/", LOGIN_PATH), "http://localhost:3001/login");
    assert_eq!(endpoint("https://api.example.com/v1/", UPLOAD_PATH), "https://api.example.com/v1/api/upload-csv");
}

#[test]
fn products_path_formats_page_sort_and_order() {
    let query = ProductQuery { page: 2, sort: SortField::Price, order: SortOrder::Desc };
    assert_eq!(products_path(&query), "/products?page=2&sort=price&order=desc");
}

#[test]
fn products_path_default_query_is_first_page_by_name() {
    assert_eq!(products_path(&ProductQuery::default()), "/products?page=1&sort=name&order=asc");
}

#[test]
fn bearer_value_present_when_token_stored() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "t1")]);
    assert_eq!(bearer_value(&storage).as_deref(), Some("Bearer t1"));
}

#[test]
fn bearer_value_absent_without_token() {
    assert_eq!(bearer_value(&MemoryStorage::new()), None);
}

#[test]
fn bearer_value_absent_for_empty_token() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "")]);
    assert_eq!(bearer_value(&storage), None);
}

#[test]
fn bearer_value_tracks_storage_changes() {
    let storage = MemoryStorage::new();
    let backend = HttpBackend::new("http://localhost:3001", &storage);
    assert_eq!(bearer_value(backend.storage()), None);

    storage.set(TOKEN_KEY, "fresh");
    assert_eq!(bearer_value(backend.storage()).as_deref(), Some("Bearer fresh"));

    storage.remove(TOKEN_KEY);
    assert_eq!(bearer_value(backend.storage()), None);
}

#[test]
fn upload_uses_file_field() {
    assert_eq!(UPLOAD_FIELD, "file");
}

#[test]
fn api_error_messages_hide_nothing_from_logs() {
    assert_eq!(ApiError::Status { status: 401 }.to_string(), "request failed: 401");
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_backend_is_unavailable_off_browser() {
    let backend = HttpBackend::new("http://localhost:3001", MemoryStorage::new());
    let result = futures::executor::block_on(backend.fetch_products(&ProductQuery::default()));
    assert_eq!(result, Err(ApiError::Unavailable));
}
