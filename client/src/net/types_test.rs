use super::*;

// =============================================================
// Product page
// =============================================================

#[test]
fn product_page_parses_camel_case_total_pages() {
    let raw = serde_json::json!({
        "products": [
            { "id": 1, "name": "Widget", "price": 9.5, "sku": "W-1", "description": "A widget" }
        ],
        "totalPages": 3
    });
    let page: ProductPage = serde_json::from_value(raw).unwrap();
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.products.len(), 1);
    assert_eq!(page.products[0].name, "Widget");
    assert!((page.products[0].price - 9.5).abs() < f64::EPSILON);
}

#[test]
fn product_price_accepts_decimal_string() {
    let raw = serde_json::json!({ "id": 7, "name": "Bolt", "price": "12.30", "sku": "B-7", "description": "" });
    let product: Product = serde_json::from_value(raw).unwrap();
    assert!((product.price - 12.3).abs() < 1e-9);
}

#[test]
fn product_price_rejects_garbage_string() {
    let raw = serde_json::json!({ "id": 7, "name": "Bolt", "price": "cheap", "sku": "B-7" });
    assert!(serde_json::from_value::<Product>(raw).is_err());
}

#[test]
fn product_description_defaults_when_missing() {
    let raw = serde_json::json!({ "id": 2, "name": "Nut", "price": 1, "sku": "N-2" });
    let product: Product = serde_json::from_value(raw).unwrap();
    assert_eq!(product.description, "");
}

#[test]
fn product_id_accepts_integral_float() {
    let raw = serde_json::json!({ "id": 4.0, "name": "Gear", "price": 3, "sku": "G-4" });
    let product: Product = serde_json::from_value(raw).unwrap();
    assert_eq!(product.id, 4);
}

#[test]
fn product_id_rejects_fractional_float() {
    let raw = serde_json::json!({ "id": 4.5, "name": "Gear", "price": 3, "sku": "G-4" });
    assert!(serde_json::from_value::<Product>(raw).is_err());
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn login_response_parses_token_and_user() {
    let raw = r#"{"token":"t1","user":{"id":1,"username":"a","email":"a@b.com"}}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "t1");
    assert_eq!(resp.user, User { id: 1, username: "a".to_owned(), email: "a@b.com".to_owned() });
}

#[test]
fn register_request_serializes_without_confirm_field() {
    let req = RegisterRequest {
        username: "a".to_owned(),
        email: "a@b.com".to_owned(),
        password: "secret".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({ "username": "a", "email": "a@b.com", "password": "secret" }));
}

#[test]
fn upload_response_parses_inserted_count() {
    let resp: UploadResponse = serde_json::from_str(r#"{"insertedCount":42}"#).unwrap();
    assert_eq!(resp.inserted_count, 42);
}
