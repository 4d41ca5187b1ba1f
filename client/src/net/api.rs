//! REST client for the product API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! AUTH
//! ====
//! Every request re-reads the `token` storage key right before sending and
//! attaches `Authorization: Bearer <token>` when one is present, so a login
//! or logout takes effect on the very next request.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back unchanged as [`ApiError`]. Nothing here retries; callers
//! decide what the user sees.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CsvFile, LoginRequest, LoginResponse, ProductPage, RegisterRequest, UploadResponse};
use crate::state::products::ProductQuery;
use crate::util::storage::{DurableStorage, TOKEN_KEY};

/// Why a request produced no usable response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {status}")]
    Status { status: u16 },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// The four API calls the UI makes.
///
/// Pages talk to this trait rather than to `gloo-net` so the login, listing and
/// upload flows can be driven by a fake in tests.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `POST /login`.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// `POST /users`. The response body is not consumed.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;

    /// `GET /products?page=..&sort=..&order=..`.
    async fn fetch_products(&self, query: &ProductQuery) -> Result<ProductPage, ApiError>;

    /// `POST /api/upload-csv` with the file in multipart field `file`.
    async fn upload_csv(&self, file: &CsvFile) -> Result<UploadResponse, ApiError>;
}

pub(crate) const LOGIN_PATH: &str = "/login";
pub(crate) const USERS_PATH: &str = "/users";
pub(crate) const UPLOAD_PATH: &str = "/api/upload-csv";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const UPLOAD_FIELD: &str = "file";

/// Join `base` and an absolute `path` without doubling the slash.
pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Path and query string for one product page.
pub(crate) fn products_path(query: &ProductQuery) -> String {
    format!(
        "/products?page={}&sort={}&order={}",
        query.page,
        query.sort.as_str(),
        query.order.as_str()
    )
}

/// `Authorization` header value for the token currently in storage, if any.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer_value(storage: &impl DurableStorage) -> Option<String> {
    storage
        .get(TOKEN_KEY)
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {token}"))
}

/// The shared HTTP client: a base URL plus the storage the token is read from.
#[derive(Clone, Debug)]
pub struct HttpBackend<S> {
    base_url: String,
    storage: S,
}

impl<S: DurableStorage> HttpBackend<S> {
    pub fn new(base_url: impl Into<String>, storage: S) -> Self {
        Self { base_url: base_url.into(), storage }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Storage the bearer token is read from.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    /// Request interceptor: attach the bearer token when one is stored.
    #[cfg(feature = "hydrate")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match bearer_value(&self.storage) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status() });
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Package `file` as a `FormData` body with a single `file` part.
#[cfg(feature = "hydrate")]
fn csv_form_data(file: &CsvFile) -> Result<web_sys::FormData, ApiError> {
    let to_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));

    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(to_err)?;

    let form = web_sys::FormData::new().map_err(to_err)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &file.name)
        .map_err(to_err)?;
    Ok(form)
}

impl<S: DurableStorage> Backend for HttpBackend<S> {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = self
                .authorize(gloo_net::http::Request::post(&self.url(LOGIN_PATH)))
                .json(request)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            decode(send(req).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(LOGIN_PATH), request);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = self
                .authorize(gloo_net::http::Request::post(&self.url(USERS_PATH)))
                .json(request)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            send(req).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(USERS_PATH), request);
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_products(&self, query: &ProductQuery) -> Result<ProductPage, ApiError> {
        let url = self.url(&products_path(query));
        #[cfg(feature = "hydrate")]
        {
            let req = self
                .authorize(gloo_net::http::Request::get(&url))
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            decode(send(req).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    async fn upload_csv(&self, file: &CsvFile) -> Result<UploadResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            // No explicit Content-Type: the browser adds the multipart boundary.
            let form = csv_form_data(file)?;
            let req = self
                .authorize(gloo_net::http::Request::post(&self.url(UPLOAD_PATH)))
                .body(form)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            decode(send(req).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(UPLOAD_PATH), file);
            Err(ApiError::Unavailable)
        }
    }
}
