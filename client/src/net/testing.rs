//! In-memory [`Backend`] double for page-flow tests.

use std::cell::RefCell;

use super::api::{ApiError, Backend, products_path};
use super::types::{CsvFile, LoginRequest, LoginResponse, ProductPage, RegisterRequest, UploadResponse};
use crate::state::products::ProductQuery;

/// Canned responses plus a log of every request received, in order.
#[derive(Default)]
pub(crate) struct FakeBackend {
    pub login: Option<Result<LoginResponse, ApiError>>,
    pub register: Option<Result<(), ApiError>>,
    pub products: Option<Result<ProductPage, ApiError>>,
    pub upload: Option<Result<UploadResponse, ApiError>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

fn canned<T: Clone>(slot: Option<&Result<T, ApiError>>) -> Result<T, ApiError> {
    slot.cloned().unwrap_or(Err(ApiError::Status { status: 500 }))
}

impl Backend for FakeBackend {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record(format!("POST /login {}", request.email));
        canned(self.login.as_ref())
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.record(format!("POST /users {}", request.username));
        canned(self.register.as_ref())
    }

    async fn fetch_products(&self, query: &ProductQuery) -> Result<ProductPage, ApiError> {
        self.record(format!("GET {}", products_path(query)));
        canned(self.products.as_ref())
    }

    async fn upload_csv(&self, file: &CsvFile) -> Result<UploadResponse, ApiError> {
        self.record(format!("POST /api/upload-csv {}", file.name));
        canned(self.upload.as_ref())
    }
}
