//! Build-time client configuration.
//!
//! The API base URL is baked into the WASM bundle from the `API_URL`
//! environment variable at compile time, falling back to the local
//! development API.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Login page; also where logout lands.
pub const LOGIN_ROUTE: &str = "/";
pub const REGISTER_ROUTE: &str = "/register";
/// Protected product dashboard.
pub const DASHBOARD_ROUTE: &str = "/dash-board";

/// Base URL for every API request.
#[must_use]
pub fn api_base_url() -> &'static str {
    resolve_api_url(option_env!("API_URL"))
}

fn resolve_api_url(configured: Option<&'static str>) -> &'static str {
    configured.map(str::trim).filter(|url| !url.is_empty()).unwrap_or(DEFAULT_API_URL)
}
