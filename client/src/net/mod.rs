//! Networking modules for the product REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP client and its bearer-token interceptor, and `types`
//! defines the JSON wire schema.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
