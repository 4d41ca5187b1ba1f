//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and form surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod data_table;
pub mod field_error;
pub mod file_upload;
pub mod nav_bar;
pub mod protected_route;
pub mod toaster;
