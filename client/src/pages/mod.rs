//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Request flows are plain async functions over
//! [`crate::net::api::Backend`] so they run without a browser.

pub mod dashboard;
pub mod login;
pub mod register;

use crate::state::toast::Toast;

/// What an auth form shows and where it goes after the server answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthOutcome {
    pub toast: Toast,
    /// Route to navigate to; `None` keeps the user on the form.
    pub redirect: Option<&'static str>,
}
