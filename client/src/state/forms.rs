//! Login/registration form state and field validation.
//!
//! DESIGN
//! ======
//! Validators are plain functions returning either the request body to send
//! or a per-field error struct, so pages never build a request from input that
//! has not passed every rule.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{LoginRequest, RegisterRequest};

pub const MIN_PASSWORD_LEN: usize = 6;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";

/// Submission lifecycle shared by both auth forms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Last attempt failed. Held until the failure toast is shown, then
    /// [`FormPhase::settle`] moves back to `Idle`.
    Failed,
}

impl FormPhase {
    #[must_use]
    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }

    /// Enter `Submitting`. Returns `false` (and stays put) if a submission is
    /// already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    /// Leave `Submitting` with the request outcome.
    pub fn finish(&mut self, succeeded: bool) {
        *self = if succeeded { Self::Succeeded } else { Self::Failed };
    }

    /// Return a reported failure to `Idle`. Other phases are left alone.
    pub fn settle(&mut self) {
        if *self == Self::Failed {
            *self = Self::Idle;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl RegisterErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

/// Missing when blank after trimming. Used for email and username.
fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

/// Missing only when empty. Passwords are sent verbatim, so whitespace counts.
fn required_verbatim(value: &str, message: &'static str) -> Option<&'static str> {
    value.is_empty().then_some(message)
}

/// Check the login form; emails are trimmed, passwords sent verbatim.
///
/// # Errors
///
/// Returns the per-field messages when any field is missing.
pub fn validate_login(fields: &LoginFields) -> Result<LoginRequest, LoginErrors> {
    let errors = LoginErrors {
        email: required(&fields.email, EMAIL_REQUIRED),
        password: required_verbatim(&fields.password, PASSWORD_REQUIRED),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(LoginRequest { email: fields.email.trim().to_owned(), password: fields.password.clone() })
}

/// Check the registration form.
///
/// # Errors
///
/// Returns the per-field messages when a field is missing, the password is
/// shorter than [`MIN_PASSWORD_LEN`] characters, or the confirmation differs.
pub fn validate_register(fields: &RegisterFields) -> Result<RegisterRequest, RegisterErrors> {
    let password = required_verbatim(&fields.password, PASSWORD_REQUIRED)
        .or_else(|| (fields.password.chars().count() < MIN_PASSWORD_LEN).then_some(PASSWORD_TOO_SHORT));
    let confirm_password = required_verbatim(&fields.confirm_password, CONFIRM_REQUIRED)
        .or_else(|| (fields.confirm_password != fields.password).then_some(PASSWORDS_DIFFER));

    let errors = RegisterErrors {
        username: required(&fields.username, USERNAME_REQUIRED),
        email: required(&fields.email, EMAIL_REQUIRED),
        password,
        confirm_password,
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(RegisterRequest {
        username: fields.username.trim().to_owned(),
        email: fields.email.trim().to_owned(),
        password: fields.password.clone(),
    })
}
