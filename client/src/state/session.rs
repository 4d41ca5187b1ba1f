//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root owns one [`SessionStore`] and provides it through context.
//! Login and logout go through the store, which mirrors every change into
//! durable storage; route guards and the nav bar only read from it.
//!
//! TRADE-OFFS
//! ==========
//! [`SessionStore::check_auth`] treats a stored token as valid without asking
//! the server. A revoked or expired token keeps the dashboard open until a
//! request made with it fails.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage::{DurableStorage, TOKEN_KEY, USER_KEY};

/// Token and identity of the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// True only when both a token and a user are held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// What a protected route should render right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Startup hydration has not run yet.
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Single writer for the session; persists through `S`.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
    hydrated: bool,
}

impl<S: DurableStorage> SessionStore<S> {
    /// An empty, not-yet-hydrated store.
    pub fn new(storage: S) -> Self {
        Self { storage, session: Session::default(), hydrated: false }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    #[must_use]
    pub fn guard_state(&self) -> GuardState {
        if !self.hydrated {
            GuardState::Unknown
        } else if self.is_authenticated() {
            GuardState::Authenticated
        } else {
            GuardState::Unauthenticated
        }
    }

    /// Persist `token` + `user` and mark the session authenticated.
    pub fn login(&mut self, token: String, user: User) {
        self.storage.set(TOKEN_KEY, &token);
        match serde_json::to_string(&user) {
            Ok(raw) => self.storage.set(USER_KEY, &raw),
            Err(e) => log::error!("failed to serialize user for storage: {e}"),
        }
        self.session = Session { token: Some(token), user: Some(user) };
    }

    /// Forget the session in memory and in storage.
    pub fn logout(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.session = Session::default();
    }

    /// Restore the session from storage when both keys hold non-empty values.
    ///
    /// An unreadable stored user clears storage and reports `false`.
    pub fn check_auth(&mut self) -> bool {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let raw_user = self.storage.get(USER_KEY).filter(|u| !u.is_empty());
        let (Some(token), Some(raw_user)) = (token, raw_user) else {
            return false;
        };
        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => {
                self.session = Session { token: Some(token), user: Some(user) };
                true
            }
            Err(e) => {
                log::error!("error checking authentication: {e}");
                self.logout();
                false
            }
        }
    }

    /// Startup hydration: restore from storage once and leave `Unknown`.
    pub fn hydrate(&mut self) -> bool {
        let restored = self.check_auth();
        self.hydrated = true;
        restored
    }
}
