//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionStore>` is created in the root `App` component and
//! provided via context. Pages read it to decide what to render; route guards
//! read it to redirect signed-out visitors to `/login`.
//!
//! DESIGN
//! ======
//! Two states, signed out (initial) and signed in. `login` always succeeds
//! and overwrites any current identity; `logout` is idempotent. Identity and
//! token are private so they can only change together.
//!
//! The token is mirrored to storage under [`TOKEN_STORAGE_KEY`] on every
//! transition. It is never read back to rebuild the identity, so a page reload
//! always starts signed out.
//!
//! Login is a placeholder: no credential check and no server round-trip. The
//! identity id and token are fixed values until a real auth endpoint exists.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::storage::{BrowserStorage, TokenStorage};

/// Storage key the session token is mirrored under.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Id assigned to every placeholder login.
pub const PLACEHOLDER_USER_ID: i64 = 1;

/// Token assigned to every placeholder login.
pub const PLACEHOLDER_TOKEN: &str = "fake-token-123";

/// Minimal profile of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub username: String,
}

/// Owner of the current identity and token.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S = BrowserStorage> {
    identity: Option<Identity>,
    token: Option<String>,
    storage: S,
}

/// Context type shared by pages and guards.
pub type SessionSignal = RwSignal<SessionStore>;

impl<S: TokenStorage> SessionStore<S> {
    /// Create a signed-out store writing through `storage`.
    pub fn new(storage: S) -> Self {
        Self { identity: None, token: None, storage }
    }

    /// Sign in as `username`.
    pub fn login(&mut self, username: &str) {
        let token = PLACEHOLDER_TOKEN.to_owned();
        self.storage.set_item(TOKEN_STORAGE_KEY, &token);
        self.identity = Some(Identity {
            id: PLACEHOLDER_USER_ID,
            username: username.to_owned(),
        });
        self.token = Some(token);
        log::debug!("session: signed in as {username}");
    }

    /// Sign out. Calling this while signed out leaves the same end state.
    pub fn logout(&mut self) {
        if let Some(identity) = self.identity.take() {
            log::debug!("session: signed out {}", identity.username);
        }
        self.token = None;
        self.storage.remove_item(TOKEN_STORAGE_KEY);
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn username(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.username.as_str())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Create the session signal and provide it to descendants.
pub fn provide_session() -> SessionSignal {
    let session = RwSignal::new(SessionStore::default());
    provide_context(session);
    session
}

/// Fetch the session signal provided by [`provide_session`].
///
/// # Panics
///
/// Panics if called outside the `App` component tree.
pub fn use_session() -> SessionSignal {
    expect_context::<SessionSignal>()
}
