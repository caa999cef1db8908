//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that need a signed-in user apply identical redirect behavior.
//! Because the session is never restored from storage, a reload of a guarded
//! page always lands on `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::Page;
use crate::state::session::{SessionSignal, SessionStore};
use crate::util::storage::TokenStorage;

/// Whether a visitor to `page` should be sent to the login page.
pub fn should_redirect_unauth<S: TokenStorage>(page: Page, session: &SessionStore<S>) -> bool {
    page.requires_session() && !session.is_signed_in()
}

/// Redirect to `/login` whenever `page` is guarded and nobody is signed in.
pub fn install_unauth_redirect<F>(page: Page, session: SessionSignal, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let redirect = session.with(|s| should_redirect_unauth(page, s));
        if redirect {
            log::debug!("guard: {} requires a session", page.path());
            navigate(Page::Login.path(), NavigateOptions::default());
        }
    });
}
