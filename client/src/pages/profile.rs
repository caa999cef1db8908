//! Profile page showing the signed-in identity.
//!
//! Guarded: signed-out visitors are redirected to `/login`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::Page;
use crate::state::session::use_session;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    install_unauth_redirect(Page::Profile, session, navigate.clone());

    let identity = move || session.with(|s| s.identity().cloned());
    let on_logout = move |_| {
        session.update(|s| s.logout());
        navigate(Page::Login.path(), NavigateOptions::default());
    };

    view! {
        <div class="profile-page">
            <Title text=Page::Profile.name()/>
            <h1>"Profile"</h1>
            {move || identity().map(|user| view! {
                <dl class="profile-page__identity">
                    <dt>"User ID"</dt>
                    <dd>{user.id}</dd>
                    <dt>"Username"</dt>
                    <dd>{user.username}</dd>
                </dl>
            })}
            <button class="profile-page__logout" on:click=on_logout>
                "Sign out"
            </button>
            <a href=Page::Main.path()>"Back"</a>
        </div>
    }
}
