//! Login page: signs in with a username.
//!
//! Sign-in is local only; see `state::session` for the placeholder contract.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::Page;
use crate::state::session::use_session;

fn validate_username_input(raw: &str) -> Result<String, &'static str> {
    let username = raw.trim();
    if username.is_empty() {
        return Err("Enter a username first.");
    }
    Ok(username.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_username_input(&username.get()) {
            Ok(name) => {
                session.update(|s| s.login(&name));
                info.set(String::new());
                navigate(Page::Main.path(), NavigateOptions::default());
            }
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <Title text=Page::Login.name()/>
            <div class="login-card">
                <h1>"NoExcel"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? "
                    <a href=Page::Register.path()>"Register"</a>
                </p>
            </div>
        </div>
    }
}
