//! Registration page.
//!
//! Input is checked locally with the same rules the account service applies,
//! then posted to `/register`. A successful registration signs the new user
//! in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::accounts;
use crate::net::api::ApiClient;
use crate::routes::Page;
use crate::state::session::use_session;

const USERNAME_MIN_CHARS: usize = 3;
const USERNAME_MAX_CHARS: usize = 30;
const PASSWORD_MIN_CHARS: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
struct RegistrationForm {
    username: String,
    password: String,
}

fn validate_registration_input(username: &str, password: &str) -> Result<RegistrationForm, &'static str> {
    let username = username.trim();
    let name_len = username.chars().count();
    if !(USERNAME_MIN_CHARS..=USERNAME_MAX_CHARS).contains(&name_len) {
        return Err("Username must be 3 to 30 characters.");
    }
    if !username.chars().all(char::is_alphanumeric) {
        return Err("Username may only contain letters and digits.");
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err("Password must be at least 8 characters.");
    }
    if password.chars().all(|c| c.is_ascii_digit()) || password.chars().all(char::is_alphabetic) {
        return Err("Password must mix letters and digits.");
    }
    Ok(RegistrationForm { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match validate_registration_input(&username.get(), &password.get()) {
            Ok(form) => form,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match accounts::register(&api, &form.username, &form.password).await {
                Ok(user) => {
                    session.update(|s| s.login(&user.username));
                    info.set(String::new());
                    navigate(Page::Main.path(), NavigateOptions::default());
                }
                Err(e) => info.set(format!("Registration failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <Title text=Page::Register.name()/>
            <div class="login-card">
                <h1>"NoExcel"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=Page::Login.path()>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
