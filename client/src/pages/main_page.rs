//! Landing page.
//!
//! Pings the API once after hydration and shows whether it answered.

#[cfg(test)]
#[path = "main_page_test.rs"]
mod main_page_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::api::ApiClient;
use crate::net::spreadsheets;
use crate::routes::Page;
use crate::state::session::use_session;

fn api_status_text(reachable: Option<bool>) -> &'static str {
    match reachable {
        None => "API: checking...",
        Some(true) => "API: online",
        Some(false) => "API: unreachable",
    }
}

#[component]
pub fn MainPage() -> impl IntoView {
    let session = use_session();
    let api = expect_context::<ApiClient>();
    let api_reachable = RwSignal::new(None::<bool>);

    Effect::new(move |_| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let reachable = spreadsheets::ping(&api).await.is_ok_and(|pong| pong.ok);
            api_reachable.set(Some(reachable));
        });
    });

    let greeting = move || {
        session.with(|s| match s.username() {
            Some(name) => format!("Signed in as {name}"),
            None => "Not signed in".to_owned(),
        })
    };

    view! {
        <div class="main-page">
            <Title text=Page::Main.name()/>
            <h1>"NoExcel"</h1>
            <p class="main-page__status">{greeting}</p>
            <p class="main-page__api">{move || api_status_text(api_reachable.get())}</p>
            <Show
                when=move || session.with(|s| s.is_signed_in())
                fallback=|| view! {
                    <nav class="main-page__links">
                        <a href=Page::Login.path()>"Sign in"</a>
                        <a href=Page::Register.path()>"Register"</a>
                    </nav>
                }
            >
                <nav class="main-page__links">
                    <a href=Page::Spreadsheet.path()>"Spreadsheets"</a>
                    <a href=Page::Profile.path()>"Profile"</a>
                    <button class="main-page__logout" on:click=move |_| session.update(|s| s.logout())>
                        "Sign out"
                    </button>
                </nav>
            </Show>
        </div>
    }
}
