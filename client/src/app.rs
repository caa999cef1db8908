//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::provide_api_client;
use crate::pages::{
    login::LoginPage, main_page::MainPage, profile::ProfilePage, register::RegisterPage,
    spreadsheet::SpreadsheetPage,
};
use crate::routes::Page;
use crate::state::session::provide_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the single session store, provides it and the API client as
/// context, and mounts one route per `Page`. Each page sets its own title
/// from [`Page::name`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_session();
    provide_api_client();

    view! {
        <Stylesheet id="leptos" href="/pkg/noexcel.css"/>
        <Title formatter=|text| format!("{text} | NoExcel")/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(Page::Main.segment()) view=MainPage/>
                <Route path=StaticSegment(Page::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(Page::Register.segment()) view=RegisterPage/>
                <Route path=StaticSegment(Page::Profile.segment()) view=ProfilePage/>
                <Route path=StaticSegment(Page::Spreadsheet.segment()) view=SpreadsheetPage/>
            </Routes>
        </Router>
    }
}
