//! Canonical route table.
//!
//! Every page the app renders is listed here once; `App` builds its router
//! from this table and links use [`Page::path`] instead of string literals.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Main,
    Login,
    Register,
    Profile,
    Spreadsheet,
}

impl Page {
    pub const ALL: [Page; 5] = [Page::Main, Page::Login, Page::Register, Page::Profile, Page::Spreadsheet];

    /// Absolute path, as used in links and redirects.
    pub fn path(self) -> &'static str {
        match self {
            Page::Main => "/",
            Page::Login => "/login",
            Page::Register => "/register",
            Page::Profile => "/me",
            Page::Spreadsheet => "/spreadsheets",
        }
    }

    /// Router segment, i.e. the path without its leading slash.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Document title shown while the page is mounted.
    pub fn name(self) -> &'static str {
        match self {
            Page::Main => "Home",
            Page::Login => "Sign in",
            Page::Register => "Register",
            Page::Profile => "Profile",
            Page::Spreadsheet => "Spreadsheets",
        }
    }

    /// Whether the page redirects signed-out visitors to [`Page::Login`].
    pub fn requires_session(self) -> bool {
        matches!(self, Page::Profile | Page::Spreadsheet)
    }
}
