use super::*;
use std::collections::HashSet;

#[test]
fn table_lists_five_pages() {
    assert_eq!(Page::ALL.len(), 5);
}

#[test]
fn paths_and_names_are_unique() {
    let paths: HashSet<_> = Page::ALL.iter().map(|p| p.path()).collect();
    let names: HashSet<_> = Page::ALL.iter().map(|p| p.name()).collect();
    assert_eq!(paths.len(), Page::ALL.len());
    assert_eq!(names.len(), Page::ALL.len());
}

#[test]
fn paths_match_expected_routes() {
    assert_eq!(Page::Main.path(), "/");
    assert_eq!(Page::Login.path(), "/login");
    assert_eq!(Page::Register.path(), "/register");
    assert_eq!(Page::Profile.path(), "/me");
    assert_eq!(Page::Spreadsheet.path(), "/spreadsheets");
}

#[test]
fn segment_strips_leading_slash() {
    assert_eq!(Page::Main.segment(), "");
    assert_eq!(Page::Profile.segment(), "me");
}

#[test]
fn names_are_page_titles() {
    assert_eq!(Page::Main.name(), "Home");
    assert_eq!(Page::Login.name(), "Sign in");
    assert_eq!(Page::Spreadsheet.name(), "Spreadsheets");
}

#[test]
fn only_profile_and_spreadsheet_require_session() {
    let guarded: Vec<_> = Page::ALL.into_iter().filter(|p| p.requires_session()).collect();
    assert_eq!(guarded, vec![Page::Profile, Page::Spreadsheet]);
}
