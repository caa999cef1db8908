use super::*;

#[test]
fn validate_username_input_trims_value() {
    assert_eq!(validate_username_input("  alice  "), Ok("alice".to_owned()));
}

#[test]
fn validate_username_input_requires_value() {
    assert_eq!(validate_username_input(""), Err("Enter a username first."));
    assert_eq!(validate_username_input("   "), Err("Enter a username first."));
}
