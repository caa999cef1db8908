use super::*;

#[test]
fn accepts_valid_input_and_trims_username() {
    assert_eq!(
        validate_registration_input("  alice99 ", "hunter22"),
        Ok(RegistrationForm { username: "alice99".to_owned(), password: "hunter22".to_owned() })
    );
}

#[test]
fn rejects_username_length_out_of_range() {
    assert_eq!(
        validate_registration_input("ab", "hunter22"),
        Err("Username must be 3 to 30 characters.")
    );
    let long = "a".repeat(31);
    assert_eq!(
        validate_registration_input(&long, "hunter22"),
        Err("Username must be 3 to 30 characters.")
    );
    assert!(validate_registration_input(&"a".repeat(30), "hunter22").is_ok());
}

#[test]
fn rejects_username_with_symbols_or_spaces() {
    assert_eq!(
        validate_registration_input("al ice", "hunter22"),
        Err("Username may only contain letters and digits.")
    );
    assert_eq!(
        validate_registration_input("al_ice", "hunter22"),
        Err("Username may only contain letters and digits.")
    );
}

#[test]
fn rejects_short_password() {
    assert_eq!(
        validate_registration_input("alice", "abc123"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn rejects_single_class_passwords() {
    assert_eq!(
        validate_registration_input("alice", "12345678"),
        Err("Password must mix letters and digits.")
    );
    assert_eq!(
        validate_registration_input("alice", "abcdefgh"),
        Err("Password must mix letters and digits.")
    );
}

#[test]
fn accepts_password_with_symbols() {
    assert!(validate_registration_input("alice", "abcd!@#$").is_ok());
}

#[test]
fn only_ascii_digits_count_as_digits() {
    assert!(validate_registration_input("alice", "½½½½½½½½").is_ok());
    assert!(validate_registration_input("alice", "87654321").is_err());
}
