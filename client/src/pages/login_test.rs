use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice ", "secret"),
        Ok(Credentials { username: "alice".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let credentials = validate_login_input("alice", " pass ").unwrap();
    assert_eq!(credentials.password, " pass ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter username and password."));
    assert_eq!(validate_login_input("alice", ""), Err("Enter username and password."));
}
