use super::*;

#[test]
fn validate_registration_input_trims_identity_fields() {
    let registration = validate_registration_input(" a@b.com ", " alice ", "pw").unwrap();
    assert_eq!(
        registration,
        Registration { email: "a@b.com".to_owned(), username: "alice".to_owned(), password: "pw".to_owned() }
    );
}

#[test]
fn validate_registration_input_requires_every_field() {
    assert_eq!(validate_registration_input("", "alice", "pw"), Err("Fill in email, username and password."));
    assert_eq!(validate_registration_input("a@b.com", " ", "pw"), Err("Fill in email, username and password."));
    assert_eq!(validate_registration_input("a@b.com", "alice", ""), Err("Fill in email, username and password."));
}

#[test]
fn validate_registration_input_checks_email_shape() {
    assert_eq!(validate_registration_input("alice", "alice", "pw"), Err("Enter a valid email."));
}
