use super::*;

#[test]
fn http_error_displays_bare_message() {
    let err = ApiError::Http { status: 401, message: "Not authenticated".to_owned() };
    assert_eq!(err.to_string(), "Not authenticated");
}

#[test]
fn is_unauthorized_only_for_401() {
    assert!(ApiError::Http { status: 401, message: String::new() }.is_unauthorized());
    assert!(!ApiError::Http { status: 403, message: String::new() }.is_unauthorized());
    assert!(!ApiError::Network("offline".to_owned()).is_unauthorized());
}

#[test]
fn status_is_none_for_non_http_errors() {
    assert_eq!(ApiError::MissingToken.status(), None);
    assert_eq!(ApiError::Decode("x".to_owned()).status(), None);
    assert_eq!(ApiError::Http { status: 500, message: String::new() }.status(), Some(500));
}
