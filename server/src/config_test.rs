use super::*;

#[test]
fn parse_defaults_when_unset() {
    assert_eq!(HostConfig::parse(None, None), Ok(HostConfig::default()));
    assert_eq!(HostConfig::parse(Some(" "), Some("")), Ok(HostConfig::default()));
}

#[test]
fn parse_reads_host_and_port() {
    let config = HostConfig::parse(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn parse_rejects_bad_port() {
    assert_eq!(HostConfig::parse(None, Some("http")), Err(HostError::InvalidPort("http".to_owned())));
    assert_eq!(HostConfig::parse(None, Some("70000")), Err(HostError::InvalidPort("70000".to_owned())));
}

#[test]
fn parse_rejects_hostname() {
    assert_eq!(HostConfig::parse(Some("localhost"), None), Err(HostError::InvalidHost("localhost".to_owned())));
}

#[test]
fn error_messages_name_the_variable() {
    assert_eq!(HostError::InvalidPort("x".to_owned()).to_string(), "invalid PORT \"x\": expected 0-65535");
}

#[test]
fn from_env_reads_port() {
    // Env manipulation requires unsafe in edition 2024.
    unsafe {
        std::env::remove_var("HOST");
        std::env::set_var("PORT", "4321");
    }
    let config = HostConfig::from_env();
    unsafe { std::env::remove_var("PORT") };
    assert_eq!(config.map(|c| c.port), Ok(4321));
}
