use super::*;
use crate::net::test_support::{ALICE_JSON, MockTransport, body_json, json, text};
use crate::net::transport::Method;

#[test]
fn extract_token_prefers_access_token() {
    let body = ApiBody::Json(serde_json::json!({ "access_token": "A", "token": "B" }));
    assert_eq!(extract_token(body), Some("A".to_owned()));
}

#[test]
fn extract_token_falls_back_to_token_field() {
    let body = ApiBody::Json(serde_json::json!({ "access_token": "", "token": "B" }));
    assert_eq!(extract_token(body), Some("B".to_owned()));
}

#[test]
fn extract_token_accepts_bare_string_bodies() {
    assert_eq!(extract_token(ApiBody::Json(serde_json::json!("J"))), Some("J".to_owned()));
    assert_eq!(extract_token(ApiBody::Text("\"T\"\n".to_owned())), Some("T".to_owned()));
}

#[test]
fn extract_token_rejects_objects_without_token() {
    assert_eq!(extract_token(ApiBody::Json(serde_json::json!({ "token_type": "bearer" }))), None);
    assert_eq!(extract_token(ApiBody::Text(String::new())), None);
    assert_eq!(extract_token(ApiBody::Json(serde_json::json!(42))), None);
}

#[tokio::test]
async fn login_posts_credentials_and_returns_token() {
    let transport = MockTransport::new(vec![json(200, r#"{"access_token":"XYZ","token_type":"bearer"}"#)]);
    let api = ApiClient::new("http://api.test", transport.clone());
    let creds = Credentials { username: "a".to_owned(), password: "b".to_owned() };

    assert_eq!(api.login(&creds).await.unwrap(), "XYZ");
    let req = transport.last();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "http://api.test/auth/login");
    assert_eq!(body_json(&req), serde_json::json!({ "username": "a", "password": "b" }));
}

#[tokio::test]
async fn login_without_token_fails() {
    let transport = MockTransport::new(vec![json(200, "{}")]);
    let api = ApiClient::new("http://api.test", transport);
    let creds = Credentials { username: "a".to_owned(), password: "b".to_owned() };
    assert_eq!(api.login(&creds).await.unwrap_err(), ApiError::MissingToken);
}

#[tokio::test]
async fn register_ignores_reply_body() {
    let transport = MockTransport::new(vec![text(201, "created")]);
    let api = ApiClient::new("http://api.test", transport.clone());
    let reg = Registration { email: "e@x".to_owned(), username: "u".to_owned(), password: "p".to_owned() };
    api.register(&reg).await.unwrap();
    assert_eq!(transport.last().url, "http://api.test/auth/register");
}

#[tokio::test]
async fn me_decodes_profile() {
    let transport = MockTransport::new(vec![json(200, ALICE_JSON)]);
    let api = ApiClient::new("http://api.test", transport);
    assert_eq!(api.me().await.unwrap().username, "alice");
}

#[tokio::test]
async fn logout_sends_given_token_when_client_has_none() {
    let transport = MockTransport::new(vec![json(204, "")]);
    let api = ApiClient::new("http://api.test", transport.clone());

    api.logout("t1").await.unwrap();
    let req = transport.last();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "http://api.test/auth/logout");
    assert_eq!(req.header("authorization"), Some("Bearer t1"));
}
