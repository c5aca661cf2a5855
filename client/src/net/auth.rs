//! Auth endpoints: login, register, profile, logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use super::api::{ApiBody, ApiClient, ApiRequest};
use super::endpoints;
use super::error::ApiError;
use super::transport::Method;
use super::types::{Credentials, Registration, User};

impl ApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Request errors, or [`ApiError::MissingToken`] when the reply has no token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let body = serde_json::to_value(credentials).map_err(|e| ApiError::Encode(e.to_string()))?;
        let reply = self.post(endpoints::AUTH_LOGIN, Some(body)).await?;
        extract_token(reply).ok_or(ApiError::MissingToken)
    }

    /// Create an account. Does not log in.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let body = serde_json::to_value(registration).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.post(endpoints::AUTH_REGISTER, Some(body)).await.map(drop)
    }

    /// Profile of the user owning the configured token.
    ///
    /// # Errors
    ///
    /// Request errors or [`ApiError::Decode`].
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get_json(endpoints::USERS_ME).await
    }

    /// Server-side logout for `token`; not every deployment implements it.
    /// The token is sent explicitly since the client has usually been
    /// cleared by the time this runs.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let req = ApiRequest::new(Method::Post, endpoints::AUTH_LOGOUT)
            .with_header("Authorization", format!("Bearer {token}"));
        self.request(req).await.map(drop)
    }
}

/// Token from a login reply: `access_token`, then `token`, then a bare string body.
pub fn extract_token(body: ApiBody) -> Option<String> {
    let token = match body {
        ApiBody::Json(Value::Object(map)) => ["access_token", "token"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str).filter(|s| !s.is_empty()))
            .map(str::to_owned),
        ApiBody::Json(Value::String(s)) => Some(s),
        ApiBody::Json(_) => None,
        ApiBody::Text(s) => Some(s.trim().trim_matches('"').to_owned()),
    };
    token.filter(|t| !t.is_empty())
}
