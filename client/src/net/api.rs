//! Request client for the task bank REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page and the session manager talk to the API through one
//! `ApiClient`. It owns the base address and the currently configured bearer
//! token, builds headers, issues exactly one request, and classifies the
//! response.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Http` with the most specific message
//! the body offers. Nothing is retried; failures go straight to the caller.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::transport::{BrowserTransport, HttpRequest, HttpResponse, Method, Transport};

/// Decoded body of a successful response.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiBody {
    Json(Value),
    Text(String),
}

impl ApiBody {
    /// Map the body onto `T`.
    ///
    /// Text bodies are tried as JSON first, then as a bare JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not fit `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            Self::Json(value) => serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string())),
            Self::Text(text) => serde_json::from_str(&text)
                .or_else(|_| serde_json::from_value(Value::String(text)))
                .map_err(|e| ApiError::Decode(e.to_string())),
        }
    }
}

/// Per-call request description; discarded after the response is handled.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub path: String,
    pub method: Method,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { path: path.into(), method, body: None, headers: Vec::new() }
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Shared handle to the API. Clones share the configured token.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    token: Arc<RwLock<String>>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token", &!self.token().is_empty())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            token: Arc::new(RwLock::new(String::new())),
            transport,
        }
    }

    /// Client for the browser build, pointed at the configured API address.
    pub fn browser() -> Self {
        Self::new(crate::config::api_base_url(), Arc::new(BrowserTransport))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configure the bearer token sent with every later request. Empty clears it.
    pub fn set_token(&self, token: &str) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token.to_owned();
    }

    pub fn token(&self) -> String {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Build the wire request for `req` using the current token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the body cannot be serialized.
    pub fn build_request(&self, req: &ApiRequest) -> Result<HttpRequest, ApiError> {
        let body = req
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: req.method,
            url: format!("{}{}", self.base_url, req.path),
            headers: build_headers(&self.token(), &req.headers),
            body,
        })
    }

    /// Issue `req` once and classify the response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] on transport failure and
    /// [`ApiError::Http`] for non-2xx statuses.
    pub async fn request(&self, req: ApiRequest) -> Result<ApiBody, ApiError> {
        let http = self.build_request(&req)?;
        let result = match self.transport.send(http).await {
            Ok(resp) => classify(resp),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            leptos::logging::warn!("{} {} failed: {e}", req.method.as_str(), req.path);
        }
        result
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get(&self, path: &str) -> Result<ApiBody, ApiError> {
        self.request(ApiRequest::new(Method::Get, path)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post(&self, path: &str, body: Option<Value>) -> Result<ApiBody, ApiError> {
        self.request(with_optional_body(ApiRequest::new(Method::Post, path), body)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn patch(&self, path: &str, body: Option<Value>) -> Result<ApiBody, ApiError> {
        self.request(with_optional_body(ApiRequest::new(Method::Patch, path), body)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete(&self, path: &str) -> Result<ApiBody, ApiError> {
        self.request(ApiRequest::new(Method::Delete, path)).await
    }

    /// `GET` and decode into `T`.
    ///
    /// # Errors
    ///
    /// Request errors, or [`ApiError::Decode`] when the body does not fit `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get(path).await?.decode()
    }

    /// `POST` a serializable body and decode the response into `T`.
    ///
    /// # Errors
    ///
    /// Request errors, [`ApiError::Encode`] or [`ApiError::Decode`].
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.post(path, Some(to_body(body)?)).await?.decode()
    }

    /// `PATCH` a serializable body and decode the response into `T`.
    ///
    /// # Errors
    ///
    /// Request errors, [`ApiError::Encode`] or [`ApiError::Decode`].
    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.patch(path, Some(to_body(body)?)).await?.decode()
    }
}

fn with_optional_body(req: ApiRequest, body: Option<Value>) -> ApiRequest {
    match body {
        Some(body) => req.with_body(body),
        None => req,
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// JSON content type, optional bearer token, then caller headers.
/// A caller header replaces a default with the same name.
fn build_headers(token: &str, extra: &[(String, String)]) -> Vec<(String, String)> {
    let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
    if !token.is_empty() {
        headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
    }
    for (name, value) in extra {
        headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        headers.push((name.clone(), value.clone()));
    }
    headers
}

fn classify(resp: HttpResponse) -> Result<ApiBody, ApiError> {
    if !resp.ok() {
        let message = error_message(resp.status, &resp.status_text, &resp.body);
        return Err(ApiError::Http { status: resp.status, message });
    }
    if resp.is_json() {
        if let Ok(value) = serde_json::from_str::<Value>(&resp.body) {
            return Ok(ApiBody::Json(value));
        }
    }
    Ok(ApiBody::Text(resp.body))
}

/// Message for a failed response: `detail` (string or list of messages),
/// then `message`, then the status line.
pub fn error_message(status: u16, status_text: &str, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|data| detail_message(data.get("detail")).or_else(|| non_empty_str(data.get("message"))))
        .unwrap_or_else(|| format!("{status} {status_text}").trim_end().to_owned())
}

fn detail_message(detail: Option<&Value>) -> Option<String> {
    match detail? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.as_str()),
                    other => other.get("msg").and_then(Value::as_str),
                })
                .filter(|s| !s.is_empty())
                .collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty()).map(str::to_owned)
}
