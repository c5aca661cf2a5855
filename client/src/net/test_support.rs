//! Scripted transport shared by client and session tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Transport};

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new(responses: Vec<Result<HttpResponse, ApiError>>) -> Arc<Self> {
        Arc::new(Self { responses: Mutex::new(responses.into()), sent: Mutex::new(Vec::new()) })
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.sent().pop().expect("no request sent")
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

/// Parsed JSON body of a recorded request. Key order on the wire is not significant.
pub fn body_json(request: &HttpRequest) -> serde_json::Value {
    let body = request.body.as_deref().expect("request has no body");
    serde_json::from_str(body).expect("request body is not JSON")
}

pub fn json(status: u16, body: &str) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse {
        status,
        status_text: status_text(status).to_owned(),
        content_type: Some("application/json".to_owned()),
        body: body.to_owned(),
    })
}

pub fn text(status: u16, body: &str) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse {
        status,
        status_text: status_text(status).to_owned(),
        content_type: Some("text/plain; charset=utf-8".to_owned()),
        body: body.to_owned(),
    })
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        _ => "",
    }
}

pub const ALICE_JSON: &str = r#"{"id":1,"username":"alice","email":"alice@example.com","is_active":true,"role":"TEACHER","created_at":"2025-01-02T03:04:05Z"}"#;

/// A task owned by `creator_id` with fixed text fields.
pub fn sample_task(id: i64, creator_id: i64, status: super::types::TaskStatus) -> super::types::Task {
    super::types::Task {
        id,
        title: format!("Task {id}"),
        description: "Solve it".to_owned(),
        answer: None,
        difficulty: 2,
        subject: "math".to_owned(),
        status,
        creator_id,
        created_at: None,
        updated_at: None,
        creator: None,
    }
}

/// A user with the given role.
pub fn sample_user(id: i64, username: &str, email: &str, role: super::types::Role) -> super::types::User {
    super::types::User {
        id,
        username: username.to_owned(),
        email: email.to_owned(),
        is_active: true,
        role,
        created_at: None,
        updated_at: None,
    }
}

/// A history row for task `task_id` owned by user 1.
pub fn sample_history(id: i64, task_id: i64, score: f64, timestamp: &str) -> super::types::TaskHistoryRow {
    super::types::TaskHistoryRow {
        id,
        user_id: 1,
        task_id,
        status: "CORRECT".to_owned(),
        timestamp: timestamp.to_owned(),
        answer: "42".to_owned(),
        score,
        feedback: None,
        user: None,
        task: None,
    }
}
