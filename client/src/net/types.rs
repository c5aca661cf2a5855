//! Wire types for the task bank API.
//!
//! DESIGN
//! ======
//! These mirror the API's JSON payloads. Optional fields default so partial
//! payloads from older API versions still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role, which decides what the navigation offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Teacher,
    Moderator,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Teacher => "TEACHER",
            Self::Moderator => "MODERATOR",
            Self::Admin => "ADMIN",
        }
    }

    /// Moderators and admins see the moderation queue.
    pub fn can_moderate(self) -> bool {
        matches!(self, Self::Moderator | Self::Admin)
    }

    /// Only admins see the user list.
    pub fn can_manage_users(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// The authenticated user's public profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Moderation state of a task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    Approved,
    Rejected,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Status the task card toggle moves to.
    pub fn toggled(self) -> Self {
        match self {
            Self::Approved => Self::Rejected,
            Self::Pending | Self::Rejected => Self::Approved,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub answer: Option<String>,
    pub difficulty: i32,
    #[serde(default)]
    pub subject: String,
    pub status: TaskStatus,
    pub creator_id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub creator: Option<User>,
}

/// Payload for `POST /tasks`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    pub description: String,
    pub answer: String,
    pub difficulty: i32,
    pub subject: String,
}

/// Payload for `PATCH /tasks/{id}`; unset fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// One submitted solution attempt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskHistoryRow {
    pub id: i64,
    pub user_id: i64,
    pub task_id: i64,
    /// Free-form solution status reported by the API.
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub task: Option<Task>,
}

/// Body for `POST /tasks/moderation/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationDecision {
    pub approve: bool,
}

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub username: String,
    pub password: String,
}
