//! Task, moderation, history and user-list endpoints.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use super::api::ApiClient;
use super::endpoints;
use super::error::ApiError;
use super::types::{ModerationDecision, Task, TaskCreate, TaskHistoryRow, TaskUpdate, User};

impl ApiClient {
    /// # Errors
    ///
    /// Request errors or [`ApiError::Decode`].
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get_json(endpoints::TASKS).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn create_task(&self, task: &TaskCreate) -> Result<(), ApiError> {
        let body = serde_json::to_value(task).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.post(endpoints::TASKS, Some(body)).await.map(drop)
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn update_task(&self, id: i64, patch: &TaskUpdate) -> Result<(), ApiError> {
        let body = serde_json::to_value(patch).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.patch(&endpoints::task(id), Some(body)).await.map(drop)
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&endpoints::task(id)).await.map(drop)
    }

    /// Tasks awaiting an approve/reject decision.
    ///
    /// # Errors
    ///
    /// Request errors or [`ApiError::Decode`].
    pub async fn moderation_queue(&self) -> Result<Vec<Task>, ApiError> {
        self.get_json(endpoints::MODERATION).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn moderate(&self, id: i64, approve: bool) -> Result<(), ApiError> {
        let body = serde_json::to_value(ModerationDecision { approve }).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.post(&endpoints::moderation_decision(id), Some(body)).await.map(drop)
    }

    /// # Errors
    ///
    /// Request errors or [`ApiError::Decode`].
    pub async fn my_history(&self) -> Result<Vec<TaskHistoryRow>, ApiError> {
        self.get_json(endpoints::TASK_HISTORY_MY).await
    }

    /// # Errors
    ///
    /// Request errors or [`ApiError::Decode`].
    pub async fn my_history_by_status(&self, status: &str) -> Result<Vec<TaskHistoryRow>, ApiError> {
        self.get_json(&endpoints::task_history_by_status(status)).await
    }

    /// # Errors
    ///
    /// Request errors or [`ApiError::Decode`].
    pub async fn my_history_for_task(&self, task_id: i64) -> Result<Vec<TaskHistoryRow>, ApiError> {
        self.get_json(&endpoints::task_history_for_task(task_id)).await
    }

    /// Most recent attempt for a task, if any.
    ///
    /// # Errors
    ///
    /// Request errors or [`ApiError::Decode`].
    pub async fn my_latest_for_task(&self, task_id: i64) -> Result<Option<TaskHistoryRow>, ApiError> {
        self.get_json(&endpoints::task_history_latest(task_id)).await
    }

    /// # Errors
    ///
    /// Request errors or [`ApiError::Decode`].
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json(endpoints::USERS).await
    }
}
