//! REST endpoint paths, relative to the API base address.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_REGISTER: &str = "/auth/register";
pub const AUTH_LOGOUT: &str = "/auth/logout";
pub const USERS_ME: &str = "/users/me";
pub const USERS: &str = "/users";
pub const TASKS: &str = "/tasks";
pub const MODERATION: &str = "/tasks/moderation";
pub const TASK_HISTORY_MY: &str = "/task-history/my";

pub fn task(id: i64) -> String {
    format!("{TASKS}/{id}")
}

pub fn moderation_decision(id: i64) -> String {
    format!("{MODERATION}/{id}")
}

pub fn task_history_by_status(status: &str) -> String {
    format!("{TASK_HISTORY_MY}/by-status?status={}", urlencoding::encode(status))
}

pub fn task_history_for_task(task_id: i64) -> String {
    format!("{TASK_HISTORY_MY}/task/{task_id}")
}

pub fn task_history_latest(task_id: i64) -> String {
    format!("{TASK_HISTORY_MY}/task/{task_id}/latest")
}
