//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the API base
//! address is baked in when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Address used when `TASKBANK_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Route unauthenticated visitors are sent to.
pub const LOGIN_ROUTE: &str = "/login";

/// Base address of the task bank API, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("TASKBANK_API_BASE_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
    raw.trim_end_matches('/').to_owned()
}
