//! Networking modules for the task bank REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the request client, `transport` the browser seam underneath it,
//! `auth` and `tasks` the typed endpoint calls, and `types` the wire schema.

pub mod api;
pub mod auth;
pub mod endpoints;
pub mod error;
pub mod tasks;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
