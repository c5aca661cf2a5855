//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the pure auth state machine and `auth` the manager that runs
//! it against storage and the API. `remote` and `pagination` are per-page
//! helpers with no shared state.

pub mod auth;
pub mod pagination;
pub mod remote;
pub mod session;
pub mod token_store;
