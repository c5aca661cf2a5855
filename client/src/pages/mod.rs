//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and mutations and delegates rendering
//! details to `components`.

pub mod home;
pub mod login;
pub mod me;
pub mod moderation;
pub mod register;
pub mod task_history;
pub mod tasks;
pub mod users;
