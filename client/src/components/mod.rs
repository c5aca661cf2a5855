//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and list widgets. They receive data and
//! callbacks as props; only the header and the guard see the session.

pub mod banner_error;
pub mod create_task_dialog;
pub mod data_table;
pub mod footer;
pub mod header;
pub mod protected;
pub mod roadmap;
pub mod score_chart;
pub mod status_badge;
pub mod task_card;
