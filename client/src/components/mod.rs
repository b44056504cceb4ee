//! Reusable UI components shared across pages.

pub mod nav_bar;
pub mod service_request_table;
