//! Networking modules for the `/api` backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `authorizer` attaches credentials, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod authorizer;
pub mod types;
