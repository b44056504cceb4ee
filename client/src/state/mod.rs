//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `requests`) so individual components
//! can depend on small focused models.

pub mod auth;
pub mod requests;
