//! Browser-session persistence for auth credentials.

pub mod storage;
