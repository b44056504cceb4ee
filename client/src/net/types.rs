//! Wire DTOs exchanged with the `/api` backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Optional fields are
//! omitted on serialize so payloads stay identical to what the server sent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A customer's request for a paid service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub id: i64,
    pub service_name: String,
    pub price: f64,
    /// Free-form workflow status (e.g. `"Pending"`, `"Completed"`).
    pub status: String,
    /// Creation timestamp as sent by the server (ISO-8601).
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Might not have a client attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<DocumentRef>>,
}

/// Reference to an uploaded document attached to a service request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    pub id: i64,
    pub file_name: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Credentials issued by the backend on successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    pub role: String,
}

impl ServiceRequest {
    /// Attached documents, empty when the server sent none.
    #[must_use]
    pub fn documents(&self) -> &[DocumentRef] {
        self.documents.as_deref().unwrap_or_default()
    }
}
