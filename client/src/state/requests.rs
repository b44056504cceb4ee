//! Service-request list state shared by the admin and client pages.
//!
//! DESIGN
//! ======
//! Pages own the fetch; this type only records what came back so the table
//! component can render loading, error and empty states uniformly.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use crate::net::api::ApiError;
use crate::net::types::ServiceRequest;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestsState {
    pub items: Vec<ServiceRequest>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RequestsState {
    /// Mark a fetch as in flight, keeping any rows already shown.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record the outcome of a fetch.
    pub fn finish(&mut self, result: Result<Vec<ServiceRequest>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Sum of prices across all loaded requests.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|r| r.price).sum()
    }
}

/// Render a price as dollars with two decimals.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
