use serde::{Deserialize, Serialize};

/// Body for POST /account. Fields are optional at the serde level so a
/// missing field maps to a 400 instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub identifier: Option<String>,
    pub name: Option<String>,
}

/// Body for PUT /account.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: Option<String>,
}

/// Confirmation body shared by the mutating endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
