//! JSON success envelope shared by every endpoint.
//!
//! ```text
//! {"success":true}
//! {"success":false,"message":"Invalid login credentials"}
//! {"success":false,"error":"Failed to update profile"}
//! ```

use serde::{Deserialize, Serialize};

/// Response body returned by all JSON endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    /// `{"success":true}`.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
            error: None,
        }
    }

    /// Failure carrying a `message` field.
    #[must_use]
    pub fn failure_message(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Failure carrying an `error` field.
    #[must_use]
    pub fn failure_error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}
