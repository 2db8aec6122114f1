use std::fmt;

use serde::{Deserialize, Serialize};

/// Body UrbanAirship sends alongside a 400 response.
///
/// Only `error`, `error_code` and `details.error` are guaranteed; anything
/// missing decodes to its default and unknown fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorResponse {
    pub ok: bool,

    /// Top-level human readable message.
    pub error: String,

    pub error_code: i64,

    pub details: ErrorDetails,

    pub operation_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorDetails {
    pub error: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "urban error response. error_code: {} error :{} details_error :{}",
            self.error_code, self.error, self.details.error
        )
    }
}

impl std::error::Error for ErrorResponse {}
